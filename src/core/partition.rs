use crate::core::keypoints::{BaseSkylines, SkylineList};
use crate::core::merge::merge;
use crate::core::trace::TRACE_HEADER;
use crate::domain::model::Skyline;
use crate::domain::ports::TraceSink;

/// Solves the skyline of all base skylines by recursive halving.
///
/// Every call, base cases included, first hands one block to `trace`, unless
/// the sink reports itself disabled, in which case nothing is rendered. The
/// first half is always solved before the second, so blocks arrive in
/// depth-first pre-order.
pub fn solve(base: &BaseSkylines, trace: &mut dyn TraceSink) -> Skyline {
    divide(base.as_slice(), trace)
}

fn divide(skylines: &[Skyline], trace: &mut dyn TraceSink) -> Skyline {
    debug_assert!(!skylines.is_empty());
    if trace.enabled() {
        trace.append(&trace_block(skylines));
    }

    match skylines {
        [only] => only.clone(),
        _ => {
            let (first, second) = skylines.split_at(skylines.len() / 2);
            let left = divide(first, trace);
            let right = divide(second, trace);
            merge(&left, &right)
        }
    }
}

pub fn trace_block(skylines: &[Skyline]) -> String {
    format!("{}{}\n", TRACE_HEADER, SkylineList(skylines))
}
