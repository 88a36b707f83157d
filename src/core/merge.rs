use crate::domain::model::{Point, Skyline};

/// Merges two skylines into the outline of their union.
///
/// Both point lists are swept once, left to right. For each side the height
/// it last declared is remembered, so a point from one side is raised to the
/// other side's still-standing height. A point is emitted only when the
/// resulting height changes, which keeps consecutive heights distinct.
pub fn merge(left: &Skyline, right: &Skyline) -> Skyline {
    let a = left.points();
    let b = right.points();

    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    let (mut last_left, mut last_right) = (0, 0);
    let mut last_emitted = 0;

    while i < a.len() || j < b.len() {
        let (x, height) = if i >= a.len() {
            let p = b[j];
            j += 1;
            (p.x, p.height)
        } else if j >= b.len() {
            let p = a[i];
            i += 1;
            (p.x, p.height)
        } else if a[i].x < b[j].x {
            let p = a[i];
            last_left = p.height;
            i += 1;
            (p.x, p.height.max(last_right))
        } else if b[j].x < a[i].x {
            let p = b[j];
            last_right = p.height;
            j += 1;
            (p.x, last_left.max(p.height))
        } else {
            let (p, q) = (a[i], b[j]);
            last_left = p.height;
            last_right = q.height;
            i += 1;
            j += 1;
            (p.x, p.height.max(q.height))
        };

        if height != last_emitted {
            last_emitted = height;
            merged.push(Point::new(x, height));
        }
    }

    Skyline::from_points(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Building;

    fn single(left: i64, right: i64, height: i64) -> Skyline {
        Skyline::from_building(&Building::new(left, right, height))
    }

    #[test]
    fn test_disjoint_buildings_stay_separate() {
        let merged = merge(&single(1, 3, 5), &single(10, 12, 7));
        assert_eq!(merged.to_string(), "(1,5)(3,0)(10,7)(12,0)");
    }

    #[test]
    fn test_equal_span_takes_max_height() {
        let merged = merge(&single(1, 5, 3), &single(1, 5, 7));
        assert_eq!(merged.to_string(), "(1,7)(5,0)");
    }

    #[test]
    fn test_nested_building_is_hidden() {
        let merged = merge(&single(1, 10, 8), &single(3, 6, 4));
        assert_eq!(merged.to_string(), "(1,8)(10,0)");
    }

    #[test]
    fn test_overlap_steps_up_and_down() {
        let merged = merge(&single(2, 9, 10), &single(3, 7, 15));
        assert_eq!(merged.to_string(), "(2,10)(3,15)(7,10)(9,0)");
    }

    #[test]
    fn test_touching_buildings_of_equal_height_join() {
        let merged = merge(&single(1, 4, 6), &single(4, 8, 6));
        assert_eq!(merged.to_string(), "(1,6)(8,0)");
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let skyline = single(1, 5, 3);
        assert_eq!(merge(&skyline, &Skyline::default()), skyline);
        assert_eq!(merge(&Skyline::default(), &skyline), skyline);
    }

    #[test]
    fn test_zero_height_buildings_vanish() {
        let merged = merge(&single(1, 5, 0), &single(2, 6, 0));
        assert!(merged.is_empty());
        assert_eq!(merged.to_string(), "");
    }

    #[test]
    fn test_inputs_are_left_untouched() {
        let left = single(2, 9, 10);
        let right = single(5, 12, 12);
        let (left_before, right_before) = (left.clone(), right.clone());

        let _ = merge(&left, &right);

        assert_eq!(left, left_before);
        assert_eq!(right, right_before);
    }

    #[test]
    fn test_no_consecutive_equal_heights() {
        let merged = merge(
            &merge(&single(0, 4, 3), &single(2, 6, 3)),
            &merge(&single(5, 9, 3), &single(8, 12, 5)),
        );

        assert_eq!(merged.to_string(), "(0,3)(8,5)(12,0)");
        for pair in merged.points().windows(2) {
            assert_ne!(pair[0].height, pair[1].height);
            assert!(pair[0].x < pair[1].x);
        }
    }
}
