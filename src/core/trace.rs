use crate::domain::ports::TraceSink;

/// Header opening every recursion trace block.
pub const TRACE_HEADER: &str = "Recursive call made.\nParameters: ";

/// Discards everything; used when tracing is off.
#[derive(Debug, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn append(&mut self, _text: &str) {}

    fn enabled(&self) -> bool {
        false
    }
}

/// Keeps blocks in memory so they can be prepended to an output file.
#[derive(Debug, Default)]
pub struct BufferedTrace {
    blocks: Vec<String>,
}

impl BufferedTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<String> {
        self.blocks
    }
}

impl TraceSink for BufferedTrace {
    fn append(&mut self, text: &str) {
        self.blocks.push(text.to_string());
    }
}

/// Prints blocks immediately, ahead of a skyline bound for standard output.
#[derive(Debug, Default)]
pub struct StdoutTrace;

impl TraceSink for StdoutTrace {
    fn append(&mut self, text: &str) {
        print!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffered_trace_keeps_order() {
        let mut sink = BufferedTrace::new();
        sink.append("first\n");
        sink.append("second\n");
        assert_eq!(sink.blocks(), ["first\n", "second\n"]);
        assert!(sink.enabled());
    }

    #[test]
    fn test_no_trace_is_disabled() {
        assert!(!NoTrace.enabled());
    }
}
