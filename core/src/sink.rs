//! Output sink boundary — receives the human-readable status lines.

/// Where status lines go. The simulator writes exactly one line per
/// purchase-decision step and nothing else.
pub trait OutputSink {
    fn write_line(&mut self, line: &str);
}

/// Prints each line to stdout.
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Collects lines in memory. Test double.
#[derive(Default)]
pub struct MemorySink {
    pub lines: Vec<String>,
}

impl OutputSink for MemorySink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
