//! Display sinks.

/// Receives every value the calculator renders, including `"Error"`.
pub trait DisplaySink {
    fn show(&mut self, value: &str);
}

impl<F> DisplaySink for F
where
    F: FnMut(&str),
{
    fn show(&mut self, value: &str) {
        self(value)
    }
}

/// Sink that keeps every rendered frame, for tests and headless hosts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingDisplay {
    frames: Vec<String>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered value.
    pub fn current(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }
}

impl DisplaySink for RecordingDisplay {
    fn show(&mut self, value: &str) {
        self.frames.push(value.to_string());
    }
}
