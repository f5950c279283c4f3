//! codec/diagnostics.rs
//! Injected write-line sink for verbose and warning lines.
//!
//! The core never prints. Lines go to the caller's sink when one is injected
//! and always to the `log` facade under the `ccc` target.

use std::fmt;
use std::sync::Arc;

use crate::constants::LOG_TARGET;

/// Write-line callback supplied by the host.
pub type LineSink = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Clone, Default)]
pub struct Diagnostics {
    verbose: bool,
    sink: Option<LineSink>,
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("verbose", &self.verbose)
            .field("sink", &self.sink.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Diagnostics {
    pub fn new(verbose: bool, sink: Option<LineSink>) -> Self {
        Self { verbose, sink }
    }

    /// No sink, verbose off. Warnings still reach `log`.
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Verbose-only progress line.
    pub fn debug(&self, msg: impl AsRef<str>) {
        if !self.verbose {
            return;
        }
        let msg = msg.as_ref();
        log::debug!(target: LOG_TARGET, "{}", msg);
        if let Some(sink) = &self.sink {
            sink(&format!("[ccc] {}", msg));
        }
    }

    /// Always emitted, whatever `verbose` says.
    pub fn warn(&self, msg: impl AsRef<str>) {
        let msg = msg.as_ref();
        log::warn!(target: LOG_TARGET, "{}", msg);
        if let Some(sink) = &self.sink {
            sink(&format!("[ccc warning] {}", msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn capture() -> (Arc<Mutex<Vec<String>>>, LineSink) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = Arc::clone(&lines);
        let sink: LineSink = Arc::new(move |line: &str| {
            sink_lines.lock().unwrap().push(line.to_string());
        });
        (lines, sink)
    }

    #[test]
    fn debug_lines_need_verbose() {
        let (lines, sink) = capture();
        let quiet = Diagnostics::new(false, Some(sink.clone()));
        quiet.debug("hidden");
        assert!(lines.lock().unwrap().is_empty());

        let loud = Diagnostics::new(true, Some(sink));
        loud.debug("shown");
        assert_eq!(lines.lock().unwrap().as_slice(), ["[ccc] shown"]);
    }

    #[test]
    fn warnings_ignore_verbose() {
        let (lines, sink) = capture();
        Diagnostics::new(false, Some(sink)).warn("hash mismatch");
        assert_eq!(lines.lock().unwrap().as_slice(), ["[ccc warning] hash mismatch"]);
    }
}
