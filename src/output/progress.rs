//! Progress display on the terminal.

use std::io::Write;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};

use crate::download::progress::{Progress, ProgressSink};
use crate::output::format::progress_line;

/// Create a spinner for the page request.
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}

/// Redraws a single progress line on stderr.
pub struct TerminalProgress {
    term: Term,
    color: bool,
}

impl TerminalProgress {
    pub fn new(color: bool) -> Self {
        Self {
            term: Term::stderr(),
            color,
        }
    }
}

impl ProgressSink for TerminalProgress {
    fn update(&mut self, progress: Progress) {
        // A broken stderr must not abort the download.
        let _ = write!(self.term, "\r{}", progress_line(&progress, self.color));
        let _ = self.term.flush();
    }

    fn finish(&mut self, progress: Progress) {
        self.update(progress);
        let _ = writeln!(self.term);
    }
}
