//! Download progress tracking.

use std::time::{Duration, Instant};

/// Snapshot of a running transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Bytes written so far.
    pub downloaded: u64,
    /// Expected size, if the server sent one.
    pub total: Option<u64>,
}

impl Progress {
    /// Completion percentage, or `None` when the size is unknown.
    pub fn percent(&self) -> Option<f64> {
        match self.total {
            Some(total) if total > 0 => Some(self.downloaded as f64 / total as f64 * 100.0),
            _ => None,
        }
    }

    /// Whether the known total has been reached.
    pub fn is_complete(&self) -> bool {
        self.total == Some(self.downloaded)
    }
}

/// Receives progress events during a download.
pub trait ProgressSink {
    /// Called with the running byte count, already throttled.
    fn update(&mut self, progress: Progress);

    /// Called once after the last byte has been written.
    fn finish(&mut self, _progress: Progress) {}
}

impl<S: ProgressSink + ?Sized> ProgressSink for &mut S {
    fn update(&mut self, progress: Progress) {
        (**self).update(progress);
    }

    fn finish(&mut self, progress: Progress) {
        (**self).finish(progress);
    }
}

impl<S: ProgressSink + ?Sized> ProgressSink for Box<S> {
    fn update(&mut self, progress: Progress) {
        (**self).update(progress);
    }

    fn finish(&mut self, progress: Progress) {
        (**self).finish(progress);
    }
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn update(&mut self, _progress: Progress) {}
}

/// Accumulates written bytes and forwards them to a sink at most once per
/// interval, plus whenever the known total is reached.
#[derive(Debug)]
pub struct ProgressTracker<S> {
    sink: S,
    interval: Duration,
    last_update: Option<Instant>,
    progress: Progress,
}

impl<S: ProgressSink> ProgressTracker<S> {
    pub fn new(sink: S, total: Option<u64>, interval: Duration) -> Self {
        Self {
            sink,
            interval,
            last_update: None,
            progress: Progress {
                downloaded: 0,
                total,
            },
        }
    }

    /// Record `bytes` more written.
    pub fn advance(&mut self, bytes: u64) {
        self.progress.downloaded += bytes;

        let due = self
            .last_update
            .map_or(true, |last| last.elapsed() >= self.interval);

        if due || self.progress.is_complete() {
            self.last_update = Some(Instant::now());
            self.sink.update(self.progress);
        }
    }

    /// Current snapshot.
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Signal a complete copy and return the final snapshot.
    pub fn finish(mut self) -> Progress {
        self.sink.finish(self.progress);
        self.progress
    }
}
