//! Best-candidate selection.

use std::cmp::Reverse;

/// Extension marking a direct video file.
pub const VIDEO_EXTENSION: &str = ".mp4";

/// Pick the URL most likely to be the full video.
///
/// URLs containing `.mp4` win over ones that don't; among equals the longest
/// wins, since longer URLs usually carry the quality parameters. Ties keep
/// the earliest URL. Returns `None` for an empty slice.
pub fn pick_best_video<S: AsRef<str>>(urls: &[S]) -> Option<&str> {
    urls.iter()
        .map(<S as AsRef<str>>::as_ref)
        .enumerate()
        .max_by_key(|(index, url)| (url.contains(VIDEO_EXTENSION), url.len(), Reverse(*index)))
        .map(|(_, url)| url)
}
