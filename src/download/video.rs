//! Video file downloading.

use std::path::{Path, PathBuf};

use futures::{Stream, StreamExt};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use crate::api::PostClient;
use crate::config::Config;
use crate::download::progress::{ProgressSink, ProgressTracker};
use crate::error::{Error, Result};

/// Suffix of the in-progress file next to the target.
const TEMP_SUFFIX: &str = ".tmp";

/// Whether a `Content-Type` value is acceptable for a video download.
pub fn is_video_content_type(content_type: &str) -> bool {
    let content_type = content_type.to_ascii_lowercase();
    content_type.contains("video")
        || content_type.contains("octet-stream")
        || content_type.contains("mp4")
}

/// Path of the temporary sibling used while `target` is written.
pub fn temp_path(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_owned();
    name.push(TEMP_SUFFIX);
    PathBuf::from(name)
}

/// Download `url` to `target`. Refuses to overwrite an existing file.
///
/// Returns the number of bytes written.
pub async fn download_video<S: ProgressSink>(
    client: &PostClient,
    config: &Config,
    url: &str,
    target: &Path,
    sink: S,
) -> Result<u64> {
    if fs::try_exists(target).await? {
        return Err(Error::FileExists(target.to_path_buf()));
    }

    let response = client.download_file(url).await?;
    let total = response.content_length();
    tracing::debug!("Video size: {:?} bytes", total);

    let tracker = ProgressTracker::new(sink, total, config.progress_interval);
    write_atomically(response.bytes_stream(), target, tracker).await
}

/// Stream `chunks` into `<target>.tmp`, then rename it onto `target`.
///
/// On any error the temporary file is removed and `target` is left untouched.
pub async fn write_atomically<St, B, E, S>(
    chunks: St,
    target: &Path,
    tracker: ProgressTracker<S>,
) -> Result<u64>
where
    St: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<Error>,
    S: ProgressSink,
{
    let tmp = temp_path(target);

    let result = match copy_to_file(chunks, &tmp, tracker).await {
        Ok(written) => fs::rename(&tmp, target)
            .await
            .map(|()| written)
            .map_err(Error::from),
        Err(e) => Err(e),
    };

    match result {
        Ok(written) => {
            tracing::debug!("Wrote {} bytes to {}", written, target.display());
            Ok(written)
        }
        Err(e) => {
            if let Err(cleanup) = fs::remove_file(&tmp).await {
                tracing::debug!("Could not remove {}: {}", tmp.display(), cleanup);
            }
            Err(e)
        }
    }
}

async fn copy_to_file<St, B, E, S>(
    chunks: St,
    path: &Path,
    mut tracker: ProgressTracker<S>,
) -> Result<u64>
where
    St: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<Error>,
    S: ProgressSink,
{
    let mut file = File::create(path).await?;
    let mut chunks = std::pin::pin!(chunks);

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk.map_err(Into::<Error>::into)?;
        let bytes = chunk.as_ref();
        file.write_all(bytes).await?;
        tracker.advance(bytes.len() as u64);
    }

    file.flush().await?;
    file.sync_all().await?;

    Ok(tracker.finish().downloaded)
}
