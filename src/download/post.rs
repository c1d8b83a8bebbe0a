//! Post download pipeline: fetch, extract, pick, download.

use std::path::PathBuf;

use crate::api::PostClient;
use crate::config::{validate_post_url, Config};
use crate::download::progress::{NoProgress, ProgressSink};
use crate::download::video::download_video;
use crate::error::{Error, Result};
use crate::fs::build_filename;
use crate::media::{pick_best_video, Extractor};
use crate::output::{create_spinner, Console, TerminalProgress};

/// Number of steps shown to the user.
const STEPS: usize = 3;

/// Characters of the chosen URL echoed back to the user.
const URL_PREVIEW_CHARS: usize = 60;

/// Download the video of a single post into the configured directory.
///
/// Returns the path of the written file.
pub async fn download_post(
    client: &PostClient,
    extractor: &Extractor,
    config: &Config,
    console: &Console,
    post_url: &str,
) -> Result<PathBuf> {
    let post_url = post_url.trim();
    validate_post_url(post_url, &config.expected_domain)?;

    console.step(1, STEPS, "Fetching post page...");
    let html = if config.show_progress {
        let spinner = create_spinner("waiting for LinkedIn");
        let html = client.fetch_page(post_url).await;
        spinner.finish_and_clear();
        html?
    } else {
        client.fetch_page(post_url).await?
    };

    console.step(2, STEPS, "Searching for video URLs...");
    let urls = extractor.extract(&html);
    tracing::info!("Found {} candidate video URL(s)", urls.len());

    let video_url = pick_best_video(&urls).ok_or(Error::NoVideosFound)?;
    let preview: String = video_url.chars().take(URL_PREVIEW_CHARS).collect();
    console.info(&format!("Found: {}...", preview));

    let filename = build_filename(post_url);
    let target = config.output_path(&filename);
    console.step(
        3,
        STEPS,
        &format!("Downloading to {}", console.filename(&filename)),
    );

    let sink: Box<dyn ProgressSink> = if config.show_progress {
        Box::new(TerminalProgress::new(console.color()))
    } else {
        Box::new(NoProgress)
    };
    let written = download_video(client, config, video_url, &target, sink).await?;
    tracing::info!("Downloaded {} bytes to {}", written, target.display());

    Ok(target)
}
