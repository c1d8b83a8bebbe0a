//! Pure formatting helpers. Color is always an explicit argument.

use console::Style;
use indicatif::HumanBytes;

use crate::download::progress::Progress;

/// Width of the progress bar between the brackets.
pub const BAR_WIDTH: usize = 30;

/// Apply `style` to `text` only when `color` is set.
pub fn paint(text: &str, style: Style, color: bool) -> String {
    style.force_styling(color).apply_to(text).to_string()
}

/// Application banner.
pub fn banner(color: bool) -> String {
    format!(
        "\n{}\n{}\n",
        paint("  LinkedIn Video Downloader", Style::new().cyan().bold(), color),
        paint("  =========================", Style::new().dim(), color)
    )
}

/// Usage text shown when no URL is given.
pub fn usage(color: bool) -> String {
    format!(
        "  {} linkedin-video-dl {}\n  {} linkedin-video-dl {}\n",
        paint("Usage:", Style::new().bold(), color),
        paint("<post-url>", Style::new().yellow(), color),
        paint("Example:", Style::new().bold(), color),
        paint(
            "\"https://www.linkedin.com/posts/user_slug-activity-123\"",
            Style::new().dim(),
            color
        )
    )
}

/// A numbered pipeline step, e.g. `[1/3] Fetching post page...`.
pub fn step(current: usize, total: usize, message: &str, color: bool) -> String {
    format!(
        "  {} {}",
        paint(&format!("[{}/{}]", current, total), Style::new().blue(), color),
        message
    )
}

/// Secondary information line.
pub fn info(message: &str, color: bool) -> String {
    format!("  {}", paint(message, Style::new().dim(), color))
}

/// Final success line.
pub fn success(message: &str, color: bool) -> String {
    format!(
        "\n  {}\n",
        paint(message, Style::new().green().bold(), color)
    )
}

/// Error line.
pub fn error(message: &str, color: bool) -> String {
    format!(
        "\n  {}\n",
        paint(&format!("Error: {}", message), Style::new().red().bold(), color)
    )
}

/// Bulleted list under a yellow heading.
pub fn bullet_list(heading: &str, items: &[&str], color: bool) -> String {
    let mut out = format!("  {}\n", paint(heading, Style::new().yellow(), color));
    for item in items {
        out.push_str(&format!(
            "  {}\n",
            paint(&format!("- {}", item), Style::new().dim(), color)
        ));
    }
    out
}

/// Highlighted filename.
pub fn filename(name: &str, color: bool) -> String {
    paint(name, Style::new().yellow(), color)
}

/// Text progress bar such as `[=======>      ]`.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0 * width as f64) as usize).min(width);
    let empty = width - filled;
    format!(
        "[{}>{}]",
        "=".repeat(filled),
        " ".repeat(empty.saturating_sub(1))
    )
}

/// One progress line: bar, percentage and byte counts, or just the byte
/// count when the total size is unknown.
pub fn progress_line(progress: &Progress, color: bool) -> String {
    match (progress.percent(), progress.total) {
        (Some(percent), Some(total)) => format!(
            "  {} {}  {}",
            paint(&progress_bar(percent, BAR_WIDTH), Style::new().green(), color),
            paint(&format!("{:.1}%", percent), Style::new().bold(), color),
            paint(
                &format!("{} / {}", HumanBytes(progress.downloaded), HumanBytes(total)),
                Style::new().dim(),
                color
            )
        ),
        _ => format!(
            "  {}",
            paint(
                &format!("Downloaded: {}", HumanBytes(progress.downloaded)),
                Style::new().dim(),
                color
            )
        ),
    }
}
