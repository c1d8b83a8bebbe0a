mod common;

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use common::{start, Route};

fn run(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_linkedin-video-dl"))
        .args(args)
        .arg("--output-dir")
        .arg(dir)
        .args(["--no-color", "--quiet"])
        .env_remove("RUST_LOG")
        .output()
        .expect("run binary")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_downloads_single_video() {
    let video: Vec<u8> = (0..200_000u32).map(|i| (i % 256) as u8).collect();
    let server = start(vec![Route::ok("/media/clip.mp4", "video/mp4", video.clone())]);
    let page = format!(
        r#"<html><script type="application/ld+json">{{"@type":"VideoObject","contentUrl":"{}"}}</script></html>"#,
        server.url("/media/clip.mp4")
    );
    let server_page = start(vec![Route::html("/posts/jane-doe_demo-activity-1", &page)]);
    let dir = tempfile::tempdir().unwrap();

    // The `trk` parameter carries the domain marker the URL check requires.
    let post_url = server_page.url("/posts/jane-doe_demo-activity-1?trk=linkedin.com");
    let output = run(&[post_url.as_str()], dir.path());

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let saved = dir.path().join("jane-doe_demo-activity-1.mp4");
    assert_eq!(fs::metadata(&saved).unwrap().len(), video.len() as u64);
    assert_eq!(fs::read(&saved).unwrap(), video);
    assert!(!dir.path().join("jane-doe_demo-activity-1.mp4.tmp").exists());
    assert!(stderr(&output).contains("Done! Saved as jane-doe_demo-activity-1.mp4"));
}

#[test]
fn test_missing_url_exits_with_usage() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&[], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Usage:"));
}

#[test]
fn test_foreign_url_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&["https://example.com/posts/abc"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("does not appear to be from LinkedIn"));
}

#[test]
fn test_page_without_video() {
    let server = start(vec![Route::html(
        "/posts/no-video",
        "<html><body>Just text</body></html>",
    )]);
    let dir = tempfile::tempdir().unwrap();

    let output = run(
        &[server.url("/posts/no-video?trk=linkedin.com").as_str()],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("No videos found"));
    assert!(err.contains("Possible reasons:"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_page_fetch_failure() {
    let server = start(vec![]);
    let dir = tempfile::tempdir().unwrap();

    let output = run(
        &[server.url("/posts/missing?trk=linkedin.com").as_str()],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("HTTP 404"));
}

#[test]
fn test_existing_file_is_kept() {
    let server = start(vec![Route::ok("/media/clip.mp4", "video/mp4", vec![1u8; 10])]);
    let page = format!(
        r#"{{"contentUrl": "{}"}}"#,
        server.url("/media/clip.mp4")
    );
    let server_page = start(vec![Route::html("/posts/kept", &page)]);
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("kept.mp4");
    fs::write(&existing, b"keep me").unwrap();

    let output = run(
        &[server_page.url("/posts/kept?trk=linkedin.com").as_str()],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(fs::read(&existing).unwrap(), b"keep me");
}
