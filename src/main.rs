//! linkedin-video-dl - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use linkedin_video_dl::{
    cli::Args,
    config::Config,
    download::download_post,
    error::{exit_codes, Error, Result},
    media::Extractor,
    output::Console,
    PostClient,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Set up logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::default();
    args.merge_into_config(&mut config);
    let console = Console::new(config.color);

    console.banner();

    let Some(post_url) = args.url.as_deref() else {
        console.usage();
        return ExitCode::from(exit_codes::FAILURE);
    };

    match run(&config, &console, post_url).await {
        Ok(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            console.success(&format!("Done! Saved as {}", name));
            ExitCode::from(exit_codes::SUCCESS)
        }
        Err(e) => {
            console.error(&e.report());
            if matches!(e, Error::NoVideosFound) {
                console.no_video_reasons();
            }
            ExitCode::from(exit_codes::FAILURE)
        }
    }
}

async fn run(config: &Config, console: &Console, post_url: &str) -> Result<PathBuf> {
    let client = PostClient::new(config)?;
    let extractor = Extractor::new()?;

    download_post(&client, &extractor, config, console, post_url).await
}
