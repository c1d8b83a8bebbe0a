//! HTTP client for post pages and video files.

use reqwest::{header, redirect, Client, Response, StatusCode};

use crate::config::Config;
use crate::download::video::is_video_content_type;
use crate::error::{Error, Result};

/// Accept header of a desktop browser navigation.
const PAGE_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

const PAGE_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// Maximum redirect hops followed for a single request.
const MAX_REDIRECTS: usize = 10;

/// Client with browser-like headers shared by the page and video requests.
pub struct PostClient {
    client: Client,
    referer: String,
    page_timeout: std::time::Duration,
    download_timeout: std::time::Duration,
}

impl PostClient {
    /// Create a new client from the runtime settings.
    ///
    /// The user agent is a client default, so it is sent again on every
    /// redirect hop.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            referer: config.referer.clone(),
            page_timeout: config.page_timeout,
            download_timeout: config.download_timeout,
        })
    }

    /// Fetch the HTML of a post page.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, PAGE_ACCEPT)
            .header(header::ACCEPT_LANGUAGE, PAGE_ACCEPT_LANGUAGE)
            .header(header::CONNECTION, "keep-alive")
            .timeout(self.page_timeout)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {} (final URL {})", status, response.url());

        if status != StatusCode::OK {
            return Err(Error::PageStatus(status.as_u16()));
        }

        let html = response.text().await?;
        tracing::debug!("Page length: {} bytes", html.len());

        Ok(html)
    }

    /// Start downloading a video file.
    ///
    /// Fails unless the server answers 200 with a video-like or missing
    /// content type. The returned response has not been read yet.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(header::REFERER, &self.referer)
            .timeout(self.download_timeout)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status != StatusCode::OK {
            return Err(Error::DownloadStatus(status.as_u16()));
        }

        if let Some(content_type) = response.headers().get(header::CONTENT_TYPE) {
            let content_type = String::from_utf8_lossy(content_type.as_bytes());
            if !is_video_content_type(&content_type) {
                return Err(Error::UnexpectedContentType(content_type.into_owned()));
            }
        }

        Ok(response)
    }
}
