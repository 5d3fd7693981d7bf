use crate::types::FetchConfig;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    HttpStatus(u16),
    #[error("cannot read {path}: {source}")]
    File {
        path: String,
        source: std::io::Error,
    },
    #[error("unsupported feed locator scheme: {0}")]
    UnsupportedScheme(String),
}

/// Retrieves the raw bytes behind a feed locator. Holds a single reusable
/// HTTP client for the lifetime of the process; feeds may also live on the
/// local filesystem, addressed by a `file` URL or a bare path.
pub struct FeedFetcher {
    client: Client,
}

impl FeedFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self { client })
    }

    pub async fn fetch(&self, locator: &str) -> Result<Vec<u8>, FetchError> {
        match Url::parse(locator) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => self.fetch_http(url).await,
            Ok(url) if url.scheme() == "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|_| FetchError::UnsupportedScheme("file".to_string()))?;
                Self::read_file(&path).await
            }
            Ok(url) => Err(FetchError::UnsupportedScheme(url.scheme().to_string())),
            // Not a URL at all: treat the locator as a filesystem path.
            Err(_) => Self::read_file(Path::new(locator)).await,
        }
    }

    async fn fetch_http(&self, url: Url) -> Result<Vec<u8>, FetchError> {
        debug!("fetching feed over HTTP: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn read_file(path: &Path) -> Result<Vec<u8>, FetchError> {
        debug!("reading feed from file: {}", path.display());

        tokio::fs::read(path).await.map_err(|source| FetchError::File {
            path: path.display().to_string(),
            source,
        })
    }
}
