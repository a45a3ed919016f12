//! Loading host pages from a URL, a file or stdin

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tokio::io::AsyncReadExt;
use tracing::{debug, info, warn};

/// Maximum page size (5 MB)
const MAX_BODY_SIZE: usize = 5 * 1024 * 1024;

const USER_AGENT: &str = concat!("critical-thinker/", env!("CARGO_PKG_VERSION"));

/// Errors from loading a page
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("HTTP error {status} fetching {url}")]
    Http { url: String, status: u16 },

    #[error("Page too large: {bytes} bytes (max: {max} bytes)")]
    TooLarge { bytes: u64, max: usize },
}

/// Where a page comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Url(String),
    Stdin,
    File(PathBuf),
}

impl DocumentSource {
    /// `http(s)://...` is a URL, `-` is stdin, anything else a file path.
    pub fn parse(source: &str) -> Self {
        let lower = source.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DocumentSource::Url(source.to_string())
        } else if source == "-" {
            DocumentSource::Stdin
        } else {
            DocumentSource::File(PathBuf::from(source))
        }
    }

    pub fn label(&self) -> String {
        match self {
            DocumentSource::Url(url) => url.clone(),
            DocumentSource::Stdin => "<stdin>".to_string(),
            DocumentSource::File(path) => path.display().to_string(),
        }
    }
}

/// A page's raw HTML and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub source: DocumentSource,
    pub html: String,
}

/// True if `url`'s host is one of `hosts` or a subdomain of one.
pub fn host_allowed(url: &str, hosts: &[String]) -> bool {
    let Some(host) = reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_ascii_lowercase))
    else {
        return false;
    };
    hosts.iter().any(|allowed| {
        let allowed = allowed.to_ascii_lowercase();
        host == allowed || host.ends_with(&format!(".{}", allowed))
    })
}

/// Reads pages for the question service.
pub struct DocumentLoader {
    client: reqwest::Client,
    allowed_hosts: Vec<String>,
    max_bytes: usize,
}

impl DocumentLoader {
    pub fn new(allowed_hosts: Vec<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            allowed_hosts,
            max_bytes: MAX_BODY_SIZE,
        }
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub async fn load(&self, source: DocumentSource) -> Result<LoadedDocument, DocumentError> {
        let html = match &source {
            DocumentSource::Url(url) => self.fetch(url).await?,
            DocumentSource::Stdin => {
                let mut html = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut html)
                    .await
                    .map_err(|e| DocumentError::Io {
                        path: source.label(),
                        source: e,
                    })?;
                html
            }
            DocumentSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| DocumentError::Io {
                        path: path.display().to_string(),
                        source: e,
                    })?
            }
        };
        debug!("Loaded {} bytes from {}", html.len(), source.label());
        Ok(LoadedDocument { source, html })
    }

    async fn fetch(&self, url: &str) -> Result<String, DocumentError> {
        if !host_allowed(url, &self.allowed_hosts) {
            warn!(
                "{} is not on an allowed host ({}); questions may be poor",
                url,
                self.allowed_hosts.join(", ")
            );
        }
        info!("Fetching {}", url);

        let fetch_error = |e: reqwest::Error| DocumentError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DocumentError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if let Some(length) = response.content_length()
            && length > self.max_bytes as u64
        {
            return Err(DocumentError::TooLarge {
                bytes: length,
                max: self.max_bytes,
            });
        }

        let body = response.bytes().await.map_err(fetch_error)?;
        if body.len() > self.max_bytes {
            return Err(DocumentError::TooLarge {
                bytes: body.len() as u64,
                max: self.max_bytes,
            });
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn hosts() -> Vec<String> {
        vec!["medium.com".to_string()]
    }

    #[test]
    fn test_source_parse() {
        assert_eq!(
            DocumentSource::parse("https://medium.com/a"),
            DocumentSource::Url("https://medium.com/a".into())
        );
        assert_eq!(DocumentSource::parse("-"), DocumentSource::Stdin);
        assert_eq!(
            DocumentSource::parse("page.html"),
            DocumentSource::File(PathBuf::from("page.html"))
        );
    }

    #[test]
    fn test_host_allowed() {
        assert!(host_allowed("https://medium.com/@a/post", &hosts()));
        assert!(host_allowed("https://blog.Medium.com/post", &hosts()));
        assert!(!host_allowed("https://notmedium.com/post", &hosts()));
        assert!(!host_allowed("https://example.com/?q=medium.com", &hosts()));
        assert!(!host_allowed("not a url", &hosts()));
    }

    #[tokio::test]
    async fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"<p>hello</p>").unwrap();

        let loaded = DocumentLoader::new(hosts())
            .load(DocumentSource::File(file.path().to_path_buf()))
            .await
            .unwrap();

        assert_eq!(loaded.html, "<p>hello</p>");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = DocumentLoader::new(hosts())
            .load(DocumentSource::File(PathBuf::from("/nonexistent/page.html")))
            .await;
        assert!(matches!(result, Err(DocumentError::Io { .. })));
    }

    #[tokio::test]
    async fn test_fetch_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/post"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<article>Hi</article>"))
            .mount(&server)
            .await;

        let url = format!("{}/post", server.uri());
        let loaded = DocumentLoader::new(hosts())
            .load(DocumentSource::parse(&url))
            .await
            .unwrap();

        assert_eq!(loaded.html, "<article>Hi</article>");
        assert_eq!(loaded.source.label(), url);
    }

    #[tokio::test]
    async fn test_fetch_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = DocumentLoader::new(hosts())
            .load(DocumentSource::Url(format!("{}/gone", server.uri())))
            .await;

        assert!(matches!(result, Err(DocumentError::Http { status: 404, .. })));
    }

    #[tokio::test]
    async fn test_fetch_too_large() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("x".repeat(64)))
            .mount(&server)
            .await;

        let result = DocumentLoader::new(hosts())
            .with_max_bytes(16)
            .load(DocumentSource::Url(server.uri()))
            .await;

        assert!(matches!(result, Err(DocumentError::TooLarge { max: 16, .. })));
    }
}
