use crate::domain::ports::TextSource;
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::Client;
use std::time::Duration;

/// Upper bound for a single template request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const MAX_REDIRECTS: usize = 10;

/// Fetches template text with a single GET per URL, following redirects.
#[derive(Debug, Clone)]
pub struct HttpTextSource {
    client: Client,
}

impl HttpTextSource {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> reqwest::Result<String> {
        let response = self.client.get(url).send().await?;
        tracing::debug!("Response status for '{}': {}", url, response.status());
        response.error_for_status()?.text().await
    }
}

#[async_trait]
impl TextSource for HttpTextSource {
    async fn fetch_text(&self, url: &str) -> Option<String> {
        tracing::info!("Reading text from URL: '{}' ...", url);

        if let Err(e) = validate_url("url", url) {
            tracing::error!("...ERROR! {}", e);
            return None;
        }

        match self.get(url).await {
            Ok(text) => {
                tracing::info!("...DONE! ({} bytes)", text.len());
                Some(text)
            }
            Err(e) => {
                tracing::error!("...ERROR! Details: '{}'", e);
                None
            }
        }
    }
}

/// One-off fetch with the default timeout.
pub async fn read_url_as_text(url: &str) -> Option<String> {
    match HttpTextSource::new(REQUEST_TIMEOUT) {
        Ok(source) => source.fetch_text(url).await,
        Err(e) => {
            tracing::error!("Failed to create HTTP client: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_text_success() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/Python.gitignore");
            then.status(200).body("__pycache__/\n*.pyc\n");
        });

        let source = HttpTextSource::new(REQUEST_TIMEOUT).unwrap();
        let text = source.fetch_text(&server.url("/Python.gitignore")).await;

        mock.assert();
        assert_eq!(text.as_deref(), Some("__pycache__/\n*.pyc\n"));
    }

    #[tokio::test]
    async fn test_fetch_text_follows_redirects() {
        let server = MockServer::start();
        let target = server.mock(|when, then| {
            when.method(GET).path("/raw/Linux.gitignore");
            then.status(200).body("*~\n");
        });
        let redirect = server.mock(|when, then| {
            when.method(GET).path("/Linux.gitignore");
            then.status(302)
                .header("Location", server.url("/raw/Linux.gitignore"));
        });

        let text = read_url_as_text(&server.url("/Linux.gitignore")).await;

        redirect.assert();
        target.assert();
        assert_eq!(text.as_deref(), Some("*~\n"));
    }

    #[tokio::test]
    async fn test_fetch_text_error_status() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404).body("Not Found");
        });

        let source = HttpTextSource::new(REQUEST_TIMEOUT).unwrap();
        assert!(source.fetch_text(&server.url("/missing")).await.is_none());
        mock.assert();
    }

    #[tokio::test]
    async fn test_fetch_text_timeout() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200)
                .body("late")
                .delay(Duration::from_millis(500));
        });

        let source = HttpTextSource::new(Duration::from_millis(50)).unwrap();
        assert!(source.fetch_text(&server.url("/slow")).await.is_none());
    }

    #[test]
    fn test_fetch_text_invalid_url() {
        let source = HttpTextSource::new(REQUEST_TIMEOUT).unwrap();
        assert!(tokio_test::block_on(source.fetch_text("not a url")).is_none());
        assert!(tokio_test::block_on(source.fetch_text("file:///etc/passwd")).is_none());
    }
}
