use crate::error::{Error, Result};
use crate::post::Post;
use std::future::Future;
use std::time::Duration;

/// Something that can produce the full set of posts in display order.
pub trait PostSource {
    fn fetch_posts(&self) -> impl Future<Output = Result<Vec<Post>>> + Send;
}

/// Fetches posts with a single `GET` against a JSON endpoint.
#[derive(Clone, Debug)]
pub struct HttpPostSource {
    client: reqwest::Client,
    url: String,
}

impl HttpPostSource {
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(Error::Fetch)?;
        let url = url.to_owned();
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}

impl PostSource for HttpPostSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        log::debug!("GET {}", self.url);

        let response = self
            .client
            .get(self.url.as_str())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(Error::Fetch)?;

        response.json::<Vec<Post>>().await.map_err(Error::Fetch)
    }
}
