use crate::domain::model::Post;
use crate::domain::ports::PostSource;
use crate::utils::error::{Result, RosterError};
use reqwest::Client;
use std::time::Duration;

/// Fetches posts as JSON from `{endpoint}/{id}`.
#[derive(Debug, Clone)]
pub struct HttpPostSource {
    client: Client,
    endpoint: String,
}

impl HttpPostSource {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait::async_trait]
impl PostSource for HttpPostSource {
    async fn fetch(&self, id: u64) -> Result<Post> {
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), id);
        tracing::debug!("Fetching post from: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("Post response status: {}", response.status());

        if !response.status().is_success() {
            return Err(RosterError::SourceStatusError {
                status: response.status().as_u16(),
            });
        }

        let post = response.json::<Post>().await?;
        Ok(post)
    }
}
