use crate::core::deferred::Deferred;
use crate::domain::model::Post;
use crate::domain::ports::PostSource;
use crate::utils::error::Result;
use std::time::Duration;

/// A timer-backed source that settles a canned outcome after a delay.
/// Used for offline runs and tests.
#[derive(Debug, Clone)]
pub struct StubPostSource {
    delay: Duration,
    rejection: Option<String>,
}

impl StubPostSource {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            rejection: None,
        }
    }

    /// A source that settles immediately.
    pub fn quick() -> Self {
        Self::new(Duration::from_millis(0))
    }

    /// A source that rejects every fetch with `reason`.
    pub fn failing(delay: Duration, reason: impl Into<String>) -> Self {
        Self {
            delay,
            rejection: Some(reason.into()),
        }
    }
}

#[async_trait::async_trait]
impl PostSource for StubPostSource {
    async fn fetch(&self, id: u64) -> Result<Post> {
        let (resolver, deferred) = Deferred::pair();
        let delay = self.delay;
        let rejection = self.rejection.clone();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match rejection {
                Some(reason) => resolver.reject(reason),
                None => resolver.resolve(Post {
                    id,
                    title: "sample post title".to_string(),
                    content: "sample post content".to_string(),
                }),
            }
        });

        deferred.await
    }
}
