use std::sync::Arc;

use write_model::{aggregate::Webinar, value_object::WebinarId};

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] Box<dyn std::error::Error + Send + Sync>);

impl Error {
    pub fn new<E>(e: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self(e.into())
    }
}

/// Persistent storage of webinars.
///
/// `update` overwrites the whole record stored under the webinar id. There is
/// no concurrency token: the last writer wins.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait WebinarRepository {
    async fn create(&self, webinar: &Webinar) -> Result<(), Error>;
    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, Error>;
    async fn update(&self, webinar: &Webinar) -> Result<(), Error>;
}

pub trait HasWebinarRepository {
    fn webinar_repository(&self) -> Arc<dyn WebinarRepository + Send + Sync>;
}
