use std::sync::Arc;

use write_model::value_object::{DateTime, Seats, UserId, WebinarId};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WebinarQueryData {
    pub end_date: DateTime,
    pub id: WebinarId,
    pub organizer_id: UserId,
    pub seats: Seats,
    pub start_date: DateTime,
    pub title: String,
}

#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait WebinarReader {
    async fn get(
        &self,
        id: &WebinarId,
    ) -> Result<Option<WebinarQueryData>, Box<dyn std::error::Error + Send + Sync>>;
}

pub trait HasWebinarReader {
    fn webinar_reader(&self) -> Arc<dyn WebinarReader + Send + Sync>;
}
