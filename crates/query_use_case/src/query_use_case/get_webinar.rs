use std::{str::FromStr as _, sync::Arc};

use write_model::value_object::WebinarId;

#[cfg(any(test, feature = "test-util"))]
use crate::port::WebinarReader;
use crate::port::{HasWebinarReader, WebinarQueryData};

#[derive(Debug)]
pub struct Input {
    pub webinar_id: String,
}

#[derive(Debug, Eq, PartialEq)]
pub struct Output {
    pub end_date: String,
    pub id: String,
    pub organizer_id: String,
    pub seats: u32,
    pub start_date: String,
    pub title: String,
}

impl From<WebinarQueryData> for Output {
    fn from(
        WebinarQueryData {
            end_date,
            id,
            organizer_id,
            seats,
            start_date,
            title,
        }: WebinarQueryData,
    ) -> Self {
        Self {
            end_date: end_date.to_string(),
            id: id.to_string(),
            organizer_id: organizer_id.to_string(),
            seats: u32::from(seats),
            start_date: start_date.to_string(),
            title,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("webinar get")]
    WebinarGet(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Webinar not found")]
    WebinarNotFound(String),
}

#[async_trait::async_trait]
pub trait GetWebinar: HasWebinarReader {
    #[tracing::instrument(level = tracing::Level::DEBUG, err(Debug), skip(self))]
    async fn execute(&self, input: Input) -> Result<Output, Error> {
        let webinar_id = WebinarId::from_str(&input.webinar_id)
            .map_err(|_| Error::WebinarNotFound(input.webinar_id.clone()))?;
        self.webinar_reader()
            .get(&webinar_id)
            .await
            .map_err(Error::WebinarGet)?
            .map(Output::from)
            .ok_or(Error::WebinarNotFound(input.webinar_id))
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub GetWebinar {}

    impl HasWebinarReader for GetWebinar {
        fn webinar_reader(&self) -> Arc<dyn WebinarReader + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl GetWebinar for GetWebinar {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasGetWebinar {
    fn get_webinar(&self) -> Arc<dyn GetWebinar + Send + Sync>;
}
