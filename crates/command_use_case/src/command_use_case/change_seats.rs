use std::{str::FromStr as _, sync::Arc};

use write_model::{aggregate::User, value_object::WebinarId};

#[cfg(any(test, feature = "test-util"))]
use crate::command_use_case::port::WebinarRepository;
use crate::port::HasWebinarRepository;

#[derive(Debug)]
pub struct Input {
    pub seats: u32,
    pub user: User,
    pub webinar_id: String,
}

#[derive(Debug)]
pub struct Output;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("You cannot reduce the number of seats")]
    SeatsDecreased,
    #[error("Webinar must have at most 1000 seats")]
    SeatsOverLimit,
    #[error("webinar find")]
    WebinarFind(#[source] crate::command_use_case::port::webinar_repository::Error),
    #[error("Webinar not found")]
    WebinarNotFound(String),
    #[error("User is not allowed to update this webinar")]
    WebinarNotOrganizer,
    #[error("webinar update")]
    WebinarUpdate(#[source] crate::command_use_case::port::webinar_repository::Error),
}

impl From<write_model::aggregate::webinar::ChangeSeatsError> for Error {
    fn from(e: write_model::aggregate::webinar::ChangeSeatsError) -> Self {
        use write_model::aggregate::webinar::ChangeSeatsError as E;
        match e {
            E::NotOrganizer => Self::WebinarNotOrganizer,
            E::SeatsDecreased => Self::SeatsDecreased,
            E::SeatsOverLimit => Self::SeatsOverLimit,
        }
    }
}

#[async_trait::async_trait]
pub trait ChangeSeats: HasWebinarRepository {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, input: Input) -> Result<Output, Error> {
        let webinar_repository = self.webinar_repository();
        let webinar_id = WebinarId::from_str(&input.webinar_id)
            .map_err(|_| Error::WebinarNotFound(input.webinar_id.clone()))?;
        let webinar = webinar_repository
            .find_by_id(&webinar_id)
            .await
            .map_err(Error::WebinarFind)?
            .ok_or_else(|| Error::WebinarNotFound(input.webinar_id.clone()))?;
        let changed = webinar.change_seats(input.user.id(), input.seats)?;
        webinar_repository
            .update(&changed)
            .await
            .map_err(Error::WebinarUpdate)?;
        Ok(Output)
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub ChangeSeats {}

    impl HasWebinarRepository for ChangeSeats {
        fn webinar_repository(&self) -> Arc<dyn WebinarRepository + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl ChangeSeats for ChangeSeats {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasChangeSeats {
    fn change_seats(&self) -> Arc<dyn ChangeSeats + Send + Sync>;
}
