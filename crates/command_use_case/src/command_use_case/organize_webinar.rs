use std::{str::FromStr as _, sync::Arc};

use write_model::{
    aggregate::{User, Webinar},
    value_object::{seats, DateTime, Seats},
};

#[cfg(any(test, feature = "test-util"))]
use crate::command_use_case::port::WebinarRepository;
use crate::port::HasWebinarRepository;

#[derive(Debug)]
pub struct Input {
    pub end_date: String,
    pub seats: u32,
    pub start_date: String,
    pub title: String,
    pub user: User,
}

#[derive(Debug)]
pub struct Output {
    pub webinar_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid end date")]
    InvalidEndDate(#[source] write_model::value_object::date_time::Error),
    #[error("Webinar must end after it starts")]
    InvalidSchedule,
    #[error("invalid start date")]
    InvalidStartDate(#[source] write_model::value_object::date_time::Error),
    #[error("Webinar must have a title")]
    InvalidTitle,
    #[error("Webinar must have seats")]
    NoSeats,
    #[error("Webinar must be scheduled at least 3 days in advance")]
    TooSoon,
    #[error("Webinar must have at most 1000 seats")]
    TooManySeats,
    #[error("webinar create")]
    WebinarCreate(#[source] crate::command_use_case::port::webinar_repository::Error),
}

impl From<seats::Error> for Error {
    fn from(e: seats::Error) -> Self {
        match e {
            seats::Error::TooFew => Self::NoSeats,
            seats::Error::TooMany => Self::TooManySeats,
        }
    }
}

impl From<write_model::aggregate::webinar::CreateError> for Error {
    fn from(e: write_model::aggregate::webinar::CreateError) -> Self {
        use write_model::aggregate::webinar::CreateError as E;
        match e {
            E::InvalidSchedule => Self::InvalidSchedule,
            E::InvalidTitle => Self::InvalidTitle,
            E::TooSoon => Self::TooSoon,
        }
    }
}

#[async_trait::async_trait]
pub trait OrganizeWebinar: HasWebinarRepository {
    #[tracing::instrument(level = tracing::Level::INFO, err(Debug), ret, skip(self))]
    async fn execute(&self, input: Input) -> Result<Output, Error> {
        let seats = Seats::try_from(input.seats)?;
        let start_date = DateTime::from_str(&input.start_date).map_err(Error::InvalidStartDate)?;
        let end_date = DateTime::from_str(&input.end_date).map_err(Error::InvalidEndDate)?;
        let webinar = Webinar::create(
            DateTime::now(),
            input.user.id().clone(),
            input.title,
            seats,
            start_date,
            end_date,
        )?;
        self.webinar_repository()
            .create(&webinar)
            .await
            .map_err(Error::WebinarCreate)?;
        Ok(Output {
            webinar_id: webinar.id().to_string(),
        })
    }
}

#[cfg(any(test, feature = "test-util"))]
mockall::mock! {
    pub OrganizeWebinar {}

    impl HasWebinarRepository for OrganizeWebinar {
        fn webinar_repository(&self) -> Arc<dyn WebinarRepository + Send + Sync>;
    }

    #[async_trait::async_trait]
    impl OrganizeWebinar for OrganizeWebinar {
        async fn execute(&self, input: Input) -> Result<Output, Error>;
    }
}

pub trait HasOrganizeWebinar {
    fn organize_webinar(&self) -> Arc<dyn OrganizeWebinar + Send + Sync>;
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use write_model::value_object::UserId;

    use crate::command_use_case::port::MockWebinarRepository;

    use super::*;

    struct TestApp {
        webinar_repository: Arc<MockWebinarRepository>,
    }

    impl HasWebinarRepository for TestApp {
        fn webinar_repository(&self) -> Arc<dyn WebinarRepository + Send + Sync> {
            self.webinar_repository.clone()
        }
    }

    impl OrganizeWebinar for TestApp {}

    fn days_from_now(days: u32) -> anyhow::Result<String> {
        DateTime::now()
            .checked_add_days(days)
            .map(|dt| dt.to_string())
            .ok_or_else(|| anyhow::anyhow!("date overflow"))
    }

    fn build_input(title: &str, seats: u32) -> anyhow::Result<Input> {
        Ok(Input {
            end_date: days_from_now(5)?,
            seats,
            start_date: days_from_now(4)?,
            title: title.to_string(),
            user: User::new(UserId::from_str("alice")?),
        })
    }

    #[test]
    fn test_error_from_create_error() {
        use write_model::aggregate::webinar::CreateError as E;
        assert!(matches!(
            Error::from(E::InvalidSchedule),
            Error::InvalidSchedule
        ));
        assert!(matches!(Error::from(E::InvalidTitle), Error::InvalidTitle));
        assert!(matches!(Error::from(E::TooSoon), Error::TooSoon));
    }

    #[test]
    fn test_mock() {
        let mut mock = MockOrganizeWebinar::new();
        mock.expect_execute().return_once(|_| {
            Ok(Output {
                webinar_id: "webinar-id".to_string(),
            })
        });
    }

    #[tokio::test]
    async fn test_happy_path() -> anyhow::Result<()> {
        let mut webinar_repository = MockWebinarRepository::new();
        webinar_repository
            .expect_create()
            .withf(|webinar| {
                webinar.organizer_id().as_str() == "alice"
                    && webinar.title() == "Webinar title"
                    && u32::from(webinar.seats()) == 100
            })
            .times(1)
            .return_once(|_| Ok(()));
        let app = TestApp {
            webinar_repository: Arc::new(webinar_repository),
        };

        let output = app.execute(build_input("Webinar title", 100)?).await?;
        assert!(!output.webinar_id.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_validation_errors() -> anyhow::Result<()> {
        let mut cases = vec![
            (build_input("Webinar title", 0)?, "Webinar must have seats"),
            (
                build_input("Webinar title", 1001)?,
                "Webinar must have at most 1000 seats",
            ),
            (build_input("", 100)?, "Webinar must have a title"),
        ];
        let mut too_soon = build_input("Webinar title", 100)?;
        too_soon.start_date = days_from_now(1)?;
        cases.push((
            too_soon,
            "Webinar must be scheduled at least 3 days in advance",
        ));
        let mut reversed = build_input("Webinar title", 100)?;
        std::mem::swap(&mut reversed.start_date, &mut reversed.end_date);
        reversed.start_date = days_from_now(6)?;
        cases.push((reversed, "Webinar must end after it starts"));
        let mut invalid_date = build_input("Webinar title", 100)?;
        invalid_date.start_date = "tomorrow".to_string();
        cases.push((invalid_date, "invalid start date"));

        for (input, message) in cases {
            let mut webinar_repository = MockWebinarRepository::new();
            webinar_repository.expect_create().never();
            let app = TestApp {
                webinar_repository: Arc::new(webinar_repository),
            };
            match app.execute(input).await {
                Ok(_) => anyhow::bail!("expected failure: {message}"),
                Err(e) => assert_eq!(e.to_string(), message),
            }
        }
        Ok(())
    }
}
