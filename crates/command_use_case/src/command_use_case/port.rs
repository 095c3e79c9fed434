pub mod webinar_repository;

pub use self::webinar_repository::{HasWebinarRepository, WebinarRepository};
#[cfg(any(test, feature = "test-util"))]
pub use self::webinar_repository::MockWebinarRepository;
