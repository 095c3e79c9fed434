pub mod webinar_reader;

#[cfg(any(test, feature = "test-util"))]
pub use self::webinar_reader::MockWebinarReader;
pub use self::webinar_reader::{HasWebinarReader, WebinarQueryData, WebinarReader};
