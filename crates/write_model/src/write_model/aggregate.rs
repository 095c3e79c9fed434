pub mod user;
pub mod webinar;

pub use self::user::User;
pub use self::webinar::Webinar;
