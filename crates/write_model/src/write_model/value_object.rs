pub mod date_time;
pub mod seats;
pub mod user_id;
pub mod webinar_id;

pub use self::date_time::DateTime;
pub use self::seats::Seats;
pub use self::user_id::UserId;
pub use self::webinar_id::WebinarId;
