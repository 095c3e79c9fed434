pub mod get_webinar;
pub mod port;
