pub mod change_seats;
pub mod organize_webinar;
pub mod port;
