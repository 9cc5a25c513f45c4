pub mod health_handler;
pub mod institute_handler;
pub mod question_handler;
pub mod room_handler;
