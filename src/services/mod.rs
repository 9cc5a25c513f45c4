pub mod institute_service;
pub mod question_service;
pub mod room_service;

pub use institute_service::InstituteService;
pub use question_service::QuestionService;
pub use room_service::RoomService;

/// One wording for absent rooms everywhere, including ownership denials:
/// callers must not be able to tell a foreign room from a missing one.
pub(crate) fn room_not_found(room_id: &str) -> String {
    format!("Room with id '{}' not found", room_id)
}
