pub mod enrollment_repository;
pub mod institute_repository;
pub mod question_repository;
pub mod room_repository;

pub use enrollment_repository::{EnrollmentRepository, MongoEnrollmentRepository};
pub use institute_repository::{InstituteRepository, MongoInstituteRepository};
pub use question_repository::{MongoQuestionRepository, QuestionRepository};
pub use room_repository::{MongoRoomRepository, RoomRepository};

use mongodb::error::{ErrorKind, WriteFailure};

/// Mongo reports a unique-index violation as write error 11000. The
/// uniqueness check and the insert are one conditional operation at the
/// store, so two racing writers cannot both succeed.
pub(crate) fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        _ => false,
    }
}
