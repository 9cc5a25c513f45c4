pub mod enrollment;
pub mod institute;
pub mod question;
pub mod room;

pub use enrollment::Enrollment;
pub use institute::Institute;
pub use question::{Question, QuestionType};
pub use room::Room;
