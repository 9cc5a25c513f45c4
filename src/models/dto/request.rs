use serde::Deserialize;
use validator::Validate;

use crate::models::domain::QuestionType;

// The per-field rules below are the declarative validation table for each
// endpoint: every failing field is collected by `Validate::validate` and
// reported together (see `AppError::from<ValidationErrors>`).

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterInstituteRequest {
    #[validate(length(min = 1, message = "Please enter institute name"))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Please enter a password with 6 or more characters"))]
    pub password: String,

    #[validate(length(min = 10, max = 13, message = "Please enter a valid phone number"))]
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginInstituteRequest {
    #[validate(email(message = "Please enter your valid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "Please enter your password"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, max = 100, message = "Please enter a room name"))]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EnrollStudentRequest {
    #[validate(email(message = "Please add a valid student email"))]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, message = "Question text is required"))]
    pub text: String,

    // Membership in the fixed enumeration is enforced by the closed enum;
    // an out-of-set value fails deserialization before validation runs.
    pub question_type: QuestionType,

    pub options: Option<Vec<String>>,

    #[validate(length(min = 1, message = "Correct answer is required"))]
    pub correct_answer: String,
}
