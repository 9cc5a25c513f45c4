use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Institute, Question, QuestionType, Room};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

/// Public view of an institute; the password hash never leaves the store.
#[derive(Debug, Clone, Serialize)]
pub struct InstituteDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Institute> for InstituteDto {
    fn from(institute: Institute) -> Self {
        InstituteDto {
            id: institute.id,
            name: institute.name,
            email: institute.email,
            phone: institute.phone,
            created_at: institute.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub institute_id: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomDto {
    pub id: String,
    pub name: String,
    pub institute_id: String,
    /// Enrolled student emails, in enrollment order.
    pub students: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl RoomDto {
    pub fn with_students(room: Room, students: Vec<String>) -> Self {
        RoomDto {
            id: room.id,
            name: room.name,
            institute_id: room.institute_id,
            students,
            created_at: room.created_at,
        }
    }
}

impl From<Room> for RoomDto {
    fn from(room: Room) -> Self {
        RoomDto::with_students(room, Vec::new())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub id: String,
    pub room_id: String,
    pub text: String,
    pub question_type: QuestionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub correct_answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        QuestionDto {
            id: question.id,
            room_id: question.room_id,
            text: question.text,
            question_type: question.question_type,
            options: question.options,
            correct_answer: question.correct_answer,
            created_at: question.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EnrollStudentResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_institute_dto_hides_password_hash() {
        let institute = Institute::new("Acme", "a@acme.io", "$2b$12$hash", "1234567890");
        let dto: InstituteDto = institute.into();

        let json = serde_json::to_string(&dto).expect("dto should serialize");
        assert!(!json.contains("password"));
        assert!(json.contains("a@acme.io"));
    }

    #[test]
    fn test_question_dto_keeps_all_fields() {
        let question = Question::new(
            "room-1",
            "2+2?",
            QuestionType::SingleChoice,
            Some(vec!["3".to_string(), "4".to_string()]),
            "4",
        );
        let dto: QuestionDto = question.into();

        assert_eq!(dto.text, "2+2?");
        assert_eq!(dto.correct_answer, "4");
        assert_eq!(dto.options.as_ref().map(|o| o.len()), Some(2));
    }
}
