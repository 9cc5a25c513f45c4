use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

use quizroom_server::{
    auth::JwtService,
    errors::{AppError, AppResult},
    models::domain::{Enrollment, Institute, Question, Room},
    repositories::{
        EnrollmentRepository, InstituteRepository, QuestionRepository, RoomRepository,
    },
    services::{InstituteService, QuestionService, RoomService},
};

// In-memory stands-ins for the Mongo repositories. Insertion order is the
// stored order, so "creation order" assertions hold without timestamps.

#[derive(Default)]
pub struct InMemoryInstituteRepository {
    institutes: Arc<RwLock<Vec<Institute>>>,
}

impl InMemoryInstituteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InstituteRepository for InMemoryInstituteRepository {
    async fn create(&self, institute: Institute) -> AppResult<Institute> {
        let mut institutes = self.institutes.write().await;

        if institutes.iter().any(|i| i.email == institute.email) {
            return Err(AppError::AlreadyExists(format!(
                "Institute with email '{}' is already registered",
                institute.email
            )));
        }

        institutes.push(institute.clone());
        Ok(institute)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Institute>> {
        let institutes = self.institutes.read().await;
        Ok(institutes.iter().find(|i| i.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Institute>> {
        let institutes = self.institutes.read().await;
        Ok(institutes.iter().find(|i| i.id == id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryRoomRepository {
    rooms: Arc<RwLock<Vec<Room>>>,
}

impl InMemoryRoomRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn create(&self, room: Room) -> AppResult<Room> {
        let mut rooms = self.rooms.write().await;
        rooms.push(room.clone());
        Ok(room)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Room>> {
        let rooms = self.rooms.read().await;
        Ok(rooms.iter().find(|r| r.id == id).cloned())
    }

    async fn list_by_institute(&self, institute_id: &str) -> AppResult<Vec<Room>> {
        let rooms = self.rooms.read().await;
        Ok(rooms
            .iter()
            .filter(|r| r.institute_id == institute_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryEnrollmentRepository {
    enrollments: Arc<RwLock<Vec<Enrollment>>>,
}

impl InMemoryEnrollmentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentRepository {
    async fn create(&self, enrollment: Enrollment) -> AppResult<Enrollment> {
        let mut enrollments = self.enrollments.write().await;

        if enrollments
            .iter()
            .any(|e| e.room_id == enrollment.room_id && e.email == enrollment.email)
        {
            return Err(AppError::AlreadyExists(format!(
                "Student '{}' is already enrolled in room '{}'",
                enrollment.email, enrollment.room_id
            )));
        }

        enrollments.push(enrollment.clone());
        Ok(enrollment)
    }

    async fn list_by_room(&self, room_id: &str) -> AppResult<Vec<Enrollment>> {
        let enrollments = self.enrollments.read().await;
        Ok(enrollments
            .iter()
            .filter(|e| e.room_id == room_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<Vec<Question>>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn create(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.questions.write().await;
        questions.push(question.clone());
        Ok(question)
    }

    async fn list_by_room(&self, room_id: &str) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        Ok(questions
            .iter()
            .filter(|q| q.room_id == room_id)
            .cloned()
            .collect())
    }
}

/// The full service stack wired onto in-memory repositories, as the
/// handlers would see it.
pub struct TestBackend {
    pub institute_service: InstituteService,
    pub room_service: RoomService,
    pub question_service: QuestionService,
    pub jwt_service: Arc<JwtService>,
}

pub fn test_backend() -> TestBackend {
    let jwt_service = Arc::new(JwtService::new(
        &SecretString::from("test_jwt_secret_key".to_string()),
        1,
    ));

    let institutes = Arc::new(InMemoryInstituteRepository::new());
    let rooms = Arc::new(InMemoryRoomRepository::new());
    let enrollments = Arc::new(InMemoryEnrollmentRepository::new());
    let questions = Arc::new(InMemoryQuestionRepository::new());

    TestBackend {
        institute_service: InstituteService::new(institutes, jwt_service.clone()),
        room_service: RoomService::new(rooms.clone(), enrollments),
        question_service: QuestionService::new(questions, rooms),
        jwt_service,
    }
}
