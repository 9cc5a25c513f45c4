use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{authorize, Action, Claims, Identity, ResourceRef},
    errors::{AppError, AppResult},
    models::{domain::Question, dto::request::CreateQuestionRequest},
    repositories::{QuestionRepository, RoomRepository},
    services::room_not_found,
};

pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
    rooms: Arc<dyn RoomRepository>,
}

impl QuestionService {
    pub fn new(questions: Arc<dyn QuestionRepository>, rooms: Arc<dyn RoomRepository>) -> Self {
        Self { questions, rooms }
    }

    pub async fn create_question(
        &self,
        claims: &Claims,
        room_id: &str,
        request: CreateQuestionRequest,
    ) -> AppResult<Question> {
        request.validate()?;

        let identity = Identity::from(claims);
        let not_found = room_not_found(room_id);

        // The role gate runs before the room lookup: a role-denied caller
        // must learn nothing about whether the room exists.
        authorize(&identity, Action::CreateQuestion, &ResourceRef::none()).require(&not_found)?;

        let room = self
            .rooms
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(not_found.clone()))?;

        authorize(
            &identity,
            Action::CreateQuestion,
            &ResourceRef::owned_by(&room.institute_id),
        )
        .require(&not_found)?;

        let question = Question::new(
            room_id,
            &request.text,
            request.question_type,
            request.options,
            &request.correct_answer,
        );
        let question = self.questions.create(question).await?;
        log::info!("Created question '{}' in room '{}'", question.id, room_id);

        Ok(question)
    }

    /// Public by room id (see `policy::rules_for`): no identity gate, but
    /// the room itself must exist.
    pub async fn list_questions_for_room(&self, room_id: &str) -> AppResult<Vec<Question>> {
        if self.rooms.find_by_id(room_id).await?.is_none() {
            return Err(AppError::NotFound(room_not_found(room_id)));
        }

        let questions = self.questions.list_by_room(room_id).await?;
        Ok(questions)
    }
}
