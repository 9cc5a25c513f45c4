use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoEnrollmentRepository, MongoInstituteRepository, MongoQuestionRepository,
        MongoRoomRepository,
    },
    services::{InstituteService, QuestionService, RoomService},
};

#[derive(Clone)]
pub struct AppState {
    pub institute_service: Arc<InstituteService>,
    pub room_service: Arc<RoomService>,
    pub question_service: Arc<QuestionService>,
    pub jwt_service: Arc<JwtService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        ));

        let institute_repository = Arc::new(MongoInstituteRepository::new(&db));
        institute_repository.ensure_indexes().await?;
        let room_repository = Arc::new(MongoRoomRepository::new(&db));
        room_repository.ensure_indexes().await?;
        let enrollment_repository = Arc::new(MongoEnrollmentRepository::new(&db));
        enrollment_repository.ensure_indexes().await?;
        let question_repository = Arc::new(MongoQuestionRepository::new(&db));
        question_repository.ensure_indexes().await?;

        let institute_service = Arc::new(InstituteService::new(
            institute_repository,
            jwt_service.clone(),
        ));
        let room_service = Arc::new(RoomService::new(
            room_repository.clone(),
            enrollment_repository,
        ));
        let question_service = Arc::new(QuestionService::new(question_repository, room_repository));

        Ok(Self {
            institute_service,
            room_service,
            question_service,
            jwt_service,
            db,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
