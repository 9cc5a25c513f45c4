use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{request::CreateQuestionRequest, response::QuestionDto},
};

/// Public: students fetch a room's questions without a token.
#[get("/questions/{room_id}")]
pub async fn get_questions_for_room(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let room_id = path.into_inner();
    let questions = state.question_service.list_questions_for_room(&room_id).await?;

    let dtos: Vec<QuestionDto> = questions.into_iter().map(QuestionDto::from).collect();
    Ok(HttpResponse::Ok().json(dtos))
}

#[post("/questions/{room_id}")]
pub async fn create_question(
    state: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<CreateQuestionRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let room_id = path.into_inner();
    let question = state
        .question_service
        .create_question(&auth.0, &room_id, request.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(QuestionDto::from(question)))
}
