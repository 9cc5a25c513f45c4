use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::{CreateRoomRequest, EnrollStudentRequest},
        response::{EnrollStudentResponse, RoomDto},
    },
};

#[get("/rooms")]
pub async fn get_rooms(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let rooms = state.room_service.list_rooms(&auth.0).await?;

    Ok(HttpResponse::Ok().json(rooms))
}

#[post("/rooms")]
pub async fn create_room(
    state: web::Data<AppState>,
    request: web::Json<CreateRoomRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let room = state.room_service.create_room(&auth.0, request.into_inner()).await?;

    Ok(HttpResponse::Created().json(RoomDto::from(room)))
}

#[post("/rooms/{room_id}/students")]
pub async fn add_student_to_room(
    state: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<EnrollStudentRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let room_id = path.into_inner();
    let enrollment = state
        .room_service
        .enroll_student(&auth.0, &room_id, request.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(EnrollStudentResponse {
        message: format!(
            "Student '{}' enrolled in room '{}'",
            enrollment.email, enrollment.room_id
        ),
    }))
}
