use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{LoginInstituteRequest, RegisterInstituteRequest},
        response::{ApiResponse, InstituteDto},
    },
};

#[post("/institute/register")]
pub async fn register_institute(
    state: web::Data<AppState>,
    request: web::Json<RegisterInstituteRequest>,
) -> Result<HttpResponse, AppError> {
    let institute = state.institute_service.register(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse {
        data: InstituteDto::from(institute),
        message: "Institute registered".to_string(),
    }))
}

#[post("/institute/login")]
pub async fn login_institute(
    state: web::Data<AppState>,
    request: web::Json<LoginInstituteRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.institute_service.login(request.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
