use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{hash_password, verify_password, JwtService},
    errors::{AppError, AppResult},
    models::{
        domain::Institute,
        dto::request::{LoginInstituteRequest, RegisterInstituteRequest},
        dto::response::AuthResponse,
    },
    repositories::InstituteRepository,
};

pub struct InstituteService {
    repository: Arc<dyn InstituteRepository>,
    jwt_service: Arc<JwtService>,
}

impl InstituteService {
    pub fn new(repository: Arc<dyn InstituteRepository>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            repository,
            jwt_service,
        }
    }

    pub async fn register(&self, request: RegisterInstituteRequest) -> AppResult<Institute> {
        request.validate()?;

        let password_hash = hash_password(&request.password)?;
        let institute = Institute::new(&request.name, &request.email, &password_hash, &request.phone);

        let institute = self.repository.create(institute).await?;
        log::info!("Registered institute '{}' ({})", institute.name, institute.id);

        Ok(institute)
    }

    pub async fn login(&self, request: LoginInstituteRequest) -> AppResult<AuthResponse> {
        request.validate()?;

        // Unknown email and wrong password answer identically.
        let institute = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(invalid_credentials)?;

        if !verify_password(&request.password, &institute.password_hash)? {
            return Err(invalid_credentials());
        }

        let token = self.jwt_service.create_token(&institute)?;
        log::info!("Institute '{}' logged in", institute.id);

        Ok(AuthResponse {
            token,
            institute_id: institute.id,
            email: institute.email,
        })
    }
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("Invalid email or password".to_string())
}
