use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizroom_server::{
    app_state::AppState,
    auth::AuthMiddleware,
    config::Config,
    handlers::{health_handler, institute_handler, question_handler, room_handler},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .expect("failed to initialize application state");

    let jwt_data = web::Data::from(state.jwt_service.clone());
    let state_data = web::Data::new(state);

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state_data.clone())
            .app_data(jwt_data.clone())
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(health_handler::health_check)
            .service(
                web::scope("/api/v1")
                    .service(institute_handler::register_institute)
                    .service(institute_handler::login_institute)
                    .service(question_handler::get_questions_for_room)
                    .service(
                        web::scope("")
                            .wrap(AuthMiddleware)
                            .service(room_handler::get_rooms)
                            .service(room_handler::create_room)
                            .service(room_handler::add_student_to_room)
                            .service(question_handler::create_question),
                    ),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
