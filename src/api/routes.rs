use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use mongodb::Database;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::{admin_only_middleware, auth_middleware, TokenDecoder};
use crate::controllers::{
    AdminController, BookingController, ClientController, CoachController, FeedbackController,
    WorkoutOptionController,
};
use crate::services::{
    AdminService, BookingService, ClientService, FeedbackService, UserService,
    WorkoutOptionService,
};

use super::{admin, bookings, clients, coaches, feedback, health};

#[derive(Clone)]
pub struct AppState {
    pub coaches: CoachController,
    pub clients: ClientController,
    pub bookings: BookingController,
    pub feedback: FeedbackController,
    pub workout_options: WorkoutOptionController,
    pub admin: AdminController,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            coaches: CoachController::new(UserService::new(db.clone())),
            clients: ClientController::new(ClientService::new(db.clone())),
            bookings: BookingController::new(BookingService::new(db.clone())),
            feedback: FeedbackController::new(FeedbackService::new(db.clone())),
            workout_options: WorkoutOptionController::new(WorkoutOptionService::new(db.clone())),
            admin: AdminController::new(AdminService::new(db)),
        }
    }
}

pub fn create_routes(db: Database, jwt_secret: &str) -> Router {
    let state = AppState::new(db);
    let decoder = TokenDecoder::new(jwt_secret);

    let public = Router::new()
        .route("/health", get(health::health_check))
        .route("/api/coaches", get(coaches::list_coaches))
        .route("/api/coaches/:id", get(coaches::get_coach))
        .route("/api/coaches/:id/feedback", get(feedback::coach_feedback));

    let authenticated = Router::new()
        .route(
            "/api/client/profile",
            get(clients::get_profile).put(clients::update_profile),
        )
        .route(
            "/api/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/api/feedback", post(feedback::submit_feedback))
        .route_layer(middleware::from_fn_with_state(
            decoder.clone(),
            auth_middleware,
        ));

    // Layers run outermost-last: authentication wraps the role check.
    let admin_routes = Router::new()
        .route(
            "/api/admin/workout-options",
            get(admin::list_workout_options).post(admin::create_workout_option),
        )
        .route(
            "/api/admin/workout-options/:id",
            put(admin::update_workout_option),
        )
        .route("/api/admin/details", post(admin::save_details))
        .route("/api/admin/emails", post(admin::register_email))
        .route("/api/admin/reports", post(admin::activity_report))
        .route_layer(middleware::from_fn(admin_only_middleware))
        .route_layer(middleware::from_fn_with_state(decoder, auth_middleware));

    Router::new()
        .merge(public)
        .merge(authenticated)
        .merge(admin_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
