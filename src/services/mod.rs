// Business logic services

pub mod admin_service;
pub mod booking_service;
pub mod client_service;
pub mod feedback_service;
pub mod user_service;
pub mod workout_option_service;

pub use admin_service::AdminService;
pub use booking_service::BookingService;
pub use client_service::ClientService;
pub use feedback_service::FeedbackService;
pub use user_service::UserService;
pub use workout_option_service::WorkoutOptionService;
