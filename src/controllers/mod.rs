// Thin orchestration between handlers and services: log, delegate a single
// service call, propagate failures unchanged.

pub mod admin_controller;
pub mod booking_controller;
pub mod client_controller;
pub mod coach_controller;
pub mod feedback_controller;
pub mod workout_option_controller;

pub use admin_controller::AdminController;
pub use booking_controller::BookingController;
pub use client_controller::ClientController;
pub use coach_controller::CoachController;
pub use feedback_controller::FeedbackController;
pub use workout_option_controller::WorkoutOptionController;
