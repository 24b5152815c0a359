// Persisted document types and API request/response shapes

pub mod admin;
pub mod booking;
pub mod client;
pub mod feedback;
pub mod user;
pub mod validation;
pub mod workout_option;

pub use admin::{
    ActivityReport, AdminDetails, AdminDetailsRequest, AdminDetailsResponse, AdminEmail,
    AdminEmailResponse, CoachActivity, RegisterAdminEmailRequest, ReportRequest,
};
pub use booking::{Booking, BookingRequest, BookingResponse};
pub use client::{ClientDetails, ClientDetailsResponse, ClientPreferencesRequest};
pub use feedback::{CreateFeedbackRequest, Feedback, FeedbackPage, FeedbackResponse};
pub use user::{CoachProfile, User, UserRole};
pub use workout_option::{WorkoutOption, WorkoutOptionRequest, WorkoutOptionResponse};
