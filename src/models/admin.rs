use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Contact details of an administrator account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDetails {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub phone_number: String,
}

/// An email address allowed to hold the admin role. Unique per collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminEmail {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdminDetailsRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterAdminEmailRequest {
    #[serde(default)]
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
}

/// Report parameters. Each field is free text but must be present.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReportRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Report type is required"))]
    pub report_type: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Report period is required"))]
    pub period: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Gym is required"))]
    pub gym: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminDetailsResponse {
    pub phone_number: String,
}

impl From<AdminDetails> for AdminDetailsResponse {
    fn from(details: AdminDetails) -> Self {
        Self {
            phone_number: details.phone_number,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminEmailResponse {
    pub email: String,
}

impl From<AdminEmail> for AdminEmailResponse {
    fn from(email: AdminEmail) -> Self {
        Self { email: email.email }
    }
}

/// Bookings per coach over the requested period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityReport {
    pub report_type: String,
    pub period: String,
    pub gym: String,
    pub generated_at: DateTime<Utc>,
    pub coaches: Vec<CoachActivity>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoachActivity {
    pub coach_id: String,
    pub bookings: u64,
}
