use anyhow::Result;
use mongodb::bson::oid::ObjectId;
use tracing::{error, info};

use crate::models::{ActivityReport, AdminDetailsResponse, AdminEmailResponse, ReportRequest};
use crate::services::AdminService;

#[derive(Clone)]
pub struct AdminController {
    admin: AdminService,
}

impl AdminController {
    pub fn new(admin: AdminService) -> Self {
        Self { admin }
    }

    pub async fn save_details(
        &self,
        user_id: ObjectId,
        phone_number: String,
    ) -> Result<AdminDetailsResponse> {
        info!(%user_id, "saving admin details");
        self.admin
            .save_details(user_id, phone_number)
            .await
            .map_err(|err| {
                error!("failed to save admin details: {err}");
                err
            })
    }

    pub async fn register_email(&self, email: String) -> Result<AdminEmailResponse> {
        info!("registering admin email");
        self.admin.register_email(email).await.map_err(|err| {
            error!("failed to register admin email: {err}");
            err
        })
    }

    pub async fn activity_report(&self, request: ReportRequest) -> Result<ActivityReport> {
        info!(report_type = %request.report_type, "generating activity report");
        self.admin.activity_report(request).await.map_err(|err| {
            error!("failed to generate activity report: {err}");
            err
        })
    }
}
