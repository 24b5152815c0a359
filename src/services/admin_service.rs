use anyhow::Result;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::ReplaceOptions;
use mongodb::{Collection, Database};

use crate::models::{
    ActivityReport, AdminDetails, AdminDetailsResponse, AdminEmail, AdminEmailResponse,
    CoachActivity, ReportRequest,
};

const ADMIN_DETAILS: &str = "AdminDetails";
const ADMIN_EMAILS: &str = "AdminEmails";
const BOOKINGS: &str = "Bookings";

#[derive(Clone)]
pub struct AdminService {
    db: Database,
}

impl AdminService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn details(&self) -> Collection<AdminDetails> {
        self.db.collection(ADMIN_DETAILS)
    }

    fn emails(&self) -> Collection<AdminEmail> {
        self.db.collection(ADMIN_EMAILS)
    }

    /// Full-document replacement of an administrator's contact details.
    pub async fn save_details(
        &self,
        user_id: ObjectId,
        phone_number: String,
    ) -> Result<AdminDetailsResponse> {
        let details = AdminDetails {
            id: None,
            user_id,
            phone_number,
        };

        let options = ReplaceOptions::builder().upsert(true).build();
        self.details()
            .replace_one(doc! { "user_id": user_id }, &details, options)
            .await?;

        Ok(AdminDetailsResponse::from(details))
    }

    /// Register an email in the admin allow-list. The unique index on
    /// `email` makes a second registration fail with a duplicate-key error.
    pub async fn register_email(&self, email: String) -> Result<AdminEmailResponse> {
        let entry = AdminEmail { id: None, email };

        self.emails().insert_one(&entry, None).await?;

        Ok(AdminEmailResponse::from(entry))
    }

    /// Bookings-per-coach aggregation. The report parameters are echoed in
    /// the header; the aggregation spans the whole collection.
    pub async fn activity_report(&self, request: ReportRequest) -> Result<ActivityReport> {
        let pipeline = vec![
            doc! { "$group": { "_id": "$coach_id", "bookings": { "$sum": 1 } } },
            doc! { "$sort": { "bookings": -1 } },
        ];

        let mut cursor = self
            .db
            .collection::<Document>(BOOKINGS)
            .aggregate(pipeline, None)
            .await?;

        let mut coaches = Vec::new();
        while let Some(group) = cursor.try_next().await? {
            let coach_id = group
                .get_object_id("_id")
                .map(|id| id.to_hex())
                .unwrap_or_default();
            // $sum yields an Int32 until the count outgrows it.
            let bookings = group
                .get_i32("bookings")
                .map(i64::from)
                .or_else(|_| group.get_i64("bookings"))
                .unwrap_or(0);

            coaches.push(CoachActivity {
                coach_id,
                bookings: bookings as u64,
            });
        }

        Ok(ActivityReport {
            report_type: request.report_type,
            period: request.period,
            gym: request.gym,
            generated_at: Utc::now(),
            coaches,
        })
    }
}
