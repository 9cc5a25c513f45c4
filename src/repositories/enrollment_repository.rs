use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::FindOptions, options::IndexOptions, Collection, IndexModel};

#[cfg(test)]
use mockall::automock;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Enrollment,
    repositories::is_duplicate_key_error,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Atomic conditional insert: fails with `AlreadyExists` when the
    /// `(room_id, email)` pair is already enrolled.
    async fn create(&self, enrollment: Enrollment) -> AppResult<Enrollment>;
    /// Enrollments of one room, in enrollment order.
    async fn list_by_room(&self, room_id: &str) -> AppResult<Vec<Enrollment>>;
}

pub struct MongoEnrollmentRepository {
    collection: Collection<Enrollment>,
}

impl MongoEnrollmentRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("enrollments");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let membership_index = IndexModel::builder()
            .keys(doc! { "room_id": 1, "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("room_email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(membership_index).await?;

        log::info!("Created unique (room_id, email) index on enrollments collection");
        Ok(())
    }
}

#[async_trait]
impl EnrollmentRepository for MongoEnrollmentRepository {
    async fn create(&self, enrollment: Enrollment) -> AppResult<Enrollment> {
        match self.collection.insert_one(&enrollment).await {
            Ok(_) => Ok(enrollment),
            Err(err) if is_duplicate_key_error(&err) => Err(AppError::AlreadyExists(format!(
                "Student '{}' is already enrolled in room '{}'",
                enrollment.email, enrollment.room_id
            ))),
            Err(err) => Err(err.into()),
        }
    }

    async fn list_by_room(&self, room_id: &str) -> AppResult<Vec<Enrollment>> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": 1 })
            .build();

        let cursor = self
            .collection
            .find(doc! { "room_id": room_id })
            .with_options(find_options)
            .await?;
        let enrollments: Vec<Enrollment> = cursor.try_collect().await?;

        Ok(enrollments)
    }
}
