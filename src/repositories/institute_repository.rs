use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Institute,
    repositories::is_duplicate_key_error,
};

#[async_trait]
pub trait InstituteRepository: Send + Sync {
    async fn create(&self, institute: Institute) -> AppResult<Institute>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Institute>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Institute>>;
}

pub struct MongoInstituteRepository {
    collection: Collection<Institute>,
}

impl MongoInstituteRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("institutes");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(email_index).await?;

        log::info!("Created unique email index on institutes collection");
        Ok(())
    }
}

#[async_trait]
impl InstituteRepository for MongoInstituteRepository {
    async fn create(&self, institute: Institute) -> AppResult<Institute> {
        match self.collection.insert_one(&institute).await {
            Ok(_) => Ok(institute),
            Err(err) if is_duplicate_key_error(&err) => Err(AppError::AlreadyExists(format!(
                "Institute with email '{}' is already registered",
                institute.email
            ))),
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Institute>> {
        let institute = self.collection.find_one(doc! { "email": email }).await?;
        Ok(institute)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Institute>> {
        let institute = self.collection.find_one(doc! { "id": id }).await?;
        Ok(institute)
    }
}
