use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::FindOptions, Collection, IndexModel};

#[cfg(test)]
use mockall::automock;

use crate::{db::Database, errors::AppResult, models::domain::Room};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create(&self, room: Room) -> AppResult<Room>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Room>>;
    /// Rooms owned by one institute, in creation order.
    async fn list_by_institute(&self, institute_id: &str) -> AppResult<Vec<Room>>;
}

pub struct MongoRoomRepository {
    collection: Collection<Room>,
}

impl MongoRoomRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("rooms");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let institute_index = IndexModel::builder()
            .keys(doc! { "institute_id": 1 })
            .build();

        self.collection.create_index(institute_index).await?;

        log::info!("Created institute_id index on rooms collection");
        Ok(())
    }
}

#[async_trait]
impl RoomRepository for MongoRoomRepository {
    async fn create(&self, room: Room) -> AppResult<Room> {
        self.collection.insert_one(&room).await?;
        Ok(room)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Room>> {
        let room = self.collection.find_one(doc! { "id": id }).await?;
        Ok(room)
    }

    async fn list_by_institute(&self, institute_id: &str) -> AppResult<Vec<Room>> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": 1 })
            .build();

        let cursor = self
            .collection
            .find(doc! { "institute_id": institute_id })
            .with_options(find_options)
            .await?;
        let rooms: Vec<Room> = cursor.try_collect().await?;

        Ok(rooms)
    }
}
