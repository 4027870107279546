//! User Repository
//!
//! MongoDB persistence for registered users.

use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use tracing::info;

use crate::shared::error::{is_duplicate_key, PlatformError, Result};
use crate::user::entity::User;

const COLLECTION: &str = "users";

pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    /// Create the unique email index. Called once at startup.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index).await?;
        info!(collection = COLLECTION, "Ensured unique email index");
        Ok(())
    }

    /// Insert a new user. A concurrent insert with the same email surfaces
    /// as a Duplicate error via the unique index.
    pub async fn insert(&self, user: &User) -> Result<()> {
        self.collection.insert_one(user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                PlatformError::duplicate("User", "email", &user.email)
            } else {
                PlatformError::Database(e)
            }
        })?;
        Ok(())
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }
}
