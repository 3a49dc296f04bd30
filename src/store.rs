//! In-memory store for every collection the dashboard shows.
//!
//! Collections are seeded from fixtures when the store is built and live for
//! the lifetime of the process. Nothing is persisted.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{RwLock, RwLockReadGuard};

use crate::{
    fixtures,
    models::{
        generate_user_id, CreateUser, FeedbackAnalysis, FeedbackEntry, FeedbackSource,
        InventoryLocation, Product, Shipment, Tier, User,
    },
};

/// Attempts at drawing an unused random user id before giving up.
const MAX_ID_ATTEMPTS: usize = 8;

/// A record with an id unique within its collection.
pub trait Record {
    fn id(&self) -> &str;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{collection} already contains id {id}")]
    DuplicateId { collection: &'static str, id: String },

    #[error("{collection} has no record with id {id}")]
    UnknownId { collection: &'static str, id: String },

    #[error("could not allocate an unused id in {0}")]
    IdsExhausted(&'static str),
}

/// An ordered list of records keyed by id.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    name: &'static str,
    records: Vec<T>,
}

impl<T: Record> Collection<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            records: Vec::new(),
        }
    }

    pub fn from_records(name: &'static str, records: Vec<T>) -> Result<Self, StoreError> {
        let mut collection = Self::new(name);
        for record in records {
            collection.insert(record)?;
        }
        Ok(collection)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Appends `record`, keeping insertion order.
    pub fn insert(&mut self, record: T) -> Result<&T, StoreError> {
        if self.contains(record.id()) {
            return Err(StoreError::DuplicateId {
                collection: self.name,
                id: record.id().to_string(),
            });
        }
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    pub fn remove(&mut self, id: &str) -> Result<T, StoreError> {
        let index = self.position(id)?;
        Ok(self.records.remove(index))
    }

    /// Applies `change` in place. The id must not be changed by `change`.
    pub fn update<F>(&mut self, id: &str, change: F) -> Result<&T, StoreError>
    where
        F: FnOnce(&mut T),
    {
        let index = self.position(id)?;
        change(&mut self.records[index]);
        Ok(&self.records[index])
    }

    fn position(&self, id: &str) -> Result<usize, StoreError> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::UnknownId {
                collection: self.name,
                id: id.to_string(),
            })
    }
}

/// Everything the store holds, read under one lock.
#[derive(Debug, Clone)]
pub struct Collections {
    pub products: Collection<Product>,
    pub shipments: Collection<Shipment>,
    pub locations: Collection<InventoryLocation>,
    pub users: Collection<User>,
    pub feedback: Collection<FeedbackEntry>,
    pub analysis: FeedbackAnalysis,
}

impl Collections {
    pub fn seeded() -> Result<Self, StoreError> {
        Ok(Self {
            products: Collection::from_records("products", fixtures::products())?,
            shipments: Collection::from_records("shipments", fixtures::shipments())?,
            locations: Collection::from_records("locations", fixtures::inventory_locations())?,
            users: Collection::from_records("users", fixtures::users())?,
            feedback: Collection::from_records("feedback", fixtures::feedback())?,
            analysis: fixtures::feedback_analysis(),
        })
    }
}

/// New feedback as submitted from the feedback form.
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub product_id: String,
    pub customer: String,
    pub tier: Tier,
    pub rating: u8,
    pub comment: String,
}

#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<Collections>>,
}

impl Store {
    pub fn new(collections: Collections) -> Self {
        Self {
            inner: Arc::new(RwLock::new(collections)),
        }
    }

    pub fn seeded() -> Result<Self, StoreError> {
        Ok(Self::new(Collections::seeded()?))
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().await
    }

    pub async fn find_product(&self, id: &str) -> Option<Product> {
        self.inner.read().await.products.get(id).cloned()
    }

    pub async fn find_user(&self, id: &str) -> Option<User> {
        self.inner.read().await.users.get(id).cloned()
    }

    /// Adds a user under a freshly generated id.
    pub async fn add_user(&self, new_user: CreateUser) -> Result<User, StoreError> {
        let mut data = self.inner.write().await;
        let id = (0..MAX_ID_ATTEMPTS)
            .map(|_| generate_user_id())
            .find(|id| !data.users.contains(id))
            .ok_or(StoreError::IdsExhausted("users"))?;
        let user = data.users.insert(new_user.into_user(id))?.clone();
        log::info!("Added user {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Replaces the editable fields of a user; id and creation date are kept.
    pub async fn update_user(&self, id: &str, changes: CreateUser) -> Result<User, StoreError> {
        let mut data = self.inner.write().await;
        let user = data
            .users
            .update(id, |user| {
                user.name = changes.name;
                user.email = changes.email;
                user.role = changes.role;
                user.status = changes.status;
                user.department = changes.department;
            })?
            .clone();
        log::info!("Updated user {}", user.id);
        Ok(user)
    }

    pub async fn remove_user(&self, id: &str) -> Result<User, StoreError> {
        let user = self.inner.write().await.users.remove(id)?;
        log::info!("Deleted user {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Appends feedback for a known product under the next `F-<n>` id.
    pub async fn submit_feedback(&self, new: NewFeedback) -> Result<FeedbackEntry, StoreError> {
        let mut data = self.inner.write().await;
        let product_name = data
            .products
            .get(&new.product_id)
            .map(|p| p.name.clone())
            .ok_or_else(|| StoreError::UnknownId {
                collection: "products",
                id: new.product_id.clone(),
            })?;
        let next = data
            .feedback
            .all()
            .iter()
            .filter_map(FeedbackEntry::sequence)
            .max()
            .map_or(1, |n| n + 1);
        let entry = FeedbackEntry::new(
            &format!("F-{next}"),
            &new.product_id,
            &product_name,
            &new.customer,
            new.tier,
            new.rating,
            &new.comment,
            Utc::now().date_naive(),
            Some(FeedbackSource::Web),
        );
        let entry = data.feedback.insert(entry)?.clone();
        log::info!("Recorded feedback {} for {}", entry.id, entry.product_id);
        Ok(entry)
    }

    pub async fn mark_analysis_generated(&self, at: DateTime<Utc>) {
        self.inner.write().await.analysis.generated_at = at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, UserStatus};

    fn new_user(name: &str) -> CreateUser {
        CreateUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: Role::Manager,
            status: UserStatus::Active,
            department: None,
        }
    }

    #[test]
    fn collection_rejects_duplicate_ids() {
        let users = fixtures::users();
        let mut collection = Collection::from_records("users", users.clone()).unwrap();
        let err = collection.insert(users[0].clone()).unwrap_err();
        assert_eq!(
            err,
            StoreError::DuplicateId {
                collection: "users",
                id: "1".to_string()
            }
        );
        assert_eq!(collection.len(), users.len());
    }

    #[test]
    fn collection_remove_and_update_require_known_id() {
        let mut collection = Collection::from_records("users", fixtures::users()).unwrap();
        assert!(matches!(
            collection.remove("missing"),
            Err(StoreError::UnknownId { .. })
        ));
        let updated = collection.update("3", |u| u.status = UserStatus::Active).unwrap();
        assert!(updated.is_active());
        assert_eq!(collection.remove("3").unwrap().name, "Michael Brown");
        assert!(!collection.contains("3"));
    }

    #[tokio::test]
    async fn add_user_appends_one_record() {
        let store = Store::seeded().unwrap();
        let before = store.read().await.users.len();
        let user = store.add_user(new_user("Grace")).await.unwrap();
        let data = store.read().await;
        assert_eq!(data.users.len(), before + 1);
        assert_eq!(data.users.all().last().map(|u| u.id.as_str()), Some(user.id.as_str()));
    }

    #[tokio::test]
    async fn remove_user_removes_exactly_one() {
        let store = Store::seeded().unwrap();
        let before = store.read().await.users.len();
        let removed = store.remove_user("2").await.unwrap();
        assert_eq!(removed.name, "Emily Johnson");
        let data = store.read().await;
        assert_eq!(data.users.len(), before - 1);
        assert!(data.users.get("2").is_none());
        drop(data);
        assert!(store.remove_user("2").await.is_err());
    }

    #[tokio::test]
    async fn update_user_keeps_id_and_creation_date() {
        let store = Store::seeded().unwrap();
        let original = store.find_user("5").await.unwrap();
        let updated = store.update_user("5", new_user("Dave")).await.unwrap();
        assert_eq!(updated.id, "5");
        assert_eq!(updated.date_created, original.date_created);
        assert_eq!(updated.role, Role::Manager);
        assert_eq!(updated.email, "dave@example.com");
    }

    #[tokio::test]
    async fn feedback_gets_next_sequence_and_product_name() {
        let store = Store::seeded().unwrap();
        let entry = store
            .submit_feedback(NewFeedback {
                product_id: "PRD-58123".to_string(),
                customer: "Walk-in".to_string(),
                tier: Tier::Silver,
                rating: 7,
                comment: "Fresh".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(entry.id, "F-1027");
        assert_eq!(entry.product_name, "Fresh Milk");
        assert_eq!(entry.rating(), 5);
        assert_eq!(entry.source, Some(FeedbackSource::Web));
    }

    #[tokio::test]
    async fn feedback_for_unknown_product_is_rejected() {
        let store = Store::seeded().unwrap();
        let before = store.read().await.feedback.len();
        let result = store
            .submit_feedback(NewFeedback {
                product_id: "PRD-00000".to_string(),
                customer: String::new(),
                tier: Tier::Bronze,
                rating: 3,
                comment: String::new(),
            })
            .await;
        assert!(matches!(result, Err(StoreError::UnknownId { collection: "products", .. })));
        assert_eq!(store.read().await.feedback.len(), before);
    }

    #[test]
    fn new_collection_is_empty() {
        let users: Collection<User> = Collection::new("users");
        assert!(users.is_empty());
        assert_eq!(users.name(), "users");
        assert!(users.get("1").is_none());
    }
}
