use std::sync::Arc;

use async_trait::async_trait;
use lab_api::{
    errors::ApiError,
    models::{Collection, Record, RecordId},
};
#[cfg(test)]
use mockall::automock;

use crate::Page;

#[cfg_attr(test, automock)]
pub trait SessionService: Send + Sync {
    fn is_logged_in(&self) -> bool;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait QueryService: Send + Sync {
    async fn get_entries_by_name(
        &self,
        text: &str,
        collection: Collection,
    ) -> Result<Vec<Record>, ApiError>;

    async fn delete_entry_by_id(
        &self,
        id: &RecordId,
        collection: Collection,
    ) -> Result<bool, ApiError>;

    async fn update_entry_by_id(
        &self,
        id: &RecordId,
        collection: Collection,
        record: &Record,
    ) -> Result<Record, ApiError>;

    async fn get_equipments_by_staff(&self, staff: &Record) -> Result<Vec<Record>, ApiError>;
}

/// User facing messages. `show_alert` resolves once the user acknowledged
/// the message, `confirm` resolves with the user's answer.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AlertService: Send + Sync {
    async fn show_alert(&self, message: &str, title: &str);

    async fn confirm(&self, message: &str, title: &str) -> bool;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Replaces the whole navigation stack with `page`.
    async fn set_root(&self, page: Page);

    async fn push(&self, page: Page, item: Record);
}

#[async_trait]
impl QueryService for lab_api::Client {
    async fn get_entries_by_name(
        &self,
        text: &str,
        collection: Collection,
    ) -> Result<Vec<Record>, ApiError> {
        lab_api::Client::get_entries_by_name(self, text, collection).await
    }

    async fn delete_entry_by_id(
        &self,
        id: &RecordId,
        collection: Collection,
    ) -> Result<bool, ApiError> {
        lab_api::Client::delete_entry_by_id(self, id, collection).await
    }

    async fn update_entry_by_id(
        &self,
        id: &RecordId,
        collection: Collection,
        record: &Record,
    ) -> Result<Record, ApiError> {
        lab_api::Client::update_entry_by_id(self, id, collection, record).await
    }

    async fn get_equipments_by_staff(&self, staff: &Record) -> Result<Vec<Record>, ApiError> {
        lab_api::Client::get_equipments_by_staff(self, staff).await
    }
}

/// Everything the browser talks to.
#[derive(Clone)]
pub struct Services {
    pub session: Arc<dyn SessionService>,
    pub query: Arc<dyn QueryService>,
    pub alerts: Arc<dyn AlertService>,
    pub navigator: Arc<dyn Navigator>,
}
