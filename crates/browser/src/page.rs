use std::sync::Arc;

use futures::future::join_all;
use lab_api::models::{Collection, Record};
use tokio::task::JoinHandle;

use crate::{BrowserError, Page, Services, Topic, TypeFilter};

/// What the browser currently shows.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub topic: Topic,
    pub search_value: String,
    pub equipment_type: TypeFilter,
    pub results: Vec<Record>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation.
    Cancelled,
    /// The API answered that nothing was deleted.
    Rejected,
    /// The delete request failed; the user has been alerted.
    Failed,
    Deleted {
        unassigned: usize,
        failed_updates: usize,
    },
}

/// Keeps only what the current topic and equipment filter allow. Only
/// equipment is filtered client side.
pub fn filter_results(topic: Topic, filter: TypeFilter, data: Vec<Record>) -> Vec<Record> {
    match (topic, filter) {
        (Topic::Equipments, TypeFilter::Only(_)) => {
            data.into_iter().filter(|r| filter.matches(r)).collect()
        }
        _ => data,
    }
}

pub struct RecordBrowser {
    services: Services,
    state: SearchState,
    equipment: Option<Record>,
    redirect: Option<JoinHandle<()>>,
}

impl RecordBrowser {
    /// Opening the browser with an equipment record puts it in assignment
    /// mode, listing staff to pick from.
    pub fn new(services: Services, equipment: Option<Record>) -> Self {
        let topic = match equipment {
            Some(_) => Topic::Staff,
            None => Topic::Equipments,
        };

        Self {
            services,
            state: SearchState {
                topic,
                ..Default::default()
            },
            equipment,
            redirect: None,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn results(&self) -> &[Record] {
        &self.state.results
    }

    pub fn equipment(&self) -> Option<&Record> {
        self.equipment.as_ref()
    }

    pub fn is_assigning(&self) -> bool {
        self.equipment.is_some()
    }

    pub fn set_topic(&mut self, topic: Topic) {
        self.state.topic = topic;
    }

    pub fn set_search_value(&mut self, value: impl Into<String>) {
        self.state.search_value = value.into();
    }

    pub fn set_equipment_type(&mut self, filter: TypeFilter) {
        self.state.equipment_type = filter;
    }

    /// Denies entry without a session and sends the user to the login page.
    /// The redirect runs on its own task so it never nests inside the
    /// navigation that asked for entry.
    pub fn can_enter(&mut self) -> bool {
        if self.services.session.is_logged_in() {
            return true;
        }

        tracing::info!("No session, redirecting to {}", Page::Login);

        let navigator = Arc::clone(&self.services.navigator);
        self.redirect = Some(tokio::spawn(async move {
            navigator.set_root(Page::Login).await
        }));

        false
    }

    /// Waits for a login redirect scheduled by `can_enter`, if any.
    pub async fn wait_redirect(&mut self) {
        if let Some(handle) = self.redirect.take() {
            if let Err(e) = handle.await {
                tracing::warn!("Login redirect did not complete: {e}");
            }
        }
    }

    /// Guard plus the initial table load.
    pub async fn enter(&mut self) -> bool {
        if !self.can_enter() {
            return false;
        }

        self.refresh().await;

        true
    }

    /// Reloads the results for the current topic, search text and filter.
    /// Failures are logged and leave the previous results in place.
    #[tracing::instrument(skip(self), fields(topic = %self.state.topic, search = %self.state.search_value))]
    pub async fn refresh(&mut self) -> bool {
        let collection = self.state.topic.collection();

        let result = self
            .services
            .query
            .get_entries_by_name(&self.state.search_value, collection)
            .await;

        match result {
            Ok(data) => {
                self.state.results =
                    filter_results(self.state.topic, self.state.equipment_type, data);
                tracing::info!("Table successfully updated");

                true
            }
            Err(e) => {
                tracing::error!("Error updating table: {e}");

                false
            }
        }
    }

    #[tracing::instrument(skip(self, item), fields(id = %item.id))]
    pub async fn delete_entry(&mut self, item: &Record) -> DeleteOutcome {
        let confirmed = self
            .services
            .alerts
            .confirm("Are you sure you want to delete entry?", "")
            .await;

        if !confirmed {
            return DeleteOutcome::Cancelled;
        }

        let collection = self.state.topic.collection();

        let result = self
            .services
            .query
            .delete_entry_by_id(&item.id, collection)
            .await;

        match result {
            Ok(true) => {
                let (unassigned, failed_updates) = if collection == Collection::Staff {
                    self.release_equipments(item).await
                } else {
                    (0, 0)
                };

                self.refresh().await;

                DeleteOutcome::Deleted {
                    unassigned,
                    failed_updates,
                }
            }
            Ok(false) => {
                tracing::warn!("Nothing deleted for {collection}/{}", item.id);

                DeleteOutcome::Rejected
            }
            Err(e) => {
                tracing::error!("Error deleting entry: {e}");
                self.services
                    .alerts
                    .show_alert("Error deleting entry", "Error")
                    .await;

                DeleteOutcome::Failed
            }
        }
    }

    /// Clears the `staff` reference of every equipment owned by `staff`.
    /// Updates run concurrently and all of them settle before returning;
    /// failures are only logged. Returns `(unassigned, failed)`.
    async fn release_equipments(&self, staff: &Record) -> (usize, usize) {
        let query = &self.services.query;

        let equipments = match query.get_equipments_by_staff(staff).await {
            Ok(equipments) => equipments,
            Err(e) => {
                tracing::warn!("Unable to list equipments of staff {}: {e}", staff.id);
                return (0, 0);
            }
        };

        let updates = equipments.into_iter().map(|mut equipment| async move {
            equipment.set_staff(None);

            let result = query
                .update_entry_by_id(&equipment.id, Collection::Equipments, &equipment)
                .await;

            match &result {
                Ok(_) => tracing::info!("Removed staff from equipment {}", equipment.id),
                Err(e) => tracing::warn!("Failed to free equipment {}: {e}", equipment.id),
            }

            result
        });

        let results = join_all(updates).await;
        let failed = results.iter().filter(|r| r.is_err()).count();

        (results.len() - failed, failed)
    }

    /// Assigns `staff` to the equipment the browser was opened with, then
    /// leaves assignment mode and shows the updated equipment.
    ///
    /// Returns the updated equipment, or `None` when the update failed and
    /// the user has been alerted.
    #[tracing::instrument(skip(self, staff), fields(staff = %staff.id))]
    pub async fn assign_staff(&mut self, staff: &Record) -> crate::Result<Option<Record>> {
        let equipment = self
            .equipment
            .as_ref()
            .ok_or(BrowserError::NoEquipmentContext)?;

        let mut updated = equipment.clone();
        updated.set_staff(Some(staff));

        let result = self
            .services
            .query
            .update_entry_by_id(&equipment.id, Collection::Equipments, &updated)
            .await;

        match result {
            Ok(_) => {
                self.services
                    .alerts
                    .show_alert("Staff assigned successfully", "")
                    .await;

                self.equipment = None;
                self.services
                    .navigator
                    .push(Page::EquipmentDetails, updated.clone())
                    .await;

                Ok(Some(updated))
            }
            Err(e) => {
                tracing::error!("Error assigning staff: {e}");
                self.services
                    .alerts
                    .show_alert("Error assigning staff", "Error")
                    .await;

                Ok(None)
            }
        }
    }

    pub async fn open_details(&self, item: &Record) {
        let page = self.state.topic.details_page();

        self.services.navigator.push(page, item.clone()).await;
    }
}
