use std::rc::Rc;

use log::*;

use crate::ctrl::{Confirmation, ControllerError};
use crate::model::{Draft, Notification, PersonId, Record};
use crate::remote::RemoteCollection;
use crate::state::{self, StateChange};

/// Drives the remote operations behind the phonebook form and list.
///
/// Works on snapshots of the state and never touches it directly. The returned changes are
/// meant to be applied by the owner of the state once the remote call resolved.
#[derive(Clone)]
pub struct PhonebookController {
    remote: Rc<dyn RemoteCollection>,
    confirmation: Rc<dyn Confirmation>,
}

impl PhonebookController {
    pub fn new(
        remote: Rc<dyn RemoteCollection>,
        confirmation: Rc<dyn Confirmation>,
    ) -> PhonebookController {
        PhonebookController { remote, confirmation }
    }

    pub async fn load(&self) -> Vec<StateChange> {
        match self.remote.fetch_all().await {
            Ok(records) => {
                info!("Fetched {} records", records.len());
                vec![StateChange::Loaded(records)]
            }
            Err(error) => {
                warn!("Failed to fetch records: {}", error);
                vec![StateChange::Notified(Notification::error(
                    "Error loading phonebook".to_string(),
                ))]
            }
        }
    }

    /// Adds the draft as a new record, or replaces the number of the first record with the
    /// same name after the user agreed.
    pub async fn submit(&self, records: &[Record], draft: &Draft) -> Vec<StateChange> {
        if !draft.is_complete() {
            debug!("Ignoring incomplete draft");
            return vec![];
        }

        match state::find_by_name(records, &draft.name) {
            Some(existing) => self.update(existing, draft).await,
            None => self.add(draft).await,
        }
    }

    async fn add(&self, draft: &Draft) -> Vec<StateChange> {
        let name = draft.name.clone();

        match self.remote.create(draft.clone()).await {
            Ok(created) => {
                info!("Added {} as {}", name, created.id);
                vec![
                    StateChange::Appended(created),
                    StateChange::DraftCleared,
                    StateChange::Notified(Notification::success(format!("Added {}", name))),
                ]
            }
            Err(error) => {
                warn!("Failed to add {}: {}", name, error);
                vec![StateChange::Notified(Notification::error(format!("Error adding {}", name)))]
            }
        }
    }

    async fn update(&self, existing: &Record, draft: &Draft) -> Vec<StateChange> {
        let name = draft.name.clone();
        let question = format!(
            "{} is already in the phonebook, replace the old number with the new one?",
            name
        );

        if !self.confirmation.confirm(&question).await {
            return vec![];
        }

        let replacement = existing.with_number(&draft.number);
        match self.remote.replace(existing.id.clone(), replacement).await {
            Ok(updated) => {
                info!("Updated {}", updated.id);
                vec![
                    StateChange::Replaced(updated),
                    StateChange::DraftCleared,
                    StateChange::Notified(Notification::success(format!("Updated {}", name))),
                ]
            }
            Err(error) => {
                warn!("Failed to update {}: {}", existing.id, error);
                vec![StateChange::Notified(Notification::error(format!(
                    "Error updating {}",
                    name
                )))]
            }
        }
    }

    /// Deletes a listed record after the user agreed. The record has to be part of `records`.
    pub async fn delete(
        &self,
        records: &[Record],
        id: &PersonId,
    ) -> Result<Vec<StateChange>, ControllerError> {
        let record = state::find_by_id(records, id).ok_or_else(|| {
            ControllerError::UnknownRecord { message: format!("No record with id '{}'", id) }
        })?;

        if !self.confirmation.confirm(&format!("Delete {}?", record.name)).await {
            return Ok(vec![]);
        }

        match self.remote.remove(id.clone()).await {
            Ok(()) => {
                info!("Deleted {}", id);
                Ok(vec![StateChange::Removed(id.clone())])
            }
            Err(error) => {
                warn!("Failed to delete {}: {}", id, error);
                Ok(vec![StateChange::Notified(Notification::error(format!(
                    "Error deleting {}",
                    record.name
                )))])
            }
        }
    }
}
