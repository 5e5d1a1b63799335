use std::time::Duration;

use log::*;

use crate::filter;
use crate::model::{Draft, Notification, PersonId, Record};
use crate::notification::{Banner, Ticket};


/// Every mutation the application state knows about.
#[derive(Clone, Debug, PartialEq)]
pub enum StateChange {
    Loaded(Vec<Record>),
    Appended(Record),
    Replaced(Record),
    Removed(PersonId),
    DraftName(String),
    DraftNumber(String),
    DraftCleared,
    SearchTerm(String),
    Notified(Notification),
    NotificationExpired(Ticket),
}

/// Application state of the phonebook.
///
/// The local collection only ever mirrors what the server confirmed, all changes go through
/// [`PhonebookState::apply`].
#[derive(Clone, Debug, Default)]
pub struct PhonebookState {
    records: Vec<Record>,
    draft: Draft,
    search_term: String,
    banner: Banner,
}

impl PhonebookState {
    pub fn new(notification_timeout: Duration) -> PhonebookState {
        PhonebookState { banner: Banner::new(notification_timeout), ..Default::default() }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.banner.current()
    }

    pub fn notification_timeout(&self) -> Duration {
        self.banner.timeout()
    }

    pub fn visible_records(&self) -> Vec<&Record> {
        filter::filter_records(&self.records, &self.search_term)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Record> {
        find_by_name(&self.records, name)
    }

    pub fn find_by_id(&self, id: &PersonId) -> Option<&Record> {
        find_by_id(&self.records, id)
    }

    /// Applies a single change. Returns the ticket of a freshly shown notification, the
    /// caller is expected to arm the expiry timer for it.
    pub fn apply(&mut self, change: StateChange) -> Option<Ticket> {
        match change {
            StateChange::Loaded(records) => {
                debug!("Loaded {} records", records.len());
                self.records = records;
            }
            StateChange::Appended(record) => {
                self.records.push(record);
            }
            StateChange::Replaced(record) => {
                match self.records.iter_mut().find(|r| r.id == record.id) {
                    Some(existing) => *existing = record,
                    None => debug!("Dropping update for vanished record {}", record.id),
                }
            }
            StateChange::Removed(id) => {
                self.records.retain(|r| r.id != id);
            }
            StateChange::DraftName(name) => {
                self.draft.name = name;
            }
            StateChange::DraftNumber(number) => {
                self.draft.number = number;
            }
            StateChange::DraftCleared => {
                self.draft.clear();
            }
            StateChange::SearchTerm(term) => {
                self.search_term = term;
            }
            StateChange::Notified(notification) => {
                return Some(self.banner.show(notification));
            }
            StateChange::NotificationExpired(ticket) => {
                self.banner.expire(ticket);
            }
        };

        None
    }
}

/// First record carrying exactly `name`
pub fn find_by_name<'a>(records: &'a [Record], name: &str) -> Option<&'a Record> {
    records.iter().find(|r| r.name == name)
}

pub fn find_by_id<'a>(records: &'a [Record], id: &PersonId) -> Option<&'a Record> {
    records.iter().find(|r| &r.id == id)
}
