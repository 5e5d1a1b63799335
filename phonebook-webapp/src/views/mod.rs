pub mod filter;
pub mod notification;
pub mod person_form;
pub mod persons;
