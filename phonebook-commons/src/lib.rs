pub mod config;
pub mod ctrl;
pub mod filter;
pub mod model;
pub mod notification;
pub mod remote;
pub mod state;

pub use config::*;
