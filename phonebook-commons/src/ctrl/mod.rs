mod error;
pub use error::*;

mod confirm;
pub use confirm::*;

mod phonebook;
pub use phonebook::*;
