//! The record browser: lists, searches, deletes and reassigns lab records
//! through injected collaborators.

mod errors;
mod page;
mod services;
mod topic;

pub use errors::BrowserError;
pub use page::*;
pub use services::*;
pub use topic::*;

pub use lab_api::models::{Collection, Record, RecordId};

pub type Result<T> = std::result::Result<T, BrowserError>;
