//! Captured lead storage and export.
//!
//! # Lead Document
//!
//! A single JSON file (default `leads/emails.json`) holding an array of
//! records in capture order:
//!
//! ```json
//! [
//!   {
//!     "email": "guest@example.com",
//!     "source": "website",
//!     "timestamp": "2025-03-14T09:26:53.589793+00:00"
//!   }
//! ]
//! ```
//!
//! Only [`LeadStore`] implementations touch the document. A missing or
//! malformed document reads as an empty list; failing to write is an error.

pub mod export;
mod record;
mod store;

pub use record::LeadRecord;
pub use store::{JsonFileStore, LeadStore, StoreError};

#[cfg(test)]
pub use store::MemoryStore;
