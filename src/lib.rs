pub mod error;
pub mod filter;
pub mod models;
pub mod report;
pub mod seed;
pub mod session;
pub mod store;
pub mod validation;

pub use error::{PortalError, SeedError, ValidationError};
pub use filter::{CategoryFilter, JobFilter};
pub use models::{CollectionType, NewJob, Snapshot};
pub use store::RecordStore;
