//! Joins products, categories and users into denormalized view records, and
//! filters them by owner and search text.

pub mod catalog;
pub mod data;
pub mod digest;
pub mod error;
pub mod filter;
pub mod view;

pub use catalog::{Catalog, Listing};
pub use error::LoadError;
pub use filter::{apply_filters, FilterEvent, FilterState};
pub use view::{build_views, ViewCache, ViewRecord};
