//! Lists the direct children of a directory, split into files and folders.

pub mod core;
pub mod models;
pub mod services;

pub use crate::core::errors::{Error, Result};
pub use crate::models::ListingResult;
pub use crate::services::fs::listing::{list, list_async, list_with, MetadataProbe, StdMetadata};
