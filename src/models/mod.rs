pub mod listing;

pub use listing::{Entry, EntryKind, ListingResult};
