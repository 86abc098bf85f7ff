mod collection;
mod error;
pub mod fixtures;
pub mod traits;

pub use collection::CollectionStore;
pub use error::StoreError;
pub use traits::{matches_search, Editable, Record};
