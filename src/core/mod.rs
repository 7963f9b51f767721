//! Core module containing the listing pipeline and the store contract

pub mod error;
pub mod filter;
pub mod listing;
pub mod product;
pub mod query;
pub mod response;
pub mod sort;
pub mod store;

pub use error::{CatalogError, ConfigError, ProductError, QueryError, StorageError};
pub use filter::{Criterion, FieldMatchMap, FieldSource};
pub use listing::list_products;
pub use product::Product;
pub use query::{ListingParams, PageResult, QuerySpec};
pub use response::ListingResponse;
pub use sort::SortKey;
pub use store::CatalogStore;
