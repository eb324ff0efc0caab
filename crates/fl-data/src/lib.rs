//! `fl-data` — everything between the raw facility table and the linker.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`loader`]  | `load_facilities_csv`, `load_facilities_reader`            |
//! | [`exclude`] | `Exclusions` (known-bad records dropped before linking)    |
//! | [`filter`]  | `FacilityFilter`, `regions`                                |
//! | [`view`]    | `MapView` (centre + zoom for a selection)                  |
//! | [`summary`] | `type_distribution`, `select_detail`                       |
//! | [`error`]   | `DataError`, `DataResult<T>`                               |
//!
//! The dataset is passed explicitly through every function; nothing here
//! keeps a loaded table in a global.

pub mod error;
pub mod exclude;
pub mod filter;
pub mod loader;
pub mod summary;
pub mod view;

#[cfg(test)]
mod tests;

pub use error::{DataError, DataResult};
pub use exclude::Exclusions;
pub use filter::{ALL_REGIONS, FacilityFilter, regions};
pub use loader::{load_facilities_csv, load_facilities_reader};
pub use summary::{TypeCount, select_detail, type_distribution};
pub use view::MapView;
