// crates/picker-core/src/lib.rs

//! # picker-core
//!
//! The data side of a country picker screen: a catalog of countries grouped
//! into alphabetical sections with an optional "preferred" section first,
//! prefix search that narrows the list as the user types, and selection
//! reporting back to the host.
//!
//! ```rust
//! use picker_core::{Catalog, DefaultBackend, DefaultCountry, PickerConfig, PickerController};
//!
//! let catalog: Catalog<DefaultBackend> = vec![
//!     DefaultCountry::new("Canada", "CA", "+1"),
//!     DefaultCountry::new("China", "CN", "+86"),
//!     DefaultCountry::new("Nigeria", "NG", "+234"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let config = PickerConfig::default().with_preferred("Preferred", &["NG"]);
//! let mut picker = PickerController::new(&catalog, config).unwrap();
//! assert_eq!(picker.index().titles(), ["Preferred", "C", "N"]);
//!
//! picker.update_search("Ch");
//! assert_eq!(picker.search_results()[0].name(), "China");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod index;
pub mod model;
pub mod search;
pub mod selection;
pub mod text;

// Re-exports
pub use crate::catalog::Catalog;
pub use crate::config::PickerConfig;
pub use crate::controller::{CellContent, PickerController};
pub use crate::error::{PickerError, Result};
pub use crate::index::SectionIndex;
pub use crate::model::{CatalogBackend, Country, CountryRaw, DefaultBackend, DefaultCountry};
pub use crate::search::{filter, SearchState};
pub use crate::selection::{is_selected, select_country, SelectionHandler};
pub use crate::text::CaseMode;

/// Convenient alias used by the CLI and demos.
pub type DefaultCatalog = Catalog<DefaultBackend>;
