//! picker-cli
//! ==========
//!
//! Command-line front-end for the `picker-core` country list.
//!
//! This crate primarily provides a binary (`country-picker`). The library
//! target exists so docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! country-picker --help
//! country-picker sections --preferred NG,GH --preferred-title Preferred
//! country-picker search Nig
//! country-picker select 0 0 --search Nig
//! ```
//!
//! For programmatic access use [`picker-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
