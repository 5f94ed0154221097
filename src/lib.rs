//! Workspace umbrella crate: re-exports [`picker_core`] so the demos can be
//! run from the repository root with `cargo run --example basic_usage`.
pub use picker_core::*;
