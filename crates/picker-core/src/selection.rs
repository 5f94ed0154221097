// crates/picker-core/src/selection.rs
use crate::model::{CatalogBackend, Country};
use tracing::info;

/// Receives the country the user picked.
///
/// The notification is one-shot: the core keeps no record of the selection
/// afterwards. Any `FnMut(&Country<B>)` closure is a handler.
pub trait SelectionHandler<B: CatalogBackend> {
    fn did_select(&mut self, country: &Country<B>);
}

impl<B, F> SelectionHandler<B> for F
where
    B: CatalogBackend,
    F: FnMut(&Country<B>),
{
    fn did_select(&mut self, country: &Country<B>) {
        self(country)
    }
}

/// Reports `country` to the host.
pub fn select_country<B, H>(handler: &mut H, country: &Country<B>)
where
    B: CatalogBackend,
    H: SelectionHandler<B> + ?Sized,
{
    info!(code = country.code(), name = country.name(), "country selected");
    handler.did_select(country);
}

/// Whether a row shows the selection checkmark.
pub fn is_selected<B: CatalogBackend>(country: &Country<B>, current: Option<&Country<B>>) -> bool {
    current.is_some_and(|c| c == country)
}
