// crates/picker-core/src/search.rs
use crate::index::SectionIndex;
use crate::model::{CatalogBackend, Country};
use crate::text::{fold_key, has_prefix, section_key, CaseMode};
use tracing::debug;

/// Transient search state, rebuilt on every query change.
#[derive(Clone, Debug)]
pub struct SearchState<B: CatalogBackend> {
    pub is_search_mode: bool,
    pub results: Vec<Country<B>>,
}

impl<B: CatalogBackend> Default for SearchState<B> {
    fn default() -> Self {
        Self {
            is_search_mode: false,
            results: Vec::new(),
        }
    }
}

impl<B: CatalogBackend> SearchState<B> {
    pub fn reset(&mut self) {
        self.is_search_mode = false;
        self.results.clear();
    }

    /// Recomputes the state for `query` in place.
    pub fn update(
        &mut self,
        query: &str,
        index: &SectionIndex<B>,
        show_only_preferred: bool,
        mode: CaseMode,
    ) {
        *self = filter(query, index, show_only_preferred, mode);
    }
}

/// Narrows the index to the countries whose name starts with `query`.
///
/// Only one bucket is consulted: the preferred section when
/// `show_only_preferred` is set and the index has one, otherwise the bucket
/// keyed by the uppercased first character of the query. Results keep the
/// bucket order, so they stay sorted by name.
pub fn filter<B: CatalogBackend>(
    query: &str,
    index: &SectionIndex<B>,
    show_only_preferred: bool,
    mode: CaseMode,
) -> SearchState<B> {
    if query.is_empty() {
        return SearchState::default();
    }

    let results: Vec<Country<B>> = candidates(query, index, show_only_preferred, mode)
        .into_iter()
        .flatten()
        .filter(|c| has_prefix(c.name(), query, mode))
        .cloned()
        .collect();

    debug!(query, hits = results.len(), ?mode, "search updated");
    SearchState {
        is_search_mode: true,
        results,
    }
}

fn candidates<'a, B: CatalogBackend>(
    query: &str,
    index: &'a SectionIndex<B>,
    show_only_preferred: bool,
    mode: CaseMode,
) -> Vec<&'a [Country<B>]> {
    if show_only_preferred {
        if let Some(title) = index.preferred_title() {
            return index.bucket(title).into_iter().collect();
        }
    }

    let key = section_key(query);
    match mode {
        CaseMode::Exact => index.bucket(&key).into_iter().collect(),
        CaseMode::Folded => {
            let folded = fold_key(&key);
            if folded.is_empty() {
                return index.bucket(&key).into_iter().collect();
            }
            // "A" and "Å" are separate sections but fold to the same letter.
            index
                .titles()
                .iter()
                .filter(|t| fold_key(t) == folded)
                .filter_map(|t| index.bucket(t))
                .collect()
        }
    }
}
