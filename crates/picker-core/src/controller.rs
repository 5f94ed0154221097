// crates/picker-core/src/controller.rs

//! # Picker Controller
//!
//! A framework-neutral list data source. A rendering adapter (table view,
//! TUI list, web component) asks it for section counts, row content and
//! fast-scroll titles, forwards keystrokes to [`PickerController::update_search`]
//! and taps to [`PickerController::select`]. The adapter holds no logic of
//! its own.

use crate::catalog::Catalog;
use crate::config::PickerConfig;
use crate::error::{PickerError, Result};
use crate::index::SectionIndex;
use crate::model::{CatalogBackend, Country};
use crate::search::SearchState;
use crate::selection::{is_selected, select_country, SelectionHandler};

/// What a list row displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellContent {
    pub title: String,
    /// Flag asset reference, or the emoji flag when the catalog has none.
    pub flag: Option<String>,
    /// The row holds the host's currently selected country.
    pub checked: bool,
}

#[derive(Debug, Clone)]
pub struct PickerController<B: CatalogBackend> {
    config: PickerConfig,
    index: SectionIndex<B>,
    search: SearchState<B>,
}

impl<B: CatalogBackend> PickerController<B> {
    /// Builds the index from `catalog`, resolving `config.preferred_codes`.
    ///
    /// Fails with [`PickerError::UnknownCountryCode`] if a preferred code is
    /// not in the catalog.
    pub fn new(catalog: &Catalog<B>, config: PickerConfig) -> Result<Self> {
        let preferred = catalog.resolve_codes(&config.preferred_codes)?;
        Ok(Self::with_preferred(catalog, preferred, config))
    }

    /// Builds the index with an explicit preferred list; `preferred_codes`
    /// in `config` is ignored.
    pub fn with_preferred(
        catalog: &Catalog<B>,
        preferred: Vec<Country<B>>,
        config: PickerConfig,
    ) -> Self {
        let index = SectionIndex::build(
            catalog.countries(),
            &preferred,
            config.preferred_title(),
            config.show_only_preferred,
        );
        Self {
            config,
            index,
            search: SearchState::default(),
        }
    }

    /// Rebuilds after the catalog or configuration changed. Search state is
    /// cleared; fast-scroll titles rendered before the reload may now fail
    /// to resolve.
    pub fn reload(&mut self, catalog: &Catalog<B>, config: PickerConfig) -> Result<()> {
        *self = Self::new(catalog, config)?;
        Ok(())
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn index(&self) -> &SectionIndex<B> {
        &self.index
    }

    pub fn is_search_mode(&self) -> bool {
        self.search.is_search_mode
    }

    pub fn search_results(&self) -> &[Country<B>] {
        &self.search.results
    }

    /// Recomputes the search for the current text of the search bar.
    pub fn update_search(&mut self, query: &str) {
        if !self.config.search_enabled {
            self.search.reset();
            return;
        }
        self.search.update(
            query,
            &self.index,
            self.config.show_only_preferred,
            self.config.search_case,
        );
    }

    pub fn cancel_search(&mut self) {
        self.search.reset();
    }

    // -----------------------------------------------------------------------
    // DATA SOURCE
    // -----------------------------------------------------------------------

    /// One flat section while searching, otherwise one per index title.
    pub fn number_of_sections(&self) -> usize {
        if self.search.is_search_mode {
            1
        } else {
            self.index.section_count()
        }
    }

    pub fn number_of_rows(&self, section: usize) -> Result<usize> {
        if self.search.is_search_mode {
            if section != 0 {
                return Err(PickerError::SectionOutOfRange(section));
            }
            return Ok(self.search.results.len());
        }
        self.index.row_count(section)
    }

    pub fn country_for_row(&self, section: usize, row: usize) -> Result<&Country<B>> {
        if self.search.is_search_mode {
            if section != 0 {
                return Err(PickerError::IndexOutOfRange { section, row });
            }
            return self
                .search
                .results
                .get(row)
                .ok_or(PickerError::IndexOutOfRange { section, row });
        }
        self.index.country_at(section, row)
    }

    /// Row content; `selected` is the host's currently selected country.
    pub fn cell(
        &self,
        section: usize,
        row: usize,
        selected: Option<&Country<B>>,
    ) -> Result<CellContent> {
        let country = self.country_for_row(section, row)?;
        Ok(CellContent {
            title: country.display_name(self.config.show_phone_code),
            flag: country
                .flag()
                .map(str::to_string)
                .or_else(|| country.flag_emoji()),
            checked: is_selected(country, selected),
        })
    }

    /// Section header; there are no headers while searching.
    pub fn title_for_header(&self, section: usize) -> Result<Option<&str>> {
        if self.search.is_search_mode {
            return Ok(None);
        }
        self.index.title_at(section).map(Some)
    }

    /// Fast-scroll strip titles; hidden while searching.
    pub fn section_index_titles(&self) -> Option<&[String]> {
        if self.search.is_search_mode {
            None
        } else {
            Some(self.index.section_index_titles())
        }
    }

    pub fn section_for_index_title(&self, title: &str) -> Result<usize> {
        self.index.section_for_title(title)
    }

    /// Resolves the tapped row, ends the search and notifies `handler`.
    ///
    /// Returns the selected country so the host can update its own
    /// "currently selected" state.
    pub fn select<H>(&mut self, section: usize, row: usize, handler: &mut H) -> Result<Country<B>>
    where
        H: SelectionHandler<B> + ?Sized,
    {
        let country = self.country_for_row(section, row)?.clone();
        self.search.reset();
        select_country(handler, &country);
        Ok(country)
    }
}
