// crates/picker-core/src/index.rs

//! # Section Index
//!
//! Groups a flat catalog into sections keyed by the uppercased first letter
//! of each country name, and optionally prepends a "preferred" section.
//!
//! The bucket map is unordered; the display order lives in a separately
//! maintained title list so the preferred title can sit in front of the
//! alphabetical ones.

use crate::error::{PickerError, Result};
use crate::model::{CatalogBackend, Country};
use crate::text::section_key;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionIndex<B: CatalogBackend> {
    titles: Vec<String>,
    buckets: HashMap<String, Vec<Country<B>>>,
    preferred_title: Option<String>,
}

impl<B: CatalogBackend> Default for SectionIndex<B> {
    fn default() -> Self {
        Self {
            titles: Vec::new(),
            buckets: HashMap::new(),
            preferred_title: None,
        }
    }
}

impl<B: CatalogBackend> SectionIndex<B> {
    /// Builds the index.
    ///
    /// * `catalog` - every selectable country, in any order.
    /// * `preferred` - countries for the preferred section, kept verbatim.
    /// * `preferred_title` - title of the preferred section.
    /// * `show_only_preferred` - skip the alphabetical sections entirely.
    ///
    /// The preferred section only exists when both `preferred` and
    /// `preferred_title` are non-empty. It is always section 0 and replaces
    /// any alphabetical section carrying the same title.
    pub fn build(
        catalog: &[Country<B>],
        preferred: &[Country<B>],
        preferred_title: Option<&str>,
        show_only_preferred: bool,
    ) -> Self {
        let mut index = Self::default();

        if !show_only_preferred {
            let mut header = BTreeSet::new();
            for country in catalog {
                let key = section_key(country.name());
                header.insert(key.clone());
                index.buckets.entry(key).or_default().push(country.clone());
            }
            for bucket in index.buckets.values_mut() {
                bucket.sort_by(|a, b| a.name().cmp(b.name()));
            }
            index.titles = header.into_iter().collect();
        }

        if let Some(title) = preferred_title.filter(|t| !t.is_empty()) {
            if !preferred.is_empty() {
                index.titles.retain(|t| t != title);
                index.titles.insert(0, title.to_string());
                index.buckets.insert(title.to_string(), preferred.to_vec());
                index.preferred_title = Some(title.to_string());
            }
        }

        debug!(
            sections = index.titles.len(),
            countries = catalog.len(),
            preferred = preferred.len(),
            show_only_preferred,
            "built section index"
        );
        index
    }

    /// Number of sections, preferred included.
    pub fn section_count(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// All section titles in display order.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn title_at(&self, section: usize) -> Result<&str> {
        self.titles
            .get(section)
            .map(String::as_str)
            .ok_or(PickerError::SectionOutOfRange(section))
    }

    /// The countries of a section, looked up by title.
    pub fn bucket(&self, title: &str) -> Option<&[Country<B>]> {
        self.buckets.get(title).map(Vec::as_slice)
    }

    pub fn section(&self, section: usize) -> Result<&[Country<B>]> {
        let title = self.title_at(section)?;
        Ok(self.bucket(title).unwrap_or_default())
    }

    pub fn row_count(&self, section: usize) -> Result<usize> {
        self.section(section).map(<[_]>::len)
    }

    pub fn country_at(&self, section: usize, row: usize) -> Result<&Country<B>> {
        self.section(section)
            .map_err(|_| PickerError::IndexOutOfRange { section, row })?
            .get(row)
            .ok_or(PickerError::IndexOutOfRange { section, row })
    }

    pub fn has_preferred_section(&self) -> bool {
        self.preferred_title.is_some()
    }

    pub fn preferred_title(&self) -> Option<&str> {
        self.preferred_title.as_deref()
    }

    /// Titles for the fast-scroll strip: every title except the preferred one.
    pub fn section_index_titles(&self) -> &[String] {
        if self.has_preferred_section() {
            &self.titles[1..]
        } else {
            &self.titles
        }
    }

    /// Resolves a fast-scroll title to its section number.
    ///
    /// A title that is not part of the current index (e.g. a strip rendered
    /// before a reload) yields [`PickerError::TitleNotFound`].
    pub fn section_for_title(&self, title: &str) -> Result<usize> {
        self.titles
            .iter()
            .position(|t| t == title)
            .ok_or_else(|| PickerError::TitleNotFound(title.to_string()))
    }

    /// Every row in display order, as `(section, row, country)`.
    pub fn rows(&self) -> impl Iterator<Item = (usize, usize, &Country<B>)> + '_ {
        self.titles.iter().enumerate().flat_map(move |(s, title)| {
            self.buckets
                .get(title)
                .into_iter()
                .flatten()
                .enumerate()
                .map(move |(r, c)| (s, r, c))
        })
    }
}
