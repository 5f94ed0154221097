// crates/picker-core/src/catalog.rs

//! # Country Catalog
//!
//! The full set of selectable countries supplied by the host, plus the
//! physical layer for reading it (JSON, gzipped JSON, bincode snapshots).

use crate::error::{PickerError, Result};
use crate::model::{CatalogBackend, Country, CountryRaw, DefaultBackend};
use crate::text::equals_folded;
use bincode::Options;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, warn};

#[cfg(feature = "json")]
use once_cell::sync::OnceCell;

/// Upper bound for snapshot payloads, rejects corrupt length prefixes.
const SNAPSHOT_LIMIT: u64 = 16 * 1024 * 1024;

#[cfg(feature = "json")]
static BUNDLED: OnceCell<Catalog<DefaultBackend>> = OnceCell::new();

#[cfg(feature = "json")]
const BUNDLED_JSON: &str = include_str!("../data/countries.json");

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Catalog<B: CatalogBackend> {
    countries: Vec<Country<B>>,
}

impl<B: CatalogBackend> Default for Catalog<B> {
    fn default() -> Self {
        Self {
            countries: Vec::new(),
        }
    }
}

impl<B: CatalogBackend> FromIterator<Country<B>> for Catalog<B> {
    fn from_iter<I: IntoIterator<Item = Country<B>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<B: CatalogBackend> Catalog<B> {
    pub fn new(countries: Vec<Country<B>>) -> Self {
        Self { countries }
    }

    pub fn from_raw(raw: Vec<CountryRaw>) -> Self {
        raw.into_iter().map(Country::from).collect()
    }

    pub fn countries(&self) -> &[Country<B>] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Find a country by ISO2 code, case-insensitive (e.g. "NG", "ng").
    pub fn find_by_code(&self, code: &str) -> Option<&Country<B>> {
        let code = code.trim();
        self.countries
            .iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }

    /// All countries sharing a dialing prefix; the leading `+` is optional.
    pub fn find_by_phone_code(&self, phone_code: &str) -> Vec<&Country<B>> {
        let wanted = phone_code.trim().trim_start_matches('+');
        if wanted.is_empty() {
            return Vec::new();
        }
        self.countries
            .iter()
            .filter(|c| c.phone_code().trim_start_matches('+') == wanted)
            .collect()
    }

    /// Accent- and case-insensitive name lookup.
    pub fn find_by_name(&self, name: &str) -> Option<&Country<B>> {
        self.countries.iter().find(|c| equals_folded(c.name(), name))
    }

    /// Resolves ISO codes to countries, keeping the caller's order.
    pub fn resolve_codes<S: AsRef<str>>(&self, codes: &[S]) -> Result<Vec<Country<B>>> {
        codes
            .iter()
            .map(|code| {
                self.find_by_code(code.as_ref())
                    .cloned()
                    .ok_or_else(|| PickerError::UnknownCountryCode(code.as_ref().to_string()))
            })
            .collect()
    }

    /// Like [`Catalog::resolve_codes`], but skips unknown codes with a warning.
    pub fn resolve_codes_lossy<S: AsRef<str>>(&self, codes: &[S]) -> Vec<Country<B>> {
        codes
            .iter()
            .filter_map(|code| {
                let code: &str = code.as_ref();
                let found = self.find_by_code(code).cloned();
                if found.is_none() {
                    warn!(code, "preferred country code not in catalog");
                }
                found
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // SNAPSHOTS (bincode)
    // -----------------------------------------------------------------------

    fn snapshot_options() -> impl Options {
        bincode::DefaultOptions::new()
            .with_limit(SNAPSHOT_LIMIT)
            .allow_trailing_bytes()
    }

    /// Reconstructs a catalog from a bincode snapshot written by
    /// [`Catalog::save_as`] or [`Catalog::to_bytes`].
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(Self::snapshot_options().deserialize(data)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(Self::snapshot_options().serialize(self)?)
    }

    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        Self::snapshot_options().serialize_into(&mut writer, self)?;
        writer.flush()?;
        debug!(path = %path.display(), countries = self.len(), "wrote catalog snapshot");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // FILE LOADING
    // -----------------------------------------------------------------------

    /// Loads a catalog from disk.
    ///
    /// `.bin` files are bincode snapshots; anything else is parsed as a JSON
    /// array of [`CountryRaw`]. A `.gz` suffix is decompressed first (needs the
    /// `compact` feature).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = open_stream(path)?;

        let catalog = if is_snapshot(path) {
            let mut data = Vec::new();
            reader.read_to_end(&mut data)?;
            Self::from_bytes(&data)?
        } else {
            Self::from_json_reader(reader)?
        };

        debug!(path = %path.display(), countries = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    #[cfg(feature = "json")]
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: Vec<CountryRaw> = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(raw))
    }

    #[cfg(not(feature = "json"))]
    pub fn from_json_reader<R: Read>(_reader: R) -> Result<Self> {
        Err(PickerError::InvalidData(
            "JSON catalog requested but 'json' feature disabled".into(),
        ))
    }
}

impl Catalog<DefaultBackend> {
    /// The catalog embedded in the crate, parsed once per process.
    #[cfg(feature = "json")]
    pub fn bundled() -> Result<&'static Self> {
        BUNDLED.get_or_try_init(|| Self::from_json_reader(BUNDLED_JSON.as_bytes()))
    }
}

fn is_snapshot(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    name.trim_end_matches(".gz").ends_with(".bin")
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder for `.gz` paths.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        PickerError::NotFound(format!("Catalog not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    let gzipped = path.extension().is_some_and(|ext| ext == "gz");
    if !gzipped {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(PickerError::InvalidData(
            "Gzip catalog requested but 'compact' disabled".into(),
        ))
    }
}
