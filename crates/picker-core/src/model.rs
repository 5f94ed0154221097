// crates/picker-core/src/model.rs
use serde::{Deserialize, Serialize};

/// Storage backend for the strings held by a [`Country`].
///
/// This abstraction allows hosts to swap how textual data is stored
/// (for example an interned or small-string type) without changing the
/// public API of accessors that return `&str` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and the associated
/// type must be serializable so catalogs can be snapshotted via bincode.
pub trait CatalogBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;

    fn str_from(s: &str) -> Self::Str;
}

/// Default backend: plain `String`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultBackend;

impl CatalogBackend for DefaultBackend {
    type Str = String;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }
}

/// Raw country record as it appears in a catalog file.
///
/// ```json
/// { "name": "Nigeria", "code": "NG", "phone_code": "+234" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryRaw {
    pub name: String,
    pub code: String,
    #[serde(default, alias = "dial_code", alias = "phoneCode")]
    pub phone_code: String,
    /// Optional asset reference for the flag image.
    #[serde(default)]
    pub flag: Option<String>,
}

/// A selectable country.
///
/// Two countries are equal when their ISO codes are equal; this is the
/// comparison used to mark the currently selected row.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Country<B: CatalogBackend> {
    pub name: B::Str,
    /// ISO 3166-1 alpha-2 code, e.g. "NG".
    pub code: B::Str,
    /// Dialing prefix including the leading `+`, e.g. "+234".
    pub phone_code: B::Str,
    pub flag: Option<B::Str>,
}

impl<B: CatalogBackend> Country<B> {
    pub fn new(name: &str, code: &str, phone_code: &str) -> Self {
        Self {
            name: B::str_from(name),
            code: B::str_from(code),
            phone_code: B::str_from(phone_code),
            flag: None,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn code(&self) -> &str {
        self.code.as_ref()
    }

    pub fn phone_code(&self) -> &str {
        self.phone_code.as_ref()
    }

    /// The flag asset reference, if the catalog provided one.
    pub fn flag(&self) -> Option<&str> {
        self.flag.as_ref().map(|s| s.as_ref())
    }

    /// Regional-indicator emoji for the ISO code ("NG" -> 🇳🇬).
    ///
    /// Returns `None` when the code is not two ASCII letters.
    pub fn flag_emoji(&self) -> Option<String> {
        let code = self.code();
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }
        code.bytes()
            .map(|b| char::from_u32(0x1F1E6 + u32::from(b.to_ascii_uppercase() - b'A')))
            .collect()
    }

    /// Label shown in a list row: `"Nigeria"` or `"Nigeria (+234)"`.
    pub fn display_name(&self, show_phone_code: bool) -> String {
        if show_phone_code {
            format!("{} ({})", self.name(), self.phone_code())
        } else {
            self.name().to_string()
        }
    }
}

impl<B: CatalogBackend> PartialEq for Country<B> {
    fn eq(&self, other: &Self) -> bool {
        self.code.as_ref() == other.code.as_ref()
    }
}

impl<B: CatalogBackend> Eq for Country<B> {}

impl<B: CatalogBackend> From<CountryRaw> for Country<B> {
    fn from(raw: CountryRaw) -> Self {
        Country {
            name: B::str_from(raw.name.trim()),
            code: B::str_from(&raw.code.trim().to_ascii_uppercase()),
            phone_code: B::str_from(raw.phone_code.trim()),
            flag: raw.flag.as_deref().map(B::str_from),
        }
    }
}

/// Convenient alias for the default backend.
pub type DefaultCountry = Country<DefaultBackend>;
