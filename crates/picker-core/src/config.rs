// crates/picker-core/src/config.rs
use crate::text::CaseMode;
use serde::{Deserialize, Serialize};

/// Host configuration for one picker screen.
///
/// Passed explicitly to [`crate::PickerController`]; the core never reaches
/// back into host state. Every field has a default, so a partial JSON
/// document such as `{ "preferred_codes": ["NG"] }` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Title of the preferred section; `None` or empty disables the section.
    pub preferred_title: Option<String>,
    /// ISO codes of the preferred countries, in display order.
    pub preferred_codes: Vec<String>,
    /// Show (and search) only the preferred section.
    pub show_only_preferred: bool,
    /// Append the dialing code to row labels: "Nigeria (+234)".
    pub show_phone_code: bool,
    pub search_case: CaseMode,
    /// When false the host shows no search bar and queries are ignored.
    pub search_enabled: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            preferred_title: None,
            preferred_codes: Vec::new(),
            show_only_preferred: false,
            show_phone_code: false,
            search_case: CaseMode::Exact,
            search_enabled: true,
        }
    }
}

impl PickerConfig {
    pub fn with_preferred<S: Into<String>>(mut self, title: S, codes: &[&str]) -> Self {
        self.preferred_title = Some(title.into());
        self.preferred_codes = codes.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn show_only_preferred(mut self, value: bool) -> Self {
        self.show_only_preferred = value;
        self
    }

    pub fn show_phone_code(mut self, value: bool) -> Self {
        self.show_phone_code = value;
        self
    }

    pub fn search_case(mut self, mode: CaseMode) -> Self {
        self.search_case = mode;
        self
    }

    /// Title of the preferred section if it is configured and non-empty.
    pub fn preferred_title(&self) -> Option<&str> {
        self.preferred_title.as_deref().filter(|t| !t.is_empty())
    }

    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
