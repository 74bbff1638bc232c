//! Canonical icon identity resolution.
//!
//! Overlay texture keys and input-item icons may be written unqualified
//! ("hammerHead") or fully qualified ("core:hammerHead"), in any case.
//! Matching between the two requires a canonical form.

use bevy::prelude::*;

/// Fully qualified, case-normalized icon identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalIconId(String);

impl CanonicalIconId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Resolves raw icon identifiers to their canonical form.
///
/// Unqualified names are qualified with the default namespace; comparison is
/// case-insensitive.
#[derive(Resource, Debug, Clone)]
pub struct IconCatalog {
    pub default_namespace: String,
}

impl Default for IconCatalog {
    fn default() -> Self {
        Self {
            default_namespace: "core".to_string(),
        }
    }
}

impl IconCatalog {
    pub fn resolve(&self, raw: &str) -> CanonicalIconId {
        let qualified = if raw.contains(':') {
            raw.to_string()
        } else {
            format!("{}:{}", self.default_namespace, raw)
        };

        CanonicalIconId(qualified.to_ascii_lowercase())
    }
}
