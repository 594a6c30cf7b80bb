//! Catalogs as data.
//!
//! A catalog description is a TOML document:
//!
//! ```toml
//! version = 1
//!
//! [[family]]
//! name = "normal"
//! kind = "canonical"
//! glyphs = ["a", "b"]
//!
//! [[family]]
//! name = "wide"
//! kind = "decorative"
//! glyphs = ["ａ", "ｂ"]
//! ```
//!
//! Families are listed in lookup priority order.

use crate::errors::{CatalogError, Result};
use crate::glyph_family::{FamilyCatalog, FamilyKind, GlyphFamily};
use crate::tables::CATALOG_VERSION;
use serde::{Deserialize, Serialize};

/// Serializable description of a `FamilyCatalog`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Table format version; must equal the embedded catalog version.
    pub version: u32,
    /// Families in lookup priority order.
    #[serde(rename = "family", default)]
    pub families: Vec<FamilyConfig>,
}

/// Serializable description of a `GlyphFamily`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyConfig {
    /// Family name, unique within the catalog.
    pub name: String,
    /// Role of the family.
    pub kind: FamilyKind,
    /// Glyphs in slot order.
    pub glyphs: Vec<String>,
}

impl CatalogConfig {
    /// Parse a TOML catalog description. Does not validate the families.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Write this description as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Validate this description and build the catalog it describes.
    pub fn into_catalog(self) -> Result<FamilyCatalog> {
        if self.version != CATALOG_VERSION {
            return Err(CatalogError::UnsupportedVersion {
                expected: CATALOG_VERSION,
                found: self.version,
            });
        }
        FamilyCatalog::new(
            self.families
                .into_iter()
                .map(|family| GlyphFamily::new(family.name, family.kind, family.glyphs))
                .collect(),
        )
    }
}

impl From<&FamilyCatalog> for CatalogConfig {
    fn from(catalog: &FamilyCatalog) -> Self {
        CatalogConfig {
            version: CATALOG_VERSION,
            families: catalog
                .families()
                .iter()
                .map(|family| FamilyConfig {
                    name: family.name().to_owned(),
                    kind: family.kind(),
                    glyphs: family.glyphs().to_vec(),
                })
                .collect(),
        }
    }
}

impl FamilyCatalog {
    /// Parse and validate a TOML catalog description.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        CatalogConfig::from_toml_str(s)?.into_catalog()
    }

    /// Describe this catalog as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        CatalogConfig::from(self).to_toml_string()
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogConfig;
    use crate::errors::CatalogError;
    use crate::glyph_family::{FamilyCatalog, FamilyKind};
    use crate::glyph_registry::GlyphTableRegistry;
    use crate::normalizer::{GlyphNormalizer, NormalizedGlyph};

    const WIDE: &str = r#"
version = 1

[[family]]
name = "normal"
kind = "canonical"
glyphs = ["a", "b"]

[[family]]
name = "wide"
kind = "decorative"
glyphs = ["ａ", "ｂ"]

[[family]]
name = "faces"
kind = "excluded"
glyphs = ["🙂"]
"#;

    #[test]
    fn test_load_catalog() {
        let catalog = FamilyCatalog::from_toml_str(WIDE).unwrap();
        assert_eq!(3, catalog.families().len());
        assert_eq!(FamilyKind::Excluded, catalog.family("faces").unwrap().kind());

        let registry = GlyphTableRegistry::new(catalog);
        let normalizer = GlyphNormalizer::new(&registry);
        assert_eq!(NormalizedGlyph::Canonical("b"), normalizer.normalize("\u{FF42}"));
        assert_eq!(NormalizedGlyph::Excluded, normalizer.normalize("\u{1F642}"));
    }

    #[test]
    fn test_unsupported_version() {
        let doc = WIDE.replace("version = 1", "version = 2");
        assert!(matches!(
            FamilyCatalog::from_toml_str(&doc),
            Err(CatalogError::UnsupportedVersion {
                expected: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            FamilyCatalog::from_toml_str("version = \"one\""),
            Err(CatalogError::Parse(_))
        ));
        let doc = WIDE.replace("\"decorative\"", "\"fancy\"");
        assert!(matches!(
            CatalogConfig::from_toml_str(&doc),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_description_is_rejected() {
        let doc = WIDE.replace("[\"ａ\", \"ｂ\"]", "[\"ａ\"]");
        assert!(matches!(
            FamilyCatalog::from_toml_str(&doc),
            Err(CatalogError::SlotCountMismatch { .. })
        ));
    }

    #[test]
    fn test_builtin_export() {
        let builtin = FamilyCatalog::builtin().unwrap();
        let exported = builtin.to_toml_string().unwrap();
        assert!(exported.contains("name = \"squiggle\""));
        assert!(exported.contains("kind = \"excluded\""));
        assert_eq!(builtin, FamilyCatalog::from_toml_str(&exported).unwrap());
    }
}
