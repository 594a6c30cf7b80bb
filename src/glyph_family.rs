use crate::errors::{CatalogError, Result};
use crate::glyph_ty::Glyph;
use serde::{Deserialize, Serialize};
use std::collections::{hash_map::Entry, HashMap, HashSet};
use tracing::debug;

/// The role a family plays in canonicalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyKind {
    /// The reference alphabet canonical names are spelled in.
    Canonical,
    /// A stylized alphabet, slot-aligned to the canonical one.
    Decorative,
    /// Glyphs that never contribute to a canonical name. Not aligned.
    Excluded,
}

impl FamilyKind {
    /// Returns whether families of this kind share the canonical slot layout.
    pub fn is_aligned(self) -> bool {
        !matches!(self, FamilyKind::Excluded)
    }
}

/// One fixed alphabet of stylistically related glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphFamily {
    name: String,
    kind: FamilyKind,
    glyphs: Vec<String>,
}

impl GlyphFamily {
    /// Creates a family from its glyphs in slot order.
    pub fn new<I, S>(name: impl Into<String>, kind: FamilyKind, glyphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GlyphFamily {
            name: name.into(),
            kind,
            glyphs: glyphs.into_iter().map(Into::into).collect(),
        }
    }

    /// The family name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The family role.
    pub fn kind(&self) -> FamilyKind {
        self.kind
    }

    /// Returns whether glyphs of this family are dropped from canonical names.
    pub fn is_excluded(&self) -> bool {
        self.kind == FamilyKind::Excluded
    }

    /// The glyphs, in slot order.
    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns whether the family has no slots.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The glyph at `slot`.
    pub fn get(&self, slot: usize) -> Option<&str> {
        self.glyphs.get(slot).map(String::as_str)
    }

    /// The first slot holding exactly `glyph`.
    pub fn position(&self, glyph: &str) -> Option<usize> {
        self.glyphs.iter().position(|g| g == glyph)
    }

    /// Returns whether some slot holds exactly `glyph`.
    pub fn contains(&self, glyph: &str) -> bool {
        self.position(glyph).is_some()
    }
}

/// An ordered, validated list of glyph families.
///
/// Order is lookup priority: when a glyph belongs to several families
/// the earliest one owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyCatalog {
    families: Vec<GlyphFamily>,
    canonical: usize,
}

impl FamilyCatalog {
    /// Validate `families` and build a catalog from them.
    ///
    /// Exactly one family must be canonical. Every aligned family must have
    /// as many slots as the canonical one, every entry must be a single
    /// NFC grapheme cluster, and a glyph may not stand for two different slots.
    pub fn new(families: Vec<GlyphFamily>) -> Result<Self> {
        let mut canonical: Option<usize> = None;
        let mut names = HashSet::new();
        for (idx, family) in families.iter().enumerate() {
            if !names.insert(family.name.as_str()) {
                return Err(CatalogError::DuplicateFamily {
                    family: family.name.clone(),
                });
            }
            if family.kind == FamilyKind::Canonical {
                if let Some(first) = canonical {
                    return Err(CatalogError::DuplicateCanonical {
                        first: families[first].name.clone(),
                        second: family.name.clone(),
                    });
                }
                canonical = Some(idx);
            }
        }
        let canonical = canonical.ok_or(CatalogError::MissingCanonical)?;
        let expected = families[canonical].len();

        let mut owners: HashMap<&str, (usize, usize)> = HashMap::new();
        for (family_idx, family) in families.iter().enumerate() {
            if family.kind.is_aligned() && family.len() != expected {
                return Err(CatalogError::SlotCountMismatch {
                    family: family.name.clone(),
                    expected,
                    found: family.len(),
                });
            }
            for (slot, glyph) in family.glyphs.iter().enumerate() {
                check_entry(family, slot, glyph)?;
                match owners.entry(glyph.as_str()) {
                    Entry::Vacant(entry) => {
                        entry.insert((family_idx, slot));
                    }
                    Entry::Occupied(entry) => {
                        let (first_idx, first_slot) = *entry.get();
                        let first = &families[first_idx];
                        let compatible =
                            match (first.kind.is_aligned(), family.kind.is_aligned()) {
                                (true, true) => first_slot == slot,
                                (false, false) => true,
                                _ => false,
                            };
                        if !compatible {
                            return Err(CatalogError::ConflictingGlyph {
                                glyph: glyph.clone(),
                                first: first.name.clone(),
                                first_slot,
                                second: family.name.clone(),
                                second_slot: slot,
                            });
                        }
                    }
                }
            }
        }

        debug!(
            families = families.len(),
            slots = expected,
            glyphs = owners.len(),
            "glyph catalog validated"
        );
        Ok(FamilyCatalog {
            families,
            canonical,
        })
    }

    /// The embedded catalog every canonical name is computed against.
    pub fn builtin() -> Result<Self> {
        use crate::tables::FAMILIES;

        FamilyCatalog::new(
            FAMILIES
                .iter()
                .map(|&(name, kind, glyphs)| GlyphFamily::new(name, kind, glyphs.iter().copied()))
                .collect(),
        )
    }

    /// All families, in lookup priority order.
    pub fn families(&self) -> &[GlyphFamily] {
        &self.families
    }

    /// The canonical family.
    pub fn canonical(&self) -> &GlyphFamily {
        &self.families[self.canonical]
    }

    /// Position of the canonical family in lookup order.
    pub(crate) fn canonical_index(&self) -> usize {
        self.canonical
    }

    /// Look a family up by name.
    pub fn family(&self, name: &str) -> Option<&GlyphFamily> {
        self.families.iter().find(|family| family.name == name)
    }
}

fn check_entry(family: &GlyphFamily, slot: usize, glyph: &str) -> Result<()> {
    if Glyph::from_grapheme_cluster(glyph).is_none() {
        return Err(CatalogError::MalformedGlyph {
            family: family.name.clone(),
            slot,
            glyph: glyph.to_owned(),
        });
    }
    if !unicode_normalization::is_nfc(glyph) {
        return Err(CatalogError::NotNfc {
            family: family.name.clone(),
            slot,
            glyph: glyph.to_owned(),
        });
    }
    Ok(())
}
