//! Mapping of single glyphs onto the canonical alphabet.
//!
//! A glyph resolves in four steps:
//!
//! 1. Find the first family that holds it.
//! 2. Glyphs of an excluded family (emoji) contribute nothing.
//! 3. With zalgo marks stripped, a glyph that spells a canonical character
//!    resolves to that character. This also applies to glyphs no family holds,
//!    so any stack of marks over a canonical character resolves.
//! 4. Otherwise the glyph resolves to the canonical character on its slot.
//!    A glyph with no family has no slot and is excluded.

use crate::errors::NormalizeError;
use crate::glyph_registry::GlyphTableRegistry;
use crate::glyph_ty::Glyph;
use std::fmt;
use tracing::{trace, warn};

/// The outcome of normalizing one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalizedGlyph<'r> {
    /// The glyph stands for this canonical character.
    Canonical(&'r str),
    /// The glyph is dropped from canonical names.
    Excluded,
}

impl<'r> NormalizedGlyph<'r> {
    /// What this glyph contributes to a base name.
    pub fn base_fragment(self) -> &'r str {
        match self {
            NormalizedGlyph::Canonical(s) => s,
            NormalizedGlyph::Excluded => "",
        }
    }

    /// The canonical character, if there is one.
    pub fn canonical(self) -> Option<&'r str> {
        match self {
            NormalizedGlyph::Canonical(s) => Some(s),
            NormalizedGlyph::Excluded => None,
        }
    }

    /// Returns whether the glyph was dropped.
    pub fn is_excluded(self) -> bool {
        self == NormalizedGlyph::Excluded
    }
}

impl fmt::Display for NormalizedGlyph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_fragment())
    }
}

/// Maps glyphs to canonical characters against one registry.
#[derive(Debug, Clone, Copy)]
pub struct GlyphNormalizer<'r> {
    registry: &'r GlyphTableRegistry,
}

impl Default for GlyphNormalizer<'static> {
    fn default() -> Self {
        GlyphNormalizer::builtin()
    }
}

impl GlyphNormalizer<'static> {
    /// A normalizer over the embedded catalog.
    pub fn builtin() -> Self {
        GlyphNormalizer::new(GlyphTableRegistry::builtin())
    }
}

impl<'r> GlyphNormalizer<'r> {
    /// A normalizer over `registry`.
    pub fn new(registry: &'r GlyphTableRegistry) -> Self {
        GlyphNormalizer { registry }
    }

    /// The registry lookups go to.
    pub fn registry(&self) -> &'r GlyphTableRegistry {
        self.registry
    }

    /// Normalize one glyph. Never fails: input that is not a single glyph
    /// is excluded like any other glyph without a canonical form.
    pub fn normalize(&self, glyph: &str) -> NormalizedGlyph<'r> {
        match self.try_normalize(glyph) {
            Ok(normalized) => normalized,
            Err(err) => {
                warn!(%err, "glyph not normalized, excluding");
                NormalizedGlyph::Excluded
            }
        }
    }

    /// Normalize one glyph, reporting input that is not a single glyph.
    pub fn try_normalize(&self, glyph: &str) -> Result<NormalizedGlyph<'r>, NormalizeError> {
        let glyph = Glyph::from_grapheme_cluster(glyph).ok_or_else(|| {
            NormalizeError::MalformedGlyph {
                glyph: glyph.to_owned(),
            }
        })?;
        Ok(self.normalize_glyph(glyph))
    }

    /// Normalize one glyph known to be a single grapheme cluster.
    pub fn normalize_glyph(&self, glyph: Glyph<'_>) -> NormalizedGlyph<'r> {
        let registry = self.registry;
        let text = glyph.as_str();

        let family = registry.family_containing(text);
        if let Some(id) = family {
            if registry.family(id).is_excluded() {
                trace!(glyph = text, family = registry.family(id).name(), "excluded");
                return NormalizedGlyph::Excluded;
            }
        }

        let canonical = registry.canonical();
        if let Some(slot) = registry.canonical_slot(&glyph.undecorated()) {
            if let Some(ch) = canonical.get(slot) {
                return NormalizedGlyph::Canonical(ch);
            }
        }

        let family = match family {
            Some(id) => id,
            None => {
                trace!(glyph = text, "not in any family");
                return NormalizedGlyph::Excluded;
            }
        };
        let candidate = registry
            .slot_index(family, text)
            .and_then(|slot| canonical.get(slot));
        match candidate {
            Some(ch) if registry.canonical_slot(ch).is_some() => NormalizedGlyph::Canonical(ch),
            _ => {
                trace!(glyph = text, family = registry.family(family).name(), "no canonical slot");
                NormalizedGlyph::Excluded
            }
        }
    }
}
