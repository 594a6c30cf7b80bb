//! Display and base names for a namespace.
//!
//! A namespace is the ordered list of glyphs a user picked. Its display name
//! is those glyphs joined verbatim. Its base name spells each glyph in the
//! canonical alphabet, drops glyphs that have no canonical form, and appends
//! [`CANTO_SUFFIX`].

use crate::errors::ResolveError;
use crate::glyph_ty::split_glyphs;
use crate::normalizer::GlyphNormalizer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use tracing::debug;

/// Suffix of every non-empty base name.
pub const CANTO_SUFFIX: &str = ".canto";

/// The two renderings of a namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameSpaceRecord {
    /// The glyphs as chosen, joined.
    pub display_name: String,
    /// The canonical name, suffix included.
    pub base_name: String,
}

impl NameSpaceRecord {
    /// Returns whether the namespace had no glyphs at all.
    pub fn is_empty(&self) -> bool {
        self.display_name.is_empty() && self.base_name.is_empty()
    }

    /// The base name without [`CANTO_SUFFIX`].
    pub fn handle(&self) -> &str {
        self.base_name
            .strip_suffix(CANTO_SUFFIX)
            .unwrap_or(&self.base_name)
    }
}

/// On-chain identifier of a namespace token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NamespaceId(pub u128);

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for NamespaceId {
    fn from(id: u128) -> Self {
        NamespaceId(id)
    }
}

/// Supplies the raw glyphs of a namespace, typically from a registry contract.
pub trait NamespaceSource {
    /// Failure to reach or read the registry.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The glyphs registered for `id`, in order.
    /// An unregistered namespace has no glyphs.
    fn namespace_characters(&self, id: NamespaceId) -> Result<Vec<String>, Self::Error>;
}

impl NamespaceSource for HashMap<NamespaceId, Vec<String>> {
    type Error = Infallible;

    fn namespace_characters(&self, id: NamespaceId) -> Result<Vec<String>, Self::Error> {
        Ok(self.get(&id).cloned().unwrap_or_default())
    }
}

/// Turns glyph sequences into `NameSpaceRecord`s.
#[derive(Debug, Clone, Copy)]
pub struct NamespaceNameBuilder<'r> {
    normalizer: GlyphNormalizer<'r>,
}

impl Default for NamespaceNameBuilder<'static> {
    fn default() -> Self {
        NamespaceNameBuilder::builtin()
    }
}

impl NamespaceNameBuilder<'static> {
    /// A builder over the embedded catalog.
    pub fn builtin() -> Self {
        NamespaceNameBuilder::new(GlyphNormalizer::builtin())
    }
}

impl<'r> NamespaceNameBuilder<'r> {
    /// A builder normalizing with `normalizer`.
    pub fn new(normalizer: GlyphNormalizer<'r>) -> Self {
        NamespaceNameBuilder { normalizer }
    }

    /// The normalizer in use.
    pub fn normalizer(&self) -> GlyphNormalizer<'r> {
        self.normalizer
    }

    /// Build the record for `glyphs`, in order.
    ///
    /// An empty sequence gives an empty record, with no suffix either. Glyphs
    /// without a canonical form add nothing to the base name, so a namespace
    /// of emoji only has the base name `.canto`.
    pub fn build<I, S>(&self, glyphs: I) -> NameSpaceRecord
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut display_name = String::new();
        let mut base_name = String::new();
        let mut count = 0usize;
        for glyph in glyphs {
            let glyph = glyph.as_ref();
            display_name.push_str(glyph);
            base_name.push_str(self.normalizer.normalize(glyph).base_fragment());
            count += 1;
        }
        if count == 0 {
            return NameSpaceRecord::default();
        }
        base_name.push_str(CANTO_SUFFIX);
        NameSpaceRecord {
            display_name,
            base_name,
        }
    }

    /// Build the record for a display name given as one string,
    /// splitting it into grapheme clusters first.
    pub fn build_from_display(&self, display: &str) -> NameSpaceRecord {
        self.build(split_glyphs(display))
    }

    /// Fetch the glyphs of `id` from `source` and build its record.
    pub fn resolve<S>(&self, source: &S, id: NamespaceId) -> Result<NameSpaceRecord, ResolveError>
    where
        S: NamespaceSource + ?Sized,
    {
        let glyphs = source
            .namespace_characters(id)
            .map_err(|err| ResolveError::Source {
                id,
                source: Box::new(err),
            })?;
        let record = self.build(&glyphs);
        debug!(
            %id,
            glyphs = glyphs.len(),
            base_name = %record.base_name,
            "namespace resolved"
        );
        Ok(record)
    }
}
