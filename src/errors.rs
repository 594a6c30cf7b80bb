//! Error types for catalog construction, glyph normalization and namespace resolution.

use thiserror::Error;

use crate::namespace::NamespaceId;

/// A glyph catalog that cannot be used for normalization.
///
/// These are configuration errors. They surface once, when a catalog is built,
/// and never from a per-glyph lookup.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No family is tagged as the canonical alphabet.
    #[error("catalog has no canonical family")]
    MissingCanonical,

    /// More than one family is tagged as the canonical alphabet.
    #[error("catalog has more than one canonical family: {first} and {second}")]
    DuplicateCanonical {
        /// The canonical family seen first.
        first: String,
        /// The canonical family seen second.
        second: String,
    },

    /// Two families share a name.
    #[error("duplicate family name: {family}")]
    DuplicateFamily {
        /// The repeated name.
        family: String,
    },

    /// An aligned family does not have one slot per canonical character.
    #[error("family {family} has {found} slots, canonical family has {expected}")]
    SlotCountMismatch {
        /// The misaligned family.
        family: String,
        /// Slot count of the canonical family.
        expected: usize,
        /// Slot count of the misaligned family.
        found: usize,
    },

    /// An entry that is empty or spans more than one grapheme cluster.
    #[error("family {family} slot {slot}: {glyph:?} is not a single grapheme cluster")]
    MalformedGlyph {
        /// Family holding the entry.
        family: String,
        /// Position of the entry.
        slot: usize,
        /// The offending entry.
        glyph: String,
    },

    /// An entry that changes under NFC normalization.
    #[error("family {family} slot {slot}: {glyph:?} is not in NFC form")]
    NotNfc {
        /// Family holding the entry.
        family: String,
        /// Position of the entry.
        slot: usize,
        /// The offending entry.
        glyph: String,
    },

    /// The same glyph would map to two different canonical characters,
    /// or is both excluded and mapped.
    #[error("glyph {glyph:?} appears in {first} slot {first_slot} and in {second} slot {second_slot}")]
    ConflictingGlyph {
        /// The shared glyph.
        glyph: String,
        /// Family where the glyph was seen first.
        first: String,
        /// Slot in the first family.
        first_slot: usize,
        /// Family where the glyph was seen again.
        second: String,
        /// Slot in the second family.
        second_slot: usize,
    },

    /// A catalog description written for another table version.
    #[error("unsupported catalog version {found}, expected {expected}")]
    UnsupportedVersion {
        /// The version this crate understands.
        expected: u32,
        /// The version found in the description.
        found: u32,
    },

    /// The catalog description could not be parsed.
    #[error("catalog parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The catalog could not be written out.
    #[error("catalog serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result alias for catalog construction.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// A glyph the normalizer could not interpret at all.
///
/// `GlyphNormalizer::normalize` excludes such input; the error only
/// reaches callers of `GlyphNormalizer::try_normalize`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The input is empty or holds more than one grapheme cluster.
    #[error("{glyph:?} is not a single glyph")]
    MalformedGlyph {
        /// The rejected input.
        glyph: String,
    },
}

/// Failure to fetch the characters of a namespace from its source.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The namespace source failed.
    #[error("failed to get namespace characters for {id}")]
    Source {
        /// The namespace that was requested.
        id: NamespaceId,
        /// The underlying source error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}
