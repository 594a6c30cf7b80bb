#![deny(unsafe_op_in_unsafe_fn)]
#![deny(warnings, missing_docs, missing_debug_implementations)]
//! Display names and canonical names for Canto namespaces.
//!
//! A namespace is a handle spelled with decorative glyphs: script and fraktur
//! letters, squared blocks, zalgo stacks, emoji. This crate keeps the glyphs
//! as a display name and derives an ASCII base name such as `teewhy.canto`.
//!
//! The `Glyph` type is one extended grapheme cluster, as defined in UAX-29.
//!
//! Glyphs are grouped into families by a `FamilyCatalog`. One family is the
//! canonical alphabet (`a`..`z`, `0`..`9`). Decorative families are aligned to
//! it slot by slot. Excluded families (emoji) are never spelled out in a base name.
//! The catalog this crate ships is embedded and versioned; changing it changes the
//! base name of existing namespaces.
//!
//! `GlyphNormalizer` maps one glyph to its canonical character, and
//! `NamespaceNameBuilder` maps a whole namespace to a `NameSpaceRecord`.
//!
//! # Rules for canonical names
//!
//! * The display name is the glyphs joined, unmodified.
//! * Each glyph in an excluded family contributes nothing.
//! * Each glyph carrying combining diacritical marks (U+0300..U+036F) over a
//!   canonical character contributes that character.
//! * Each other glyph contributes the canonical character on its slot, or nothing
//!   if it belongs to no family.
//! * Input that is not a single glyph contributes nothing.
//! * The suffix `.canto` follows, unless the namespace has no glyphs at all.
//!
//! ```
//! use cns_name::NamespaceNameBuilder;
//!
//! let record = NamespaceNameBuilder::builtin().build(["0", "x", "\u{1D4C9}", "\u{1D452}"]);
//! assert_eq!(record.display_name, "0x\u{1D4C9}\u{1D452}");
//! assert_eq!(record.base_name, "0xte.canto");
//! ```

pub(crate) mod tables;

pub(crate) mod errors;

pub(crate) mod glyph_ty;

pub(crate) mod glyph_family;

pub(crate) mod glyph_registry;

pub(crate) mod normalizer;

pub(crate) mod namespace;

pub(crate) mod config;

pub use errors::{CatalogError, NormalizeError, ResolveError};

pub use glyph_ty::{split_glyphs, Glyph, GlyphVec, DECORATION_MARKS};

pub use glyph_family::{FamilyCatalog, FamilyKind, GlyphFamily};

pub use glyph_registry::{FamilyId, GlyphTableRegistry};

pub use normalizer::{GlyphNormalizer, NormalizedGlyph};

pub use namespace::{NameSpaceRecord, NamespaceId, NamespaceNameBuilder, NamespaceSource, CANTO_SUFFIX};

pub use config::{CatalogConfig, FamilyConfig};

/// Version of the embedded glyph catalog.
pub const CATALOG_VERSION: u32 = tables::CATALOG_VERSION;

/// Normalize one glyph against the embedded catalog.
pub fn normalize(glyph: &str) -> NormalizedGlyph<'static> {
    GlyphNormalizer::builtin().normalize(glyph)
}

/// Build the record of a namespace against the embedded catalog.
pub fn build_namespace<I, S>(glyphs: I) -> NameSpaceRecord
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    NamespaceNameBuilder::builtin().build(glyphs)
}
