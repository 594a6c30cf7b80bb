use crate::glyph_family::{FamilyCatalog, GlyphFamily};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Identifies a family within the registry that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FamilyId(usize);

impl FamilyId {
    /// Position of the family in lookup order.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
struct SlotRef {
    family: FamilyId,
    slot: usize,
}

/// Read-only lookups over a validated `FamilyCatalog`.
///
/// Membership is answered from a `glyph -> (family, slot)` index built once,
/// where the earliest family in lookup order owns a glyph it shares with later ones.
#[derive(Debug)]
pub struct GlyphTableRegistry {
    catalog: FamilyCatalog,
    index: HashMap<String, SlotRef>,
}

static BUILTIN_REGISTRY: Lazy<GlyphTableRegistry> = Lazy::new(|| {
    let catalog = FamilyCatalog::builtin()
        .unwrap_or_else(|err| panic!("embedded glyph catalog is invalid: {}", err));
    GlyphTableRegistry::new(catalog)
});

impl GlyphTableRegistry {
    /// Index `catalog` for lookups.
    pub fn new(catalog: FamilyCatalog) -> Self {
        let mut index = HashMap::new();
        for (family_idx, family) in catalog.families().iter().enumerate() {
            for (slot, glyph) in family.glyphs().iter().enumerate() {
                index.entry(glyph.clone()).or_insert(SlotRef {
                    family: FamilyId(family_idx),
                    slot,
                });
            }
        }
        GlyphTableRegistry { catalog, index }
    }

    /// The registry over the embedded catalog, shared by the whole process.
    ///
    /// # Panics
    ///
    /// Panics on first use if the embedded tables fail validation.
    pub fn builtin() -> &'static GlyphTableRegistry {
        &BUILTIN_REGISTRY
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &FamilyCatalog {
        &self.catalog
    }

    /// The family `id` refers to.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a registry with fewer families.
    pub fn family(&self, id: FamilyId) -> &GlyphFamily {
        &self.catalog.families()[id.0]
    }

    /// The canonical family.
    pub fn canonical(&self) -> &GlyphFamily {
        self.catalog.canonical()
    }

    /// The id of the canonical family.
    pub fn canonical_id(&self) -> FamilyId {
        FamilyId(self.catalog.canonical_index())
    }

    /// The first family, in lookup order, with a slot holding exactly `glyph`.
    pub fn family_containing(&self, glyph: &str) -> Option<FamilyId> {
        self.index.get(glyph).map(|slot_ref| slot_ref.family)
    }

    /// The slot holding exactly `glyph` within `family`.
    pub fn slot_index(&self, family: FamilyId, glyph: &str) -> Option<usize> {
        match self.index.get(glyph) {
            Some(slot_ref) if slot_ref.family == family => Some(slot_ref.slot),
            _ => self.family(family).position(glyph),
        }
    }

    /// The canonical slot of `glyph`, if `glyph` is itself a canonical character.
    pub fn canonical_slot(&self, glyph: &str) -> Option<usize> {
        // Validation keeps a glyph on one slot across aligned families,
        // so whichever family owns it agrees with the canonical slot.
        let slot_ref = self.index.get(glyph)?;
        if self.canonical().get(slot_ref.slot) == Some(glyph) {
            Some(slot_ref.slot)
        } else {
            None
        }
    }
}
