use cns_name::{
    split_glyphs, FamilyKind, GlyphFamily, GlyphNormalizer, GlyphTableRegistry, NamespaceNameBuilder,
    NormalizedGlyph, CANTO_SUFFIX,
};
use proptest::prelude::*;

// Property tests over the embedded catalog: every slot of every family,
// arbitrary zalgo stacks, and arbitrary namespaces built from catalog glyphs.

fn families() -> &'static [GlyphFamily] {
    GlyphTableRegistry::builtin().catalog().families()
}

fn canonical() -> &'static GlyphFamily {
    GlyphTableRegistry::builtin().canonical()
}

fn family_named(name: &str) -> &'static GlyphFamily {
    GlyphTableRegistry::builtin()
        .catalog()
        .family(name)
        .expect("family in embedded catalog")
}

fn decorative_families() -> Vec<&'static GlyphFamily> {
    families()
        .iter()
        .filter(|family| family.kind() == FamilyKind::Decorative)
        .collect()
}

fn decoration_mark() -> impl Strategy<Value = char> {
    (0x0300u32..=0x036F).prop_map(|code| char::from_u32(code).unwrap())
}

fn catalog_glyph() -> impl Strategy<Value = String> {
    let all = families()
        .iter()
        .flat_map(|family| family.glyphs().iter().cloned())
        .collect::<Vec<_>>();
    prop::sample::select(all)
}

fn emoji_glyph() -> impl Strategy<Value = String> {
    prop::sample::select(family_named("emoji").glyphs().to_vec())
}

proptest! {
    #[test]
    fn canonical_characters_map_to_themselves(slot in 0usize..36) {
        let ch = canonical().get(slot).unwrap();
        prop_assert_eq!(NormalizedGlyph::Canonical(ch), cns_name::normalize(ch));
    }
}

proptest! {
    #[test]
    fn emoji_are_excluded(glyph in emoji_glyph()) {
        prop_assert_eq!(NormalizedGlyph::Excluded, cns_name::normalize(&glyph));
    }
}

proptest! {
    #[test]
    fn zalgo_stacks_strip_to_their_base(
        slot in 0usize..36,
        marks in prop::collection::vec(decoration_mark(), 1..8),
    ) {
        let base = canonical().get(slot).unwrap();
        let mut glyph = base.to_owned();
        glyph.extend(marks);
        prop_assert_eq!(NormalizedGlyph::Canonical(base), cns_name::normalize(&glyph));
    }
}

proptest! {
    #[test]
    fn decorative_slots_never_leak(
        family_idx in 0usize..8,
        slot in 0usize..36,
    ) {
        let decorative = decorative_families();
        let family = decorative[family_idx % decorative.len()];
        let glyph = family.get(slot).unwrap();
        let normalized = cns_name::normalize(glyph);
        prop_assert!(
            normalized == NormalizedGlyph::Canonical(canonical().get(slot).unwrap())
                || normalized == NormalizedGlyph::Excluded,
            "{} slot {} gave {:?}",
            family.name(),
            slot,
            normalized
        );
    }
}

proptest! {
    #[test]
    fn marks_over_decorative_glyphs_are_dropped(
        family_idx in 0usize..8,
        slot in 0usize..36,
        mark in decoration_mark(),
    ) {
        // Stripping only recognizes canonical bases; a styled base with extra
        // marks is in no family and has no slot.
        let decorative = decorative_families()
            .into_iter()
            .filter(|family| family.name() != "zalgo")
            .collect::<Vec<_>>();
        let family = decorative[family_idx % decorative.len()];
        let mut glyph = family.get(slot).unwrap().to_owned();
        glyph.push(mark);
        prop_assert_eq!(NormalizedGlyph::Excluded, cns_name::normalize(&glyph));
    }
}

proptest! {
    #[test]
    fn build_keeps_display_and_is_deterministic(
        glyphs in prop::collection::vec(catalog_glyph(), 1..12),
    ) {
        let builder = NamespaceNameBuilder::builtin();
        let first = builder.build(&glyphs);
        let second = builder.build(&glyphs);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(glyphs.concat(), first.display_name.clone());
        prop_assert!(first.base_name.ends_with(CANTO_SUFFIX));

        let handle = first.handle();
        prop_assert!(handle.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit()));
        prop_assert!(handle.chars().count() <= glyphs.len());
    }
}

proptest! {
    #[test]
    fn emoji_only_namespaces_keep_only_the_suffix(
        glyphs in prop::collection::vec(emoji_glyph(), 1..10),
    ) {
        let built = NamespaceNameBuilder::builtin().build(&glyphs);
        prop_assert_eq!(glyphs.len(), split_glyphs(&built.display_name).len());
        prop_assert_eq!(CANTO_SUFFIX, built.base_name.as_str());
    }
}

#[test]
fn every_decorative_family_spells_teewhy() {
    let builder = NamespaceNameBuilder::builtin();
    let spelling = "teewhy"
        .chars()
        .map(|ch| canonical().position(&ch.to_string()).unwrap())
        .collect::<Vec<_>>();
    for family in decorative_families() {
        let glyphs = spelling
            .iter()
            .map(|&slot| family.get(slot).unwrap())
            .collect::<Vec<_>>();
        let built = builder.build(&glyphs);
        assert_eq!(glyphs.concat(), built.display_name, "{}", family.name());
        assert_eq!("teewhy.canto", built.base_name, "{}", family.name());
    }
}

#[test]
fn every_slot_of_every_aligned_family_resolves() {
    let normalizer = GlyphNormalizer::builtin();
    for family in families().iter().filter(|family| family.kind().is_aligned()) {
        for (slot, glyph) in family.glyphs().iter().enumerate() {
            assert_eq!(
                NormalizedGlyph::Canonical(canonical().get(slot).unwrap()),
                normalizer.normalize(glyph),
                "{} slot {}",
                family.name(),
                slot
            );
        }
    }
}
