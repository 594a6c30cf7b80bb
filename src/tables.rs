//! Embedded glyph tables, catalog version 1.
//!
//! Slot `i` of every aligned family renders `NORMAL[i]`. Changing any entry
//! changes the canonical name of existing namespaces.

use crate::glyph_family::FamilyKind;

/// Version of the embedded tables.
pub(crate) const CATALOG_VERSION: u32 = 1;

/// Squared Latin capitals, circled digits.
pub(crate) const BLOCKS: &[&str] = &[
    "🄰", "🄱", "🄲", "🄳", "🄴", "🄵",
    "🄶", "🄷", "🄸", "🄹", "🄺", "🄻",
    "🄼", "🄽", "🄾", "🄿", "🅀", "🅁",
    "🅂", "🅃", "🅄", "🅅", "🅆", "🅇",
    "🅈", "🅉", "⓪", "①", "②", "③",
    "④", "⑤", "⑥", "⑦", "⑧", "⑨",
];

/// Negative squared Latin capitals, negative circled digits.
pub(crate) const BLOCKS_FILL: &[&str] = &[
    "🅰", "🅱", "🅲", "🅳", "🅴", "🅵",
    "🅶", "🅷", "🅸", "🅹", "🅺", "🅻",
    "🅼", "🅽", "🅾", "🅿", "🆀", "🆁",
    "🆂", "🆃", "🆄", "🆅", "🆆", "🆇",
    "🆈", "🆉", "⓿", "❶", "❷", "❸",
    "❹", "❺", "❻", "❼", "❽", "❾",
];

/// Unaligned, every entry is excluded from canonical names.
pub(crate) const EMOJI: &[&str] = &[
    "😀", "😁", "😂", "🤣", "😃", "😄",
    "😅", "😆", "😉", "😊", "😋", "😎",
    "😍", "😘", "🥰", "🤩", "🤔", "🤨",
    "😐", "😑", "😶", "🙄", "😏", "😴",
    "🤯", "🥳", "🥺", "😭", "😡", "🤬",
    "🤡", "👻", "💀", "👽", "👾", "🤖",
    "🎃", "😺", "🙈", "🙉", "🙊", "💩",
    "🔥", "✨", "🌈", "🌙", "⭐", "🌊",
    "🍀", "🌸", "🍕", "🍩", "🍺", "🎉",
    "🎮", "🎲", "🎯", "🚀", "🛸", "💎",
    "💰", "👑", "⚡", "💯", "❤\u{FE0F}", "💜",
    "💙", "💚", "🖤", "👀", "👋", "👍",
    "🙏", "💪", "🦄", "🐸", "🐶", "🐱",
    "🦊", "🐼", "🐧", "🦋", "🐙", "🦈",
    "🍄", "🌵", "🌍", "🏴\u{200D}☠\u{FE0F}", "👨\u{200D}💻", "🫡",
];

/// The canonical alphabet. Every other aligned family is indexed by it.
pub(crate) const NORMAL: &[&str] = &[
    "a", "b", "c", "d", "e", "f",
    "g", "h", "i", "j", "k", "l",
    "m", "n", "o", "p", "q", "r",
    "s", "t", "u", "v", "w", "x",
    "y", "z", "0", "1", "2", "3",
    "4", "5", "6", "7", "8", "9",
];

/// Fraktur small letters, sans-serif digits.
pub(crate) const OLDE: &[&str] = &[
    "𝔞", "𝔟", "𝔠", "𝔡", "𝔢", "𝔣",
    "𝔤", "𝔥", "𝔦", "𝔧", "𝔨", "𝔩",
    "𝔪", "𝔫", "𝔬", "𝔭", "𝔮", "𝔯",
    "𝔰", "𝔱", "𝔲", "𝔳", "𝔴", "𝔵",
    "𝔶", "𝔷", "𝟢", "𝟣", "𝟤", "𝟥",
    "𝟦", "𝟧", "𝟨", "𝟩", "𝟪", "𝟫",
];

/// Bold fraktur small letters, sans-serif bold digits.
pub(crate) const OLDE_BOLD: &[&str] = &[
    "𝖆", "𝖇", "𝖈", "𝖉", "𝖊", "𝖋",
    "𝖌", "𝖍", "𝖎", "𝖏", "𝖐", "𝖑",
    "𝖒", "𝖓", "𝖔", "𝖕", "𝖖", "𝖗",
    "𝖘", "𝖙", "𝖚", "𝖛", "𝖜", "𝖝",
    "𝖞", "𝖟", "𝟬", "𝟭", "𝟮", "𝟯",
    "𝟰", "𝟱", "𝟲", "𝟳", "𝟴", "𝟵",
];

/// Script small letters, double-struck digits.
///
/// Script e, g and o are unassigned in the mathematical alphanumerics block,
/// their italic counterparts fill the gaps.
pub(crate) const SCRIPT: &[&str] = &[
    "𝒶", "𝒷", "𝒸", "𝒹", "𝑒", "𝒻",
    "𝑔", "𝒽", "𝒾", "𝒿", "𝓀", "𝓁",
    "𝓂", "𝓃", "𝑜", "𝓅", "𝓆", "𝓇",
    "𝓈", "𝓉", "𝓊", "𝓋", "𝓌", "𝓍",
    "𝓎", "𝓏", "𝟘", "𝟙", "𝟚", "𝟛",
    "𝟜", "𝟝", "𝟞", "𝟟", "𝟠", "𝟡",
];

/// Bold script small letters, bold digits.
pub(crate) const SCRIPT_BOLD: &[&str] = &[
    "𝓪", "𝓫", "𝓬", "𝓭", "𝓮", "𝓯",
    "𝓰", "𝓱", "𝓲", "𝓳", "𝓴", "𝓵",
    "𝓶", "𝓷", "𝓸", "𝓹", "𝓺", "𝓻",
    "𝓼", "𝓽", "𝓾", "𝓿", "𝔀", "𝔁",
    "𝔂", "𝔃", "𝟎", "𝟏", "𝟐", "𝟑",
    "𝟒", "𝟓", "𝟔", "𝟕", "𝟖", "𝟗",
];

pub(crate) const SQUIGGLE: &[&str] = &[
    "α", "Ⴆ", "ƈ", "ԃ", "ҽ", "ϝ",
    "ɠ", "ԋ", "ι", "ʝ", "ƙ", "ʅ",
    "ɱ", "ɳ", "σ", "ρ", "ϙ", "ɾ",
    "ʂ", "ƚ", "υ", "ʋ", "ɯ", "ҳ",
    "ყ", "ȥ", "𝟶", "𝟷", "𝟸", "𝟹",
    "𝟺", "𝟻", "𝟼", "𝟽", "𝟾", "𝟿",
];

/// Canonical characters under a fixed stack of combining marks
/// (U+0334, U+0353, U+035B).
pub(crate) const ZALGO: &[&str] = &[
    "a\u{0334}\u{0353}\u{035B}", "b\u{0334}\u{0353}\u{035B}", "c\u{0334}\u{0353}\u{035B}", "d\u{0334}\u{0353}\u{035B}",
    "e\u{0334}\u{0353}\u{035B}", "f\u{0334}\u{0353}\u{035B}", "g\u{0334}\u{0353}\u{035B}", "h\u{0334}\u{0353}\u{035B}",
    "i\u{0334}\u{0353}\u{035B}", "j\u{0334}\u{0353}\u{035B}", "k\u{0334}\u{0353}\u{035B}", "l\u{0334}\u{0353}\u{035B}",
    "m\u{0334}\u{0353}\u{035B}", "n\u{0334}\u{0353}\u{035B}", "o\u{0334}\u{0353}\u{035B}", "p\u{0334}\u{0353}\u{035B}",
    "q\u{0334}\u{0353}\u{035B}", "r\u{0334}\u{0353}\u{035B}", "s\u{0334}\u{0353}\u{035B}", "t\u{0334}\u{0353}\u{035B}",
    "u\u{0334}\u{0353}\u{035B}", "v\u{0334}\u{0353}\u{035B}", "w\u{0334}\u{0353}\u{035B}", "x\u{0334}\u{0353}\u{035B}",
    "y\u{0334}\u{0353}\u{035B}", "z\u{0334}\u{0353}\u{035B}", "0\u{0334}\u{0353}\u{035B}", "1\u{0334}\u{0353}\u{035B}",
    "2\u{0334}\u{0353}\u{035B}", "3\u{0334}\u{0353}\u{035B}", "4\u{0334}\u{0353}\u{035B}", "5\u{0334}\u{0353}\u{035B}",
    "6\u{0334}\u{0353}\u{035B}", "7\u{0334}\u{0353}\u{035B}", "8\u{0334}\u{0353}\u{035B}", "9\u{0334}\u{0353}\u{035B}",
];

/// Family names and tables, in lookup priority order.
pub(crate) const FAMILIES: &[(&str, FamilyKind, &[&str])] = &[
    ("blocks", FamilyKind::Decorative, BLOCKS),
    ("blocksFill", FamilyKind::Decorative, BLOCKS_FILL),
    ("emoji", FamilyKind::Excluded, EMOJI),
    ("normal", FamilyKind::Canonical, NORMAL),
    ("olde", FamilyKind::Decorative, OLDE),
    ("oldeBold", FamilyKind::Decorative, OLDE_BOLD),
    ("script", FamilyKind::Decorative, SCRIPT),
    ("scriptBold", FamilyKind::Decorative, SCRIPT_BOLD),
    ("squiggle", FamilyKind::Decorative, SQUIGGLE),
    ("zalgo", FamilyKind::Decorative, ZALGO),
];
