use std::{borrow::Cow, fmt, ops::RangeInclusive};

/// Combining Diacritical Marks, the block zalgo text stacks onto its base characters.
pub const DECORATION_MARKS: RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// A `SmallVec` of `Glyph`s. Namespaces are short, so this rarely spills.
pub type GlyphVec<'a> = smallvec::SmallVec<[Glyph<'a>; 16]>;

/// A single rendered character: exactly one extended grapheme cluster,
/// possibly carrying combining marks.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Glyph<'a>(&'a str);

impl<'a> Glyph<'a> {
    /// Wrap a `&str` consisting of a grapheme cluster,
    /// returning `None` if the input is empty or holds more than one grapheme cluster.
    pub fn from_grapheme_cluster(grapheme: &'a str) -> Option<Self> {
        use unicode_segmentation::UnicodeSegmentation;

        let mut graphemes = grapheme.graphemes(true);
        let first = graphemes.next()?;
        if graphemes.next().is_some() {
            return None;
        }
        debug_assert_eq!(first, grapheme);
        Some(Glyph(grapheme))
    }

    /// Retrieves the text of this glyph.
    pub fn as_str(self) -> &'a str {
        self.0
    }

    /// Returns whether this glyph carries any mark from `DECORATION_MARKS`.
    pub fn is_decorated(self) -> bool {
        self.0.chars().any(|ch| DECORATION_MARKS.contains(&ch))
    }

    /// The glyph with every mark from `DECORATION_MARKS` removed.
    ///
    /// Borrows when there is nothing to strip. The result may be empty
    /// if the glyph was made of marks only.
    pub fn undecorated(self) -> Cow<'a, str> {
        if !self.is_decorated() {
            return Cow::Borrowed(self.0);
        }
        Cow::Owned(
            self.0
                .chars()
                .filter(|ch| !DECORATION_MARKS.contains(ch))
                .collect(),
        )
    }
}

/// Split a joined display string into its glyphs, in order.
pub fn split_glyphs(s: &str) -> GlyphVec<'_> {
    use unicode_segmentation::UnicodeSegmentation;

    s.graphemes(true).map(Glyph).collect()
}

impl fmt::Display for Glyph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl fmt::Debug for Glyph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "glyph('")?;
        for ch in self.0.chars() {
            write!(f, "{}", ch.escape_debug())?;
        }
        write!(f, "')")
    }
}

impl AsRef<str> for Glyph<'_> {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl PartialEq<str> for Glyph<'_> {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Glyph<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::{split_glyphs, Glyph};

    macro_rules! str {
        ($($v:expr),* $(,)?) => {
            [$($v),*].into_iter().collect::<String>()
        };
    }

    #[test]
    fn test_single_cluster() {
        assert!(Glyph::from_grapheme_cluster("a").is_some());
        assert!(Glyph::from_grapheme_cluster("\u{1D4BD}").is_some()); // 𝒽
        assert!(Glyph::from_grapheme_cluster(&str!['e', '\u{0334}', '\u{0353}', '\u{035B}']).is_some());
        assert!(Glyph::from_grapheme_cluster("\u{1F3F4}\u{200D}\u{2620}\u{FE0F}").is_some()); // 🏴‍☠️
        assert!(Glyph::from_grapheme_cluster("").is_none());
        assert!(Glyph::from_grapheme_cluster("ab").is_none());
    }

    #[test]
    fn test_undecorated() {
        let zalgo = str!['w', '\u{0334}', '\u{0353}', '\u{035B}'];
        let glyph = Glyph::from_grapheme_cluster(&zalgo).unwrap();
        assert!(glyph.is_decorated());
        assert_eq!("w", glyph.undecorated());

        let plain = Glyph::from_grapheme_cluster("\u{026F}").unwrap(); // ɯ
        assert!(!plain.is_decorated());
        assert!(matches!(plain.undecorated(), std::borrow::Cow::Borrowed("\u{026F}")));

        // U+0483 is a combining mark outside the decoration block.
        let cyrillic = str!['a', '\u{0483}'];
        let glyph = Glyph::from_grapheme_cluster(&cyrillic).unwrap();
        assert_eq!(cyrillic, glyph.undecorated());
    }

    #[test]
    fn test_split_glyphs() {
        let display = str!['0', 'x', 't', '\u{1D452}', '\u{1D452}', '\u{026F}', '\u{1D4BD}', '\u{1D4CE}'];
        let glyphs = split_glyphs(&display);
        assert_eq!(8, glyphs.len());
        assert_eq!(glyphs[3], "\u{1D452}");

        let zalgo = str!['a', '\u{0334}', 'b', '\u{0353}', '\u{035B}'];
        let glyphs = split_glyphs(&zalgo);
        assert_eq!(2, glyphs.len());
        assert_eq!("b", glyphs[1].undecorated());

        assert!(split_glyphs("").is_empty());
    }

    #[test]
    fn test_debug_fmt_glyph() {
        assert_eq!("glyph('A')", format!("{:?}", Glyph::from_grapheme_cluster("A").unwrap()));
        assert_eq!(
            "glyph('a\\u{334}')",
            format!("{:?}", Glyph::from_grapheme_cluster("a\u{0334}").unwrap())
        );
    }
}
