//! Splitting text into alternating runs of word and non-word characters.
use serde::Serialize;

pub mod case_handling;

/// Word characters are letters, digits and the underscore.
#[inline(always)]
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Kind of a [`Segment`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// a run of word characters
    Word,
    /// a run of whitespace, punctuation or symbols
    NonWord,
}

impl SegmentKind {
    #[inline(always)]
    fn of(ch: char) -> SegmentKind {
        if is_word_char(ch) {
            SegmentKind::Word
        } else {
            SegmentKind::NonWord
        }
    }
}

/// A maximal run of characters of one [`SegmentKind`], borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    /// byte offset of the segment in the input
    pub offset: usize,
    /// whether this is a word or non-word run
    pub kind: SegmentKind,
    /// the characters of the run
    pub value: &'a str,
}

impl<'a> Segment<'a> {
    /// True when the segment contains at least one word character.
    pub fn is_word(&self) -> bool {
        self.kind == SegmentKind::Word && self.value.chars().any(is_word_char)
    }
}

/// Iterator over the [`Segment`]s of a string, see [`Tokenize::segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    source: &'a str,
    offset: usize,
}

impl<'a> Segments<'a> {
    /// Starts scanning `source` from the beginning.
    pub fn new(source: &'a str) -> Segments<'a> {
        Segments { source, offset: 0 }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let rest = &self.source[self.offset..];
        let kind = SegmentKind::of(rest.chars().next()?);

        let len = rest
            .char_indices()
            .find(|&(_, ch)| SegmentKind::of(ch) != kind)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        let segment = Segment {
            offset: self.offset,
            kind,
            value: &rest[..len],
        };
        self.offset += len;

        Some(segment)
    }
}

impl<'a> std::iter::FusedIterator for Segments<'a> {}

/// Iterator over the word [`Segment`]s of a string, see [`Tokenize::words`].
#[derive(Debug, Clone)]
pub struct Words<'a>(Segments<'a>);

impl<'a> Iterator for Words<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        self.0.by_ref().find(Segment::is_word)
    }
}

/// Segmentation of text into word and non-word runs.
pub trait Tokenize {
    /// All segments, in order. Concatenating their values gives back the input.
    fn segments(&self) -> Segments<'_>;
    /// Only the word segments.
    fn words(&self) -> Words<'_>;
}

impl Tokenize for str {
    fn segments(&self) -> Segments<'_> {
        Segments::new(self)
    }

    fn words(&self) -> Words<'_> {
        Words(Segments::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(msg: &str) -> Vec<(usize, &str)> {
        msg.segments().map(|s| (s.offset, s.value)).collect()
    }

    #[test]
    fn basic() {
        assert_eq!(
            pairs("Helo world!"),
            vec![(0, "Helo"), (4, " "), (5, "world"), (10, "!")]
        );
    }

    #[test]
    fn empty() {
        assert_eq!("".segments().count(), 0);
        assert_eq!("".words().count(), 0);
    }

    #[test]
    fn unicode_and_underscores() {
        let msg = "Salam, dünya! şəhər_2024 (😄)\t«İçəri»";

        assert_eq!(
            pairs(msg),
            vec![
                (0, "Salam"),
                (5, ", "),
                (7, "dünya"),
                (13, "! "),
                (15, "şəhər_2024"),
                (28, " (😄)\t«"),
                (38, "İçəri"),
                (46, "»")
            ]
        );

        assert_eq!(
            msg.words().map(|s| s.value).collect::<Vec<_>>(),
            vec!["Salam", "dünya", "şəhər_2024", "İçəri"]
        );
    }

    #[test]
    fn kinds_alternate() {
        let msg = "  leading, trailing...  ";
        let kinds = msg.segments().map(|s| s.kind).collect::<Vec<_>>();

        assert_eq!(kinds.first(), Some(&SegmentKind::NonWord));
        assert_eq!(kinds.last(), Some(&SegmentKind::NonWord));
        assert!(kinds.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn round_trip() {
        let msgs = [
            "",
            " ",
            "word",
            "this is an ordinary sentence! \"This was quoted,\", an emoji: (😄), and\t a tab.\n",
            "Some extreme unicode; bismala: (﷽), in long form: بِسْمِ اللهِ الرَّحْمٰنِ الرَّحِيْمِ.",
            "e\u{301}toile, a\u{308}",
            "___--__--",
        ];

        for msg in msgs.iter() {
            let joined = msg.segments().map(|s| s.value).collect::<String>();
            assert_eq!(joined, *msg);

            for segment in msg.segments() {
                assert!(!segment.value.is_empty());
                assert_eq!(&msg[segment.offset..segment.offset + segment.value.len()], segment.value);

                match segment.kind {
                    SegmentKind::Word => assert!(segment.value.chars().all(is_word_char)),
                    SegmentKind::NonWord => assert!(!segment.value.chars().any(is_word_char)),
                }
            }
        }
    }
}
