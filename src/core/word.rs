//! Word search vocabulary entry
//!
//! A Word keeps the text shown in the word list and the letters that are
//! actually written into the grid (the text without its spaces).

use std::fmt;

/// An uppercase word to hide in the puzzle
///
/// Multi-word entries such as "XMAS COOKIES" keep their space in [`Word::text`],
/// but only the letters are placed and matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => {
                write!(f, "Word may only contain letters and spaces")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is trimmed and normalised to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word has no letters
    /// - Contains non-ASCII characters
    /// - Contains anything other than letters and spaces
    ///
    /// # Examples
    /// ```
    /// use wordsearch::core::Word;
    ///
    /// let word = Word::new("xmas cookies").unwrap();
    /// assert_eq!(word.text(), "XMAS COOKIES");
    /// assert_eq!(word.letters(), b"XMASCOOKIES");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();
        let text = text.trim();

        // Unicode uppercasing can turn non-ASCII letters into ASCII ones (ß -> SS)
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }
        let text = text.to_ascii_uppercase();

        if !text.chars().all(|c| c.is_ascii_uppercase() || c == ' ') {
            return Err(WordError::InvalidCharacters);
        }

        let letters: Vec<u8> = text.bytes().filter(u8::is_ascii_uppercase).collect();
        if letters.is_empty() {
            return Err(WordError::Empty);
        }

        Ok(Self { text, letters })
    }

    /// Get the display text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters placed in the grid, spaces removed
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Number of grid cells the word occupies
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; a `Word` holds at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The letters as a string, the form a drag selection is compared against
    #[must_use]
    pub fn key(&self) -> String {
        String::from_utf8_lossy(&self.letters).into_owned()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
