// emoji-codes Type Definitions
// Core types for shortcode conversion options and results

use thiserror::Error;

/// Canonical delimiter wrapped around stored shortcode names
pub const DEFAULT_DELIMITER: &str = ":";

/// Default character joining multi-word names (":thumbs_up:")
pub const DEFAULT_STICKY_CHARACTER: &str = "_";

/// Language code of the built-in shortcode table
pub const DEFAULT_LANGUAGE: &str = "en";

/// Presentation variant appended after an encoded emoji sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// No variation selector appended
    #[default]
    Base,

    /// VS-15 (`\u{FE0E}`): request text presentation
    TextType,

    /// VS-16 (`\u{FE0F}`): request emoji presentation
    EmojiType,
}

impl Variant {
    /// The variation selector this variant appends, if any
    pub fn selector(&self) -> Option<char> {
        match self {
            Variant::Base => None,
            Variant::TextType => Some('\u{FE0E}'),
            Variant::EmojiType => Some('\u{FE0F}'),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Base => write!(f, "base"),
            Variant::TextType => write!(f, "text_type"),
            Variant::EmojiType => write!(f, "emoji_type"),
        }
    }
}

/// Options for [`emojize`](crate::EmojiCodec::emojize) (shortcodes → unicode)
#[derive(Debug, Clone)]
pub struct EmojizeOptions {
    /// Resolve names through the global alias table instead of the
    /// language's canonical table
    pub use_aliases: bool,

    /// (open, close) delimiters bounding shortcodes in the input
    pub delimiters: (String, String),

    /// Presentation variant appended to each resolved sequence
    pub variant: Variant,

    /// Language whose table resolves canonical names
    pub language: String,
}

impl Default for EmojizeOptions {
    fn default() -> Self {
        Self {
            use_aliases: false,
            delimiters: (DEFAULT_DELIMITER.to_string(), DEFAULT_DELIMITER.to_string()),
            variant: Variant::Base,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl EmojizeOptions {
    /// Enable alias lookups
    pub fn with_aliases(mut self, use_aliases: bool) -> Self {
        self.use_aliases = use_aliases;
        self
    }

    /// Use delimiters other than the canonical `:`
    pub fn with_delimiters(mut self, open: &str, close: &str) -> Self {
        self.delimiters = (open.to_string(), close.to_string());
        self
    }

    /// Append a presentation variant selector to resolved sequences
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Resolve against a different language table
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }
}

/// Options for [`demojize`](crate::EmojiCodec::demojize) (unicode → shortcodes)
#[derive(Debug, Clone)]
pub struct DemojizeOptions {
    /// Emit alias names instead of canonical names
    pub use_aliases: bool,

    /// (open, close) delimiters wrapped around emitted shortcodes
    pub delimiters: (String, String),

    /// Character joining multi-word names in the output
    pub sticky_character: String,

    /// Language whose table resolves sequences
    pub language: String,
}

impl Default for DemojizeOptions {
    fn default() -> Self {
        Self {
            use_aliases: false,
            delimiters: (DEFAULT_DELIMITER.to_string(), DEFAULT_DELIMITER.to_string()),
            sticky_character: DEFAULT_STICKY_CHARACTER.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl DemojizeOptions {
    /// Emit alias names
    pub fn with_aliases(mut self, use_aliases: bool) -> Self {
        self.use_aliases = use_aliases;
        self
    }

    /// Use delimiters other than the canonical `:`
    pub fn with_delimiters(mut self, open: &str, close: &str) -> Self {
        self.delimiters = (open.to_string(), close.to_string());
        self
    }

    /// Join name words with a character other than `_`
    pub fn with_sticky_character(mut self, sticky_character: &str) -> Self {
        self.sticky_character = sticky_character.to_string();
        self
    }

    /// Resolve against a different language table
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }
}

/// A single emoji match located in a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiPosition {
    /// Byte offset of the match start
    pub location: usize,

    /// The matched emoji sequence
    pub emoji: String,
}

/// One parsed annotation entry supplied by an external annotation source
///
/// The collaborator that reads the annotation document is expected to
/// pre-filter entries with
/// [`sequence_known`](crate::EmojiCodec::sequence_known) before import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationEntry {
    /// The unicode character sequence (the annotation's `cp` attribute)
    pub sequence: String,

    /// Space-separated name tokens in the target language
    pub tokens: String,
}

impl AnnotationEntry {
    /// Create a new annotation entry
    pub fn new(sequence: &str, tokens: &str) -> Self {
        Self {
            sequence: sequence.to_string(),
            tokens: tokens.to_string(),
        }
    }
}

/// Conversion and import errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmojiError {
    #[error("Unknown language '{language}': no shortcode table registered")]
    UnknownLanguage { language: String },

    #[error("Language '{language}' already has a shortcode table; use force_import to replace it")]
    LanguageExists { language: String },

    #[error("Invalid sticky character: must be a non-empty string")]
    InvalidStickyCharacter,

    #[error("Pattern compilation failed: {0}")]
    Pattern(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_selector() {
        assert_eq!(Variant::Base.selector(), None);
        assert_eq!(Variant::TextType.selector(), Some('\u{FE0E}'));
        assert_eq!(Variant::EmojiType.selector(), Some('\u{FE0F}'));
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(Variant::Base.to_string(), "base");
        assert_eq!(Variant::TextType.to_string(), "text_type");
        assert_eq!(Variant::EmojiType.to_string(), "emoji_type");
    }

    #[test]
    fn test_emojize_options_defaults() {
        let options = EmojizeOptions::default();
        assert!(!options.use_aliases);
        assert_eq!(options.delimiters, (":".to_string(), ":".to_string()));
        assert_eq!(options.variant, Variant::Base);
        assert_eq!(options.language, "en");
    }

    #[test]
    fn test_emojize_options_builder() {
        let options = EmojizeOptions::default()
            .with_aliases(true)
            .with_delimiters("__", "__")
            .with_variant(Variant::EmojiType)
            .with_language("hi");

        assert!(options.use_aliases);
        assert_eq!(options.delimiters.0, "__");
        assert_eq!(options.variant, Variant::EmojiType);
        assert_eq!(options.language, "hi");
    }

    #[test]
    fn test_demojize_options_defaults() {
        let options = DemojizeOptions::default();
        assert!(!options.use_aliases);
        assert_eq!(options.sticky_character, "_");
        assert_eq!(options.language, "en");
    }

    #[test]
    fn test_demojize_options_builder() {
        let options = DemojizeOptions::default()
            .with_delimiters("[", "]")
            .with_sticky_character("-")
            .with_language("np");

        assert_eq!(options.delimiters, ("[".to_string(), "]".to_string()));
        assert_eq!(options.sticky_character, "-");
        assert_eq!(options.language, "np");
    }

    #[test]
    fn test_annotation_entry() {
        let entry = AnnotationEntry::new("\u{1F600}", "grinning face");
        assert_eq!(entry.sequence, "\u{1F600}");
        assert_eq!(entry.tokens, "grinning face");
    }

    #[test]
    fn test_error_messages() {
        let err = EmojiError::UnknownLanguage {
            language: "xx".to_string(),
        };
        assert!(err.to_string().contains("xx"));

        let err = EmojiError::LanguageExists {
            language: "en".to_string(),
        };
        assert!(err.to_string().contains("force_import"));
    }
}
