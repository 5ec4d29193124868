//! # emoji-codes: Emoji Shortcode Transliteration
//!
//! Bidirectional conversion between emoji shortcodes (`:thumbs_up:`) and
//! unicode emoji, over language-keyed lookup tables that can be extended at
//! runtime from external annotation data.
//!
//! ## Two Directions
//!
//! 1. **Encode** - shortcodes → unicode ([`EmojiCodec::emojize`])
//!    - `"Rust is fun :thumbs_up:"` → `"Rust is fun 👍"`
//! 2. **Decode** - unicode → shortcodes ([`EmojiCodec::demojize`])
//!    - `"Rust is fun 👍"` → `"Rust is fun :thumbs_up:"`
//!
//! Plus enumeration helpers: emoji positions, counts, and distinct
//! extraction.
//!
//! ## Example Usage
//!
//! ```
//! use emoji_codes::{DemojizeOptions, EmojiCodec, EmojizeOptions, Variant};
//!
//! let codec = EmojiCodec::new();
//!
//! // Encode with the built-in `en` table
//! let text = codec.emojize("Rust is fun :thumbs_up:", &EmojizeOptions::default())?;
//! assert_eq!(text, "Rust is fun \u{1F44D}");
//!
//! // Alias names and custom delimiters
//! let options = EmojizeOptions::default().with_aliases(true).with_delimiters("__", "__");
//! assert_eq!(codec.emojize("__thumbsup__", &options)?, "\u{1F44D}");
//!
//! // Emoji presentation selector
//! let options = EmojizeOptions::default().with_variant(Variant::EmojiType);
//! assert_eq!(codec.emojize(":red_heart:", &options)?, "\u{2764}\u{FE0F}");
//!
//! // Decode back
//! assert_eq!(codec.demojize("\u{1F62F}", &DemojizeOptions::default())?, ":hushed_face:");
//!
//! // Count
//! assert_eq!(codec.emoji_count("\u{1F525}\u{1F525}", "en")?, 2);
//! # Ok::<(), emoji_codes::EmojiError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Table Store** - language-keyed shortcode tables + global aliases
//! - **Matcher Builder** - one longest-first alternation per language,
//!   compiled lazily and memoized
//! - **Encoder / Decoder** - delimiter-aware substitution in either
//!   direction
//! - **Table Importer** - merges parsed annotation data into the store
//! - **EmojiCodec** - main entry point combining all components

pub mod codec;
pub mod data;
pub mod decode;
pub mod encode;
pub mod import;
pub mod matcher;
pub mod store;
pub mod types;

// Re-export main types and functions for convenience
pub use codec::EmojiCodec;
pub use matcher::{CompiledMatcher, EmojiPositions, MatcherCache};
pub use store::{LanguageTable, TableStore};
pub use types::{
    AnnotationEntry, DemojizeOptions, EmojiError, EmojiPosition, EmojizeOptions, Variant,
    DEFAULT_DELIMITER, DEFAULT_LANGUAGE, DEFAULT_STICKY_CHARACTER,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
