// emoji-codes Conversion Engine
// Main API that owns the table store and the matcher cache

use crate::decode;
use crate::encode;
use crate::import;
use crate::matcher::{CompiledMatcher, EmojiPositions, MatcherCache};
use crate::store::TableStore;
use crate::types::{
    AnnotationEntry, DemojizeOptions, EmojiError, EmojizeOptions, DEFAULT_DELIMITER,
    DEFAULT_LANGUAGE,
};
use rustc_hash::FxHashSet;

/// Bidirectional shortcode conversion engine
///
/// Owns the language table store and the per-language matcher cache:
/// - Encoder: shortcodes → unicode ([`emojize`](Self::emojize))
/// - Decoder: unicode → shortcodes ([`demojize`](Self::demojize))
/// - Enumeration: positions, counts, distinct extraction
/// - Importer: annotation data → new language tables
///
/// Single-threaded by design: the matcher cache uses interior mutability,
/// so the codec is `!Sync` and cross-thread sharing needs an external lock.
pub struct EmojiCodec {
    /// Language-keyed shortcode tables plus global aliases
    store: TableStore,

    /// Memoized per-language matchers (first compilation wins)
    matchers: MatcherCache,
}

impl EmojiCodec {
    /// Create a codec seeded with the built-in `en` table and aliases
    pub fn new() -> Self {
        Self {
            store: TableStore::with_builtins(),
            matchers: MatcherCache::new(),
        }
    }

    /// Create a codec over a caller-constructed store
    ///
    /// Useful for test isolation or custom table sets.
    pub fn with_store(store: TableStore) -> Self {
        Self {
            store,
            matchers: MatcherCache::new(),
        }
    }

    /// Read access to the underlying store
    pub fn store(&self) -> &TableStore {
        &self.store
    }

    /// Replace shortcode names in a string with unicode sequences
    ///
    /// # Example
    /// ```
    /// # use emoji_codes::{EmojiCodec, EmojizeOptions};
    /// let codec = EmojiCodec::new();
    /// let out = codec.emojize("Rust is fun :thumbs_up:", &EmojizeOptions::default())?;
    /// assert_eq!(out, "Rust is fun \u{1F44D}");
    /// # Ok::<(), emoji_codes::EmojiError>(())
    /// ```
    pub fn emojize(&self, text: &str, options: &EmojizeOptions) -> Result<String, EmojiError> {
        encode::emojize(&self.store, text, options)
    }

    /// Replace unicode emoji in a string with shortcode names
    ///
    /// Compiles the language's matcher on first use; see
    /// [`compiled_matcher`](Self::compiled_matcher) for the caching rules.
    ///
    /// # Example
    /// ```
    /// # use emoji_codes::{EmojiCodec, DemojizeOptions};
    /// let codec = EmojiCodec::new();
    /// let out = codec.demojize("Rust is fun \u{1F44D}", &DemojizeOptions::default())?;
    /// assert_eq!(out, "Rust is fun :thumbs_up:");
    /// # Ok::<(), emoji_codes::EmojiError>(())
    /// ```
    pub fn demojize(&self, text: &str, options: &DemojizeOptions) -> Result<String, EmojiError> {
        let matcher = self.compiled_matcher(&options.language)?;
        decode::demojize(&self.store, &matcher, text, options)
    }

    /// The compiled matcher for a language, building it on first use
    ///
    /// The first compilation is memoized for the process lifetime: a table
    /// imported over `language` afterwards is NOT picked up until
    /// [`invalidate_matcher`](Self::invalidate_matcher) is called.
    pub fn compiled_matcher(&self, language: &str) -> Result<CompiledMatcher, EmojiError> {
        let table = self.store.get(language)?;
        self.matchers.get_or_compile(language, table)
    }

    /// Drop the cached matcher so the next use recompiles from the current
    /// table
    pub fn invalidate_matcher(&self, language: &str) {
        self.matchers.invalidate(language);
    }

    /// Locations of all emoji in `text`, in left-to-right scan order
    ///
    /// Lazy: the scan advances as the iterator is consumed, and every call
    /// starts over from the beginning of `text`.
    pub fn emoji_positions<'t>(
        &self,
        text: &'t str,
        language: &str,
    ) -> Result<EmojiPositions<'t>, EmojiError> {
        Ok(self.compiled_matcher(language)?.positions(text))
    }

    /// Number of emoji in `text`
    pub fn emoji_count(&self, text: &str, language: &str) -> Result<usize, EmojiError> {
        Ok(self.emoji_positions(text, language)?.count())
    }

    /// Distinct single-character emoji present in `text`
    ///
    /// Scans character by character against the `en` table, so sequences
    /// spanning several code points (flags, ZWJ sequences) are never
    /// reported as a unit; only their constituent characters appear, when
    /// those are emoji in their own right.
    pub fn distinct_emojis(&self, text: &str) -> FxHashSet<String> {
        let Ok(table) = self.store.get(DEFAULT_LANGUAGE) else {
            return FxHashSet::default();
        };
        text.chars()
            .map(|c| c.to_string())
            .filter(|c| table.name_for(c).is_some())
            .collect()
    }

    /// Install annotation data as the table for `language`
    ///
    /// See [`import::import_annotations`] for validation rules. The cached
    /// matcher for `language`, if any, is deliberately left in place.
    pub fn import_annotations(
        &mut self,
        entries: &[AnnotationEntry],
        language: &str,
        force_import: bool,
        sticky_character: &str,
    ) -> Result<(), EmojiError> {
        import::import_annotations(&mut self.store, entries, language, force_import, sticky_character)
    }

    /// Round-trip check: does this sequence resolve against the default
    /// table?
    ///
    /// Decodes the sequence with default options and tests whether the
    /// result contains the canonical delimiter, i.e. whether a shortcode
    /// was substituted. Annotation collaborators use this to pre-filter
    /// entries before [`import_annotations`](Self::import_annotations).
    pub fn sequence_known(&self, sequence: &str) -> bool {
        self.demojize(sequence, &DemojizeOptions::default())
            .map(|decoded| decoded.contains(DEFAULT_DELIMITER))
            .unwrap_or(false)
    }

    /// (registered languages, total canonical entries) across the store
    pub fn stats(&self) -> (usize, usize) {
        let languages = self.store.languages().count();
        let entries = self
            .store
            .languages()
            .filter_map(|l| self.store.get(l).ok())
            .map(|t| t.len())
            .sum();
        (languages, entries)
    }
}

impl Default for EmojiCodec {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_creation() {
        let codec = EmojiCodec::new();
        let (languages, entries) = codec.stats();
        assert_eq!(languages, 1);
        assert!(entries > 0);
    }

    #[test]
    fn test_encode_decode_pair() {
        let codec = EmojiCodec::new();
        let encoded = codec
            .emojize("Rust is fun :thumbs_up:", &EmojizeOptions::default())
            .unwrap();
        assert_eq!(encoded, "Rust is fun \u{1F44D}");

        let decoded = codec.demojize(&encoded, &DemojizeOptions::default()).unwrap();
        assert_eq!(decoded, "Rust is fun :thumbs_up:");
    }

    #[test]
    fn test_positions_and_count_agree() {
        let codec = EmojiCodec::new();
        let text = "go \u{1F525}\u{1F525} now \u{1F44D}";

        let positions: Vec<_> = codec.emoji_positions(text, "en").unwrap().collect();
        assert_eq!(positions.len(), 3);
        assert_eq!(codec.emoji_count(text, "en").unwrap(), positions.len());
    }

    #[test]
    fn test_positions_locations() {
        let codec = EmojiCodec::new();
        let text = "Hi, I am fine. \u{1F601}";
        let positions: Vec<_> = codec.emoji_positions(text, "en").unwrap().collect();

        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].location, 15);
        assert_eq!(positions[0].emoji, "\u{1F601}");
    }

    #[test]
    fn test_distinct_emojis_collapses_duplicates() {
        let codec = EmojiCodec::new();
        let distinct = codec.distinct_emojis("\u{1F525}\u{1F525}\u{1F44D}\u{1F525}");

        assert_eq!(distinct.len(), 2);
        assert!(distinct.contains("\u{1F525}"));
        assert!(distinct.contains("\u{1F44D}"));
    }

    #[test]
    fn test_sequence_known() {
        let codec = EmojiCodec::new();
        assert!(codec.sequence_known("\u{1F44D}"));
        assert!(!codec.sequence_known("\u{1FAD6}"));
        assert!(!codec.sequence_known("plain text"));
    }

    #[test]
    fn test_import_then_demojize() {
        let mut codec = EmojiCodec::new();
        let entries = vec![AnnotationEntry::new("\u{1F600}", "visage souriant")];
        codec.import_annotations(&entries, "fr", false, "_").unwrap();

        let options = DemojizeOptions::default().with_language("fr");
        let decoded = codec.demojize("\u{1F600}", &options).unwrap();
        assert_eq!(decoded, ":visage_souriant:");
    }

    #[test]
    fn test_unknown_language_surfaces() {
        let codec = EmojiCodec::new();
        assert!(matches!(
            codec.emoji_count("\u{1F44D}", "xx"),
            Err(EmojiError::UnknownLanguage { .. })
        ));
        assert!(matches!(
            codec.compiled_matcher("xx"),
            Err(EmojiError::UnknownLanguage { .. })
        ));
    }
}
