// emoji-codes Language Table Store
// Language-keyed shortcode tables plus the global alias mappings

use crate::data;
use crate::types::{EmojiError, DEFAULT_LANGUAGE, DEFAULT_STICKY_CHARACTER};
use rustc_hash::FxHashMap;

/// Bidirectional shortcode table for a single language
///
/// Names are stored wrapped in the canonical `:` delimiter. The reverse
/// direction is last-write-wins when two names share a sequence.
#[derive(Debug, Clone, Default)]
pub struct LanguageTable {
    /// Name → sequence (keys stored as `:name:`)
    name_to_sequence: FxHashMap<String, String>,

    /// Sequence → name (inverse of the above)
    sequence_to_name: FxHashMap<String, String>,

    /// Character joining multi-word names in this language
    sticky_character: String,
}

impl LanguageTable {
    /// Create an empty table with the given sticky character
    pub fn new(sticky_character: &str) -> Self {
        Self {
            name_to_sequence: FxHashMap::default(),
            sequence_to_name: FxHashMap::default(),
            sticky_character: sticky_character.to_string(),
        }
    }

    /// Insert one (name, sequence) pair into both directions
    ///
    /// `name` must already carry the canonical delimiters.
    pub fn insert(&mut self, name: &str, sequence: &str) {
        self.name_to_sequence
            .insert(name.to_string(), sequence.to_string());
        self.sequence_to_name
            .insert(sequence.to_string(), name.to_string());
    }

    /// Resolve a delimiter-wrapped name to its sequence
    pub fn sequence_for(&self, name: &str) -> Option<&str> {
        self.name_to_sequence.get(name).map(|s| s.as_str())
    }

    /// Resolve a sequence to its canonical name
    pub fn name_for(&self, sequence: &str) -> Option<&str> {
        self.sequence_to_name.get(sequence).map(|s| s.as_str())
    }

    /// All sequences known to this table
    pub fn sequences(&self) -> impl Iterator<Item = &str> {
        self.sequence_to_name.keys().map(|s| s.as_str())
    }

    /// The character joining multi-word names in this language
    pub fn sticky_character(&self) -> &str {
        &self.sticky_character
    }

    /// Number of canonical names in the table
    pub fn len(&self) -> usize {
        self.name_to_sequence.len()
    }

    /// True if the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.name_to_sequence.is_empty()
    }
}

/// Process-wide store of language tables and the global alias mappings
///
/// Aliases are not partitioned by language: one alias table is shared across
/// every language in the store.
#[derive(Debug, Clone, Default)]
pub struct TableStore {
    tables: FxHashMap<String, LanguageTable>,
    alias_name_to_sequence: FxHashMap<String, String>,
    alias_sequence_to_name: FxHashMap<String, String>,
}

impl TableStore {
    /// Create an empty store with no languages registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the built-in `en` table and the global
    /// alias mappings
    ///
    /// The alias name table is a superset: built-in `en` pairs first, then
    /// the alias pairs, so aliases win collisions in both directions.
    pub fn with_builtins() -> Self {
        let mut store = Self::new();

        let mut en = LanguageTable::new(DEFAULT_STICKY_CHARACTER);
        for (name, sequence) in data::EMOJI_EN {
            en.insert(name, sequence);
        }
        store.tables.insert(DEFAULT_LANGUAGE.to_string(), en);

        for (name, sequence) in data::EMOJI_EN.iter().chain(data::EMOJI_ALIASES) {
            store
                .alias_name_to_sequence
                .insert(name.to_string(), sequence.to_string());
            store
                .alias_sequence_to_name
                .insert(sequence.to_string(), name.to_string());
        }

        store
    }

    /// Look up the table for a language
    pub fn get(&self, language: &str) -> Result<&LanguageTable, EmojiError> {
        self.tables
            .get(language)
            .ok_or_else(|| EmojiError::UnknownLanguage {
                language: language.to_string(),
            })
    }

    /// Install a table for a language
    ///
    /// Fails with [`EmojiError::LanguageExists`] unless the language is new
    /// or `overwrite` is set. The store is unchanged on failure.
    pub fn put(
        &mut self,
        language: &str,
        table: LanguageTable,
        overwrite: bool,
    ) -> Result<(), EmojiError> {
        if !overwrite && self.tables.contains_key(language) {
            return Err(EmojiError::LanguageExists {
                language: language.to_string(),
            });
        }
        self.tables.insert(language.to_string(), table);
        Ok(())
    }

    /// True if a table is registered for the language
    pub fn contains(&self, language: &str) -> bool {
        self.tables.contains_key(language)
    }

    /// Registered language codes
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(|s| s.as_str())
    }

    /// Resolve a delimiter-wrapped name through the global alias table
    pub fn alias_sequence_for(&self, name: &str) -> Option<&str> {
        self.alias_name_to_sequence.get(name).map(|s| s.as_str())
    }

    /// Resolve a sequence to its alias name
    pub fn alias_name_for(&self, sequence: &str) -> Option<&str> {
        self.alias_sequence_to_name.get(sequence).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = TableStore::new();
        assert!(!store.contains("en"));
        assert!(matches!(
            store.get("en"),
            Err(EmojiError::UnknownLanguage { .. })
        ));
    }

    #[test]
    fn test_builtin_store_has_en() {
        let store = TableStore::with_builtins();
        let en = store.get("en").unwrap();
        assert!(!en.is_empty());
        assert_eq!(en.sticky_character(), "_");
        assert_eq!(en.sequence_for(":thumbs_up:"), Some("\u{1F44D}"));
        assert_eq!(en.name_for("\u{1F44D}"), Some(":thumbs_up:"));
    }

    #[test]
    fn test_alias_lookups() {
        let store = TableStore::with_builtins();
        // Alias names resolve alongside canonical names.
        assert_eq!(store.alias_sequence_for(":thumbsup:"), Some("\u{1F44D}"));
        assert_eq!(store.alias_sequence_for(":thumbs_up:"), Some("\u{1F44D}"));
        // Alias pairs win the reverse direction.
        assert_eq!(store.alias_name_for("\u{1F44D}"), Some(":thumbsup:"));
    }

    #[test]
    fn test_alias_shadows_canonical_name() {
        let store = TableStore::with_builtins();
        // ":sunglasses:" is dark sunglasses in `en` but the smiling face in
        // the alias set.
        let en = store.get("en").unwrap();
        assert_eq!(en.sequence_for(":sunglasses:"), Some("\u{1F576}"));
        assert_eq!(store.alias_sequence_for(":sunglasses:"), Some("\u{1F60E}"));
    }

    #[test]
    fn test_put_new_language() {
        let mut store = TableStore::new();
        let mut table = LanguageTable::new("-");
        table.insert(":ok:", "\u{1F197}");

        store.put("xx", table, false).unwrap();
        assert!(store.contains("xx"));
        let xx = store.get("xx").unwrap();
        assert_eq!(xx.sticky_character(), "-");
        assert_eq!(xx.sequence_for(":ok:"), Some("\u{1F197}"));
    }

    #[test]
    fn test_put_existing_language_rejected() {
        let mut store = TableStore::with_builtins();
        let result = store.put("en", LanguageTable::new("_"), false);
        assert_eq!(
            result,
            Err(EmojiError::LanguageExists {
                language: "en".to_string()
            })
        );
        // Original table untouched.
        assert!(!store.get("en").unwrap().is_empty());
    }

    #[test]
    fn test_put_overwrite() {
        let mut store = TableStore::with_builtins();
        let mut table = LanguageTable::new("_");
        table.insert(":only:", "\u{1F600}");

        store.put("en", table, true).unwrap();
        assert_eq!(store.get("en").unwrap().len(), 1);
    }

    #[test]
    fn test_reverse_direction_last_write_wins() {
        let mut table = LanguageTable::new("_");
        table.insert(":first:", "\u{1F600}");
        table.insert(":second:", "\u{1F600}");

        assert_eq!(table.name_for("\u{1F600}"), Some(":second:"));
        // Both forward entries survive.
        assert_eq!(table.sequence_for(":first:"), Some("\u{1F600}"));
        assert_eq!(table.sequence_for(":second:"), Some("\u{1F600}"));
    }

    #[test]
    fn test_sequences_iterator() {
        let mut table = LanguageTable::new("_");
        table.insert(":a:", "\u{1F600}");
        table.insert(":b:", "\u{1F601}");

        let sequences: Vec<&str> = table.sequences().collect();
        assert_eq!(sequences.len(), 2);
        assert!(sequences.contains(&"\u{1F600}"));
        assert!(sequences.contains(&"\u{1F601}"));
    }
}
