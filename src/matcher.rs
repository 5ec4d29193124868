// emoji-codes Matcher Builder
// Compiles and caches the per-language emoji matching pattern

use crate::store::LanguageTable;
use crate::types::{EmojiError, EmojiPosition};
use regex::Regex;
use rustc_hash::FxHashMap;
use std::cell::RefCell;

/// A compiled pattern matching every emoji sequence of one language table
///
/// Sequences are sorted descending by code-point count before being joined
/// into a single alternation. The regex crate matches alternations in
/// preference order, so the longest applicable sequence always wins at each
/// position and multi-character sequences are never split into their
/// single-character prefixes.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    pattern: Regex,
    sequence_count: usize,
}

impl CompiledMatcher {
    /// Compile a matcher from the current contents of a language table
    pub fn compile(table: &LanguageTable) -> Result<Self, EmojiError> {
        let mut sequences: Vec<&str> = table.sequences().collect();
        sequences.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        let pattern = if sequences.is_empty() {
            // A table with no sequences must match nothing; an empty
            // alternation would match the empty string at every position.
            "$.".to_string()
        } else {
            let escaped: Vec<String> = sequences.iter().map(|s| regex::escape(s)).collect();
            format!("({})", escaped.join("|"))
        };

        let pattern = Regex::new(&pattern).map_err(|e| EmojiError::Pattern(e.to_string()))?;

        Ok(Self {
            pattern,
            sequence_count: sequences.len(),
        })
    }

    /// The underlying compiled pattern
    pub fn regex(&self) -> &Regex {
        &self.pattern
    }

    /// Number of sequences baked into this matcher
    pub fn sequence_count(&self) -> usize {
        self.sequence_count
    }

    /// Lazy left-to-right scan over all non-overlapping matches in `text`
    ///
    /// Each call starts a fresh scan.
    pub fn positions<'t>(&self, text: &'t str) -> EmojiPositions<'t> {
        EmojiPositions {
            pattern: self.pattern.clone(),
            text,
            at: 0,
        }
    }
}

/// Iterator over emoji matches in a string, yielding [`EmojiPosition`]s
#[derive(Debug, Clone)]
pub struct EmojiPositions<'t> {
    pattern: Regex,
    text: &'t str,
    at: usize,
}

impl<'t> Iterator for EmojiPositions<'t> {
    type Item = EmojiPosition;

    fn next(&mut self) -> Option<EmojiPosition> {
        if self.at > self.text.len() {
            return None;
        }
        match self.pattern.find_at(self.text, self.at) {
            Some(m) => {
                self.at = m.end();
                Some(EmojiPosition {
                    location: m.start(),
                    emoji: m.as_str().to_string(),
                })
            }
            None => {
                self.at = self.text.len() + 1;
                None
            }
        }
    }
}

/// Per-language memoization of compiled matchers
///
/// The first compilation for a language wins: later table mutations are NOT
/// reflected until [`invalidate`](MatcherCache::invalidate) is called
/// explicitly. Importing a language over an existing one therefore leaves a
/// previously compiled matcher stale; callers that need the new table must
/// invalidate first.
///
/// Interior mutability keeps lookups `&self`; the `RefCell` makes owners of
/// a cache `!Sync`, so cross-thread sharing requires an external lock.
#[derive(Debug, Default)]
pub struct MatcherCache {
    matchers: RefCell<FxHashMap<String, CompiledMatcher>>,
}

impl MatcherCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached matcher for `language`, compiling from `table` on
    /// first use
    pub fn get_or_compile(
        &self,
        language: &str,
        table: &LanguageTable,
    ) -> Result<CompiledMatcher, EmojiError> {
        if let Some(matcher) = self.matchers.borrow().get(language) {
            return Ok(matcher.clone());
        }
        let matcher = CompiledMatcher::compile(table)?;
        self.matchers
            .borrow_mut()
            .insert(language.to_string(), matcher.clone());
        Ok(matcher)
    }

    /// Drop the cached matcher for a language so the next use recompiles
    pub fn invalidate(&self, language: &str) {
        self.matchers.borrow_mut().remove(language);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> LanguageTable {
        let mut table = LanguageTable::new("_");
        for (name, sequence) in entries {
            table.insert(name, sequence);
        }
        table
    }

    #[test]
    fn test_compile_simple_table() {
        let matcher = CompiledMatcher::compile(&table(&[
            (":thumbs_up:", "\u{1F44D}"),
            (":fire:", "\u{1F525}"),
        ]))
        .unwrap();

        assert_eq!(matcher.sequence_count(), 2);
        assert!(matcher.regex().is_match("go \u{1F525}"));
        assert!(!matcher.regex().is_match("no emoji here"));
    }

    #[test]
    fn test_longest_sequence_preferred() {
        // The two-character skin-tone sequence shares its first character
        // with the bare thumbs up.
        let matcher = CompiledMatcher::compile(&table(&[
            (":thumbs_up:", "\u{1F44D}"),
            (":thumbs_up_light_skin_tone:", "\u{1F44D}\u{1F3FB}"),
        ]))
        .unwrap();

        let m = matcher.regex().find("\u{1F44D}\u{1F3FB}").unwrap();
        assert_eq!(m.as_str(), "\u{1F44D}\u{1F3FB}");
    }

    #[test]
    fn test_empty_table_matches_nothing() {
        let matcher = CompiledMatcher::compile(&table(&[])).unwrap();
        assert_eq!(matcher.sequence_count(), 0);
        assert!(!matcher.regex().is_match(""));
        assert!(!matcher.regex().is_match("plain text \u{1F44D}"));
    }

    #[test]
    fn test_positions_scan_order() {
        let matcher = CompiledMatcher::compile(&table(&[
            (":thumbs_up:", "\u{1F44D}"),
            (":fire:", "\u{1F525}"),
        ]))
        .unwrap();

        let text = "a \u{1F44D} b \u{1F525}";
        let positions: Vec<EmojiPosition> = matcher.positions(text).collect();

        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].emoji, "\u{1F44D}");
        assert_eq!(positions[0].location, 2);
        assert_eq!(positions[1].emoji, "\u{1F525}");
        assert_eq!(positions[1].location, text.len() - "\u{1F525}".len());
    }

    #[test]
    fn test_positions_restartable() {
        let matcher = CompiledMatcher::compile(&table(&[(":fire:", "\u{1F525}")])).unwrap();

        let text = "\u{1F525}\u{1F525}";
        assert_eq!(matcher.positions(text).count(), 2);
        // A second scan starts over.
        assert_eq!(matcher.positions(text).count(), 2);
    }

    #[test]
    fn test_cache_memoizes_first_compilation() {
        let cache = MatcherCache::new();
        let first = table(&[(":fire:", "\u{1F525}")]);
        let second = table(&[
            (":fire:", "\u{1F525}"),
            (":thumbs_up:", "\u{1F44D}"),
        ]);

        let matcher = cache.get_or_compile("xx", &first).unwrap();
        assert_eq!(matcher.sequence_count(), 1);

        // The richer table is ignored: first compilation wins.
        let matcher = cache.get_or_compile("xx", &second).unwrap();
        assert_eq!(matcher.sequence_count(), 1);
    }

    #[test]
    fn test_cache_invalidate_recompiles() {
        let cache = MatcherCache::new();
        let first = table(&[(":fire:", "\u{1F525}")]);
        let second = table(&[
            (":fire:", "\u{1F525}"),
            (":thumbs_up:", "\u{1F44D}"),
        ]);

        cache.get_or_compile("xx", &first).unwrap();
        cache.invalidate("xx");

        let matcher = cache.get_or_compile("xx", &second).unwrap();
        assert_eq!(matcher.sequence_count(), 2);
    }

    #[test]
    fn test_cache_keys_are_per_language() {
        let cache = MatcherCache::new();
        let one = table(&[(":fire:", "\u{1F525}")]);
        let two = table(&[
            (":fire:", "\u{1F525}"),
            (":thumbs_up:", "\u{1F44D}"),
        ]);

        assert_eq!(cache.get_or_compile("aa", &one).unwrap().sequence_count(), 1);
        assert_eq!(cache.get_or_compile("bb", &two).unwrap().sequence_count(), 2);
    }
}
