// emoji-codes Table Importer
// Installs externally supplied annotation data as a new language table

use crate::store::{LanguageTable, TableStore};
use crate::types::{AnnotationEntry, EmojiError, DEFAULT_DELIMITER};

/// Join annotation name tokens into a stored, delimiter-wrapped name
pub fn annotation_name(tokens: &str, sticky_character: &str) -> String {
    let joined = tokens
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(sticky_character);
    format!("{}{}{}", DEFAULT_DELIMITER, joined, DEFAULT_DELIMITER)
}

/// Build a language table from annotation entries and install it
///
/// Validation happens before any write: importing into an occupied language
/// slot requires `force_import`, and the sticky character must be non-empty
/// (an empty one would corrupt name joining and later splitting). The store
/// either gains the complete table or stays untouched.
///
/// A matcher compiled for `language` before this call is NOT invalidated;
/// see [`MatcherCache`](crate::matcher::MatcherCache).
pub fn import_annotations(
    store: &mut TableStore,
    entries: &[AnnotationEntry],
    language: &str,
    force_import: bool,
    sticky_character: &str,
) -> Result<(), EmojiError> {
    if !force_import && store.contains(language) {
        return Err(EmojiError::LanguageExists {
            language: language.to_string(),
        });
    }
    if sticky_character.is_empty() {
        return Err(EmojiError::InvalidStickyCharacter);
    }

    let mut table = LanguageTable::new(sticky_character);
    for entry in entries {
        let name = annotation_name(&entry.tokens, sticky_character);
        table.insert(&name, &entry.sequence);
    }

    store.put(language, table, force_import)
}
