// emoji-codes Encoder
// Replaces delimiter-wrapped shortcodes in text with unicode sequences

use crate::store::TableStore;
use crate::types::{EmojiError, EmojizeOptions, DEFAULT_DELIMITER};
use regex::{Captures, Regex};

/// Characters allowed inside a shortcode token, between the delimiters.
///
/// Beyond ASCII word characters this covers the punctuation and accented
/// Latin letters that occur in canonical names (":T-Rex:", ":keycap_#:",
/// ":São_Tomé_&_Príncipe:", ":Côte_d’Ivoire:", ":ON!_arrow:").
const TOKEN_CLASS: &str = "[a-zA-Z0-9+\\-_&.ô’Åéãíç()!#*]";

/// Build the scan pattern matching one delimiter-wrapped shortcode token
pub fn shortcode_pattern(delimiters: &(String, String)) -> Result<Regex, EmojiError> {
    let pattern = format!(
        "({}{}+{})",
        regex::escape(&delimiters.0),
        TOKEN_CLASS,
        regex::escape(&delimiters.1)
    );
    Regex::new(&pattern).map_err(|e| EmojiError::Pattern(e.to_string()))
}

/// Replace every resolvable shortcode in `text` with its emoji sequence
///
/// Tokens are normalized to the canonical `:` delimiter before lookup, so
/// caller-supplied delimiters never leak into table keys. Unresolvable
/// tokens pass through unchanged; the variant selector is appended only to
/// resolved sequences.
pub fn emojize(
    store: &TableStore,
    text: &str,
    options: &EmojizeOptions,
) -> Result<String, EmojiError> {
    // Resolve the language up front: an unknown language is an error even
    // when lookups would go through the alias table.
    let table = store.get(&options.language)?;
    let pattern = shortcode_pattern(&options.delimiters)?;
    let (open, close) = (&options.delimiters.0, &options.delimiters.1);

    let result = pattern.replace_all(text, |caps: &Captures| {
        let token = caps[1]
            .replace(open.as_str(), DEFAULT_DELIMITER)
            .replace(close.as_str(), DEFAULT_DELIMITER);

        let resolved = if options.use_aliases {
            store.alias_sequence_for(&token)
        } else {
            table.sequence_for(&token)
        };

        match resolved {
            Some(sequence) => match options.variant.selector() {
                Some(selector) => format!("{}{}", sequence, selector),
                None => sequence.to_string(),
            },
            None => caps[1].to_string(),
        }
    });

    Ok(result.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Variant;

    fn store() -> TableStore {
        TableStore::with_builtins()
    }

    #[test]
    fn test_basic_encode() {
        let result = emojize(&store(), "Rust is fun :thumbs_up:", &EmojizeOptions::default());
        assert_eq!(result.unwrap(), "Rust is fun \u{1F44D}");
    }

    #[test]
    fn test_unknown_token_passes_through() {
        let text = "Hello :not_a_real_emoji:";
        let result = emojize(&store(), text, &EmojizeOptions::default());
        assert_eq!(result.unwrap(), text);
    }

    #[test]
    fn test_no_tokens_is_identity() {
        let text = "no shortcodes at all";
        let result = emojize(&store(), text, &EmojizeOptions::default());
        assert_eq!(result.unwrap(), text);
    }

    #[test]
    fn test_custom_delimiters() {
        let options = EmojizeOptions::default().with_delimiters("__", "__");
        let result = emojize(&store(), "fun __thumbs_up__", &options);
        assert_eq!(result.unwrap(), "fun \u{1F44D}");
    }

    #[test]
    fn test_custom_delimiters_unknown_token_keeps_original() {
        let options = EmojizeOptions::default().with_delimiters("__", "__");
        let result = emojize(&store(), "fun __mystery__", &options);
        assert_eq!(result.unwrap(), "fun __mystery__");
    }

    #[test]
    fn test_aliases() {
        let options = EmojizeOptions::default().with_aliases(true);
        let result = emojize(&store(), "ship it :thumbsup:", &options);
        assert_eq!(result.unwrap(), "ship it \u{1F44D}");
    }

    #[test]
    fn test_alias_lookup_skips_canonical_only_when_disabled() {
        // ":thumbsup:" only exists in the alias table.
        let result = emojize(&store(), ":thumbsup:", &EmojizeOptions::default());
        assert_eq!(result.unwrap(), ":thumbsup:");
    }

    #[test]
    fn test_variant_markers() {
        let emoji = emojize(
            &store(),
            ":red_heart:",
            &EmojizeOptions::default().with_variant(Variant::EmojiType),
        );
        assert_eq!(emoji.unwrap(), "\u{2764}\u{FE0F}");

        let text = emojize(
            &store(),
            ":red_heart:",
            &EmojizeOptions::default().with_variant(Variant::TextType),
        );
        assert_eq!(text.unwrap(), "\u{2764}\u{FE0E}");
    }

    #[test]
    fn test_variant_not_appended_to_unresolved_tokens() {
        let options = EmojizeOptions::default().with_variant(Variant::EmojiType);
        let result = emojize(&store(), ":mystery:", &options);
        assert_eq!(result.unwrap(), ":mystery:");
    }

    #[test]
    fn test_punctuated_names() {
        let result = emojize(&store(), "dig site: :T-Rex:", &EmojizeOptions::default());
        assert_eq!(result.unwrap(), "dig site: \u{1F996}");

        let result = emojize(&store(), ":keycap_#:", &EmojizeOptions::default());
        assert_eq!(result.unwrap(), "#\u{FE0F}\u{20E3}");

        let result = emojize(&store(), ":São_Tomé_&_Príncipe:", &EmojizeOptions::default());
        assert_eq!(result.unwrap(), "\u{1F1F8}\u{1F1F9}");
    }

    #[test]
    fn test_multiple_tokens() {
        let result = emojize(
            &store(),
            ":fire: and :snowflake: together",
            &EmojizeOptions::default(),
        );
        assert_eq!(result.unwrap(), "\u{1F525} and \u{2744} together");
    }

    #[test]
    fn test_unknown_language() {
        let options = EmojizeOptions::default().with_language("xx");
        let result = emojize(&store(), ":thumbs_up:", &options);
        assert_eq!(
            result,
            Err(EmojiError::UnknownLanguage {
                language: "xx".to_string()
            })
        );
    }
}
