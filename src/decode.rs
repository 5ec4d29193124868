// emoji-codes Decoder
// Replaces unicode emoji sequences in text with delimiter-wrapped shortcodes

use crate::matcher::CompiledMatcher;
use crate::store::TableStore;
use crate::types::{DemojizeOptions, EmojiError, DEFAULT_DELIMITER};
use regex::Captures;

/// Replace every known emoji sequence in `text` with its shortcode
///
/// Names are stored joined by the language's own sticky character; the
/// output re-joins the words with the requested `sticky_character` and wraps
/// them in the configured delimiters. A matched sequence missing from the
/// table (possible when the matcher outlived a table mutation) passes
/// through verbatim. Residual `\u{FE0F}` presentation selectors are stripped
/// from the final result; variant selectors are not preserved in shortcode
/// form.
pub fn demojize(
    store: &TableStore,
    matcher: &CompiledMatcher,
    text: &str,
    options: &DemojizeOptions,
) -> Result<String, EmojiError> {
    let table = store.get(&options.language)?;
    let default_sticky = table.sticky_character();
    let (open, close) = (&options.delimiters.0, &options.delimiters.1);

    let replaced = matcher.regex().replace_all(text, |caps: &Captures| {
        let matched = &caps[0];

        let name = if options.use_aliases {
            store.alias_name_for(matched)
        } else {
            table.name_for(matched)
        };

        match name {
            Some(name) => {
                let joined = name
                    .split(default_sticky)
                    .collect::<Vec<&str>>()
                    .join(&options.sticky_character);
                let inner = joined.strip_prefix(DEFAULT_DELIMITER).unwrap_or(&joined);
                let inner = inner.strip_suffix(DEFAULT_DELIMITER).unwrap_or(inner);
                format!("{}{}{}", open, inner, close)
            }
            None => matched.to_string(),
        }
    });

    Ok(replaced.replace('\u{FE0F}', ""))
}
