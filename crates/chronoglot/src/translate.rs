//! Keyword translation.
//!
//! Rewrites Polish and Spanish date/time vocabulary into the canonical
//! English tokens the extractor cascade understands. The input is
//! lower-cased and transliterated first, then rewritten in a single
//! left-to-right pass with one boundary-anchored alternation built once
//! from the static table. Produced text is never re-scanned, so a value
//! that happens to equal another key ("weekend") cannot cascade.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::latin::to_latin;

/// Ordered token table: foreign token -> canonical English token.
///
/// Declaration order resolves overlapping keys, not longest match:
/// "o polnocy" and "polnocy" must come before "o" and "polnoc".
/// Keys may contain embedded spaces; they match as whole words only.
const KEYWORDS: &[(&str, &str)] = &[
    // Polish: anchors and weekdays
    ("teraz", "now"),
    ("dzisiaj", "today"),
    ("dzis", "today"),
    ("jutro", "tomorrow"),
    ("wczoraj", "yesterday"),
    ("poniedzialek", "monday"),
    ("wtorek", "tuesday"),
    ("srode", "wednesday"),
    ("sroda", "wednesday"),
    ("czwartek", "thursday"),
    ("piatek", "friday"),
    ("sobote", "saturday"),
    ("sobota", "saturday"),
    ("niedziele", "sunday"),
    ("niedziela", "sunday"),
    // Polish: months, genitive before nominative
    ("stycznia", "january"),
    ("styczen", "january"),
    ("lutego", "february"),
    ("luty", "february"),
    ("marca", "march"),
    ("marzec", "march"),
    ("kwietnia", "april"),
    ("kwiecien", "april"),
    ("maja", "may"),
    ("maj", "may"),
    ("czerwca", "june"),
    ("czerwiec", "june"),
    ("lipca", "july"),
    ("lipiec", "july"),
    ("sierpnia", "august"),
    ("sierpien", "august"),
    ("wrzesnia", "september"),
    ("wrzesien", "september"),
    ("pazdziernika", "october"),
    ("pazdziernik", "october"),
    ("listopada", "november"),
    ("listopad", "november"),
    ("grudnia", "december"),
    ("grudzien", "december"),
    // Polish: modifiers and named times
    ("przyszly", "next"),
    ("przyszla", "next"),
    ("nastepny", "next"),
    ("nastepna", "next"),
    ("zeszly", "last"),
    ("zeszla", "last"),
    ("ostatni", "last"),
    ("poprzedni", "last"),
    ("rano", "morning"),
    ("w poludnie", "noon"),
    ("poludnie", "noon"),
    ("po poludniu", "afternoon"),
    ("popoludniu", "afternoon"),
    ("wieczorem", "evening"),
    ("wieczor", "evening"),
    ("w nocy", "night"),
    ("noca", "night"),
    ("o polnocy", "midnight"),
    ("polnocy", "midnight"),
    ("polnoc", "midnight"),
    ("o", "at"),
    // Spanish: anchors and weekdays
    ("ahora", "now"),
    ("hoy", "today"),
    ("manana", "tomorrow"),
    ("ayer", "yesterday"),
    ("lunes", "monday"),
    ("martes", "tuesday"),
    ("miercoles", "wednesday"),
    ("jueves", "thursday"),
    ("viernes", "friday"),
    ("sabado", "saturday"),
    ("domingo", "sunday"),
    // Spanish: months
    ("enero", "january"),
    ("febrero", "february"),
    ("marzo", "march"),
    ("abril", "april"),
    ("mayo", "may"),
    ("junio", "june"),
    ("julio", "july"),
    ("agosto", "august"),
    ("septiembre", "september"),
    ("octubre", "october"),
    ("noviembre", "november"),
    ("diciembre", "december"),
    // Spanish: modifiers and named times
    ("proximo", "next"),
    ("proxima", "next"),
    ("que viene", "next"),
    ("pasado", "last"),
    ("pasada", "last"),
    ("ultimo", "last"),
    ("ultima", "last"),
    ("mediodia", "noon"),
    ("medianoche", "midnight"),
    ("tarde", "afternoon"),
    ("noche", "night"),
    ("a las", "at"),
    ("a la", "at"),
];

static KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = KEYWORDS
        .iter()
        .map(|(key, _)| regex::escape(key))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b")).unwrap()
});

/// Translate a raw phrase into the canonical extractor vocabulary.
///
/// Lower-cases, transliterates via [`to_latin`], then substitutes every
/// whole-word occurrence of a table key with its English value. Words
/// outside the table pass through untouched, which is what keeps mixed
/// inputs like "kino o 15" usable.
pub fn translate(raw: &str) -> String {
    let folded: String = raw.to_lowercase().chars().map(to_latin).collect();
    KEYWORD_RE
        .replace_all(&folded, |caps: &Captures<'_>| {
            canonical(caps.get(0).map_or("", |m| m.as_str())).to_string()
        })
        .into_owned()
}

/// Look a matched token up in the table; table order decides ties.
fn canonical(token: &str) -> &str {
    KEYWORDS
        .iter()
        .find(|(key, _)| *key == token)
        .map_or(token, |(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_lowercases() {
        assert_eq!(translate("Jutro"), "tomorrow");
        assert_eq!(translate("MANANA"), "tomorrow");
    }

    #[test]
    fn test_translate_folds_diacritics_first() {
        assert_eq!(translate("środa"), "wednesday");
        assert_eq!(translate("sábado"), "saturday");
        assert_eq!(translate("mañana"), "tomorrow");
        assert_eq!(translate("październik"), "october");
    }

    #[test]
    fn test_keys_only_match_whole_words() {
        // "o" is a table key; the "o"s inside "kino" must survive.
        assert_eq!(translate("kino o 15"), "kino at 15");
    }

    #[test]
    fn test_embedded_space_keys() {
        assert_eq!(translate("manana a las 14:30"), "tomorrow at 14:30");
        assert_eq!(translate("lunes que viene"), "monday next");
    }

    #[test]
    fn test_declaration_order_beats_short_key() {
        // "o polnocy" precedes "o" in the table; "at polnocy" would be wrong.
        assert_eq!(translate("o polnocy"), "midnight");
    }

    #[test]
    fn test_genitive_month_not_split_by_nominative_key() {
        assert_eq!(translate("5 stycznia 2025"), "5 january 2025");
        assert_eq!(translate("pazdziernika"), "october");
    }

    #[test]
    fn test_english_input_passes_through() {
        assert_eq!(
            translate("next monday at 14:30"),
            "next monday at 14:30"
        );
    }

    #[test]
    fn test_output_is_not_rescanned() {
        // "dzisiaj" -> "today"; if the pass re-scanned its own output a
        // second table hit could corrupt it. One pass, one rewrite.
        assert_eq!(translate("dzisiaj wieczorem"), "today evening");
    }

    #[test]
    fn test_mixed_language_phrase() {
        assert_eq!(translate("proximo viernes rano"), "next friday morning");
    }
}
