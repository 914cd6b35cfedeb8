//! Diacritic transliteration.
//!
//! A fixed lookup covering the letters of the two supported input locales
//! (Polish and Spanish). Anything outside the table passes through
//! unchanged, so the function is total and never fails.

/// Map a diacritic letter to its ASCII equivalent.
///
/// The translator applies this once per character after lower-casing, but
/// the table keeps upper-case entries so the function stands on its own.
pub fn to_latin(c: char) -> char {
    match c {
        // Polish
        'ą' => 'a',
        'ć' => 'c',
        'ę' => 'e',
        'ł' => 'l',
        'ń' => 'n',
        'ś' => 's',
        'ź' => 'z',
        'ż' => 'z',
        'Ą' => 'A',
        'Ć' => 'C',
        'Ę' => 'E',
        'Ł' => 'L',
        'Ń' => 'N',
        'Ś' => 'S',
        'Ź' => 'Z',
        'Ż' => 'Z',
        // Spanish
        'á' => 'a',
        'é' => 'e',
        'í' => 'i',
        'ó' => 'o',
        'ú' => 'u',
        'ü' => 'u',
        'ñ' => 'n',
        'Á' => 'A',
        'É' => 'E',
        'Í' => 'I',
        'Ó' => 'O',
        'Ú' => 'U',
        'Ü' => 'U',
        'Ñ' => 'N',
        _ => c,
    }
}
