// Morse symbol table - Russian alphabet
// Е and Ё share a pattern; only Е is listed
use crate::types::MorseSymbol;

pub type MorsePattern = &'static [MorseSymbol];

const DOT: MorseSymbol = MorseSymbol::Dot;
const DASH: MorseSymbol = MorseSymbol::Dash;

const PATTERN_A: MorsePattern = &[DOT, DASH]; // А .-
const PATTERN_BE: MorsePattern = &[DASH, DOT, DOT, DOT]; // Б -...
const PATTERN_VE: MorsePattern = &[DOT, DASH, DASH]; // В .--
const PATTERN_GE: MorsePattern = &[DASH, DASH, DOT]; // Г --.
const PATTERN_DE: MorsePattern = &[DASH, DOT, DOT]; // Д -..
const PATTERN_YE: MorsePattern = &[DOT]; // Е .
const PATTERN_ZHE: MorsePattern = &[DOT, DOT, DOT, DASH]; // Ж ...-
const PATTERN_ZE: MorsePattern = &[DASH, DASH, DOT, DOT]; // З --..
const PATTERN_I: MorsePattern = &[DOT, DOT]; // И ..
const PATTERN_SHORT_I: MorsePattern = &[DOT, DASH, DASH, DASH]; // Й .---
const PATTERN_KA: MorsePattern = &[DASH, DOT, DASH]; // К -.-
const PATTERN_EL: MorsePattern = &[DOT, DASH, DOT, DOT]; // Л .-..
const PATTERN_EM: MorsePattern = &[DASH, DASH]; // М --
const PATTERN_EN: MorsePattern = &[DASH, DOT]; // Н -.
const PATTERN_O: MorsePattern = &[DASH, DASH, DASH]; // О ---
const PATTERN_PE: MorsePattern = &[DOT, DASH, DASH, DOT]; // П .--.
const PATTERN_ER: MorsePattern = &[DOT, DASH, DOT]; // Р .-.
const PATTERN_ES: MorsePattern = &[DOT, DOT, DOT]; // С ...
const PATTERN_TE: MorsePattern = &[DASH]; // Т -
const PATTERN_U: MorsePattern = &[DOT, DOT, DASH]; // У ..-
const PATTERN_EF: MorsePattern = &[DOT, DOT, DASH, DOT]; // Ф ..-.
const PATTERN_KHA: MorsePattern = &[DOT, DOT, DOT, DOT]; // Х ....
const PATTERN_TSE: MorsePattern = &[DASH, DOT, DASH, DOT]; // Ц -.-.
const PATTERN_CHE: MorsePattern = &[DASH, DASH, DASH, DOT]; // Ч ---.
const PATTERN_SHA: MorsePattern = &[DASH, DASH, DASH, DASH]; // Ш ----
const PATTERN_SHCHA: MorsePattern = &[DASH, DASH, DOT, DASH]; // Щ --.-
const PATTERN_HARD_SIGN: MorsePattern = &[DASH, DASH, DOT, DASH, DASH]; // Ъ --.--
const PATTERN_YERY: MorsePattern = &[DASH, DOT, DASH, DASH]; // Ы -.--
const PATTERN_SOFT_SIGN: MorsePattern = &[DASH, DOT, DOT, DASH]; // Ь -..-
const PATTERN_E: MorsePattern = &[DOT, DOT, DASH, DOT, DOT]; // Э ..-..
const PATTERN_YU: MorsePattern = &[DOT, DOT, DASH, DASH]; // Ю ..--
const PATTERN_YA: MorsePattern = &[DOT, DASH, DOT, DASH]; // Я .-.-

pub static SYMBOL_TABLE: [(MorsePattern, char); 32] = [
    (PATTERN_A, 'А'),
    (PATTERN_BE, 'Б'),
    (PATTERN_VE, 'В'),
    (PATTERN_GE, 'Г'),
    (PATTERN_DE, 'Д'),
    (PATTERN_YE, 'Е'),
    (PATTERN_ZHE, 'Ж'),
    (PATTERN_ZE, 'З'),
    (PATTERN_I, 'И'),
    (PATTERN_SHORT_I, 'Й'),
    (PATTERN_KA, 'К'),
    (PATTERN_EL, 'Л'),
    (PATTERN_EM, 'М'),
    (PATTERN_EN, 'Н'),
    (PATTERN_O, 'О'),
    (PATTERN_PE, 'П'),
    (PATTERN_ER, 'Р'),
    (PATTERN_ES, 'С'),
    (PATTERN_TE, 'Т'),
    (PATTERN_U, 'У'),
    (PATTERN_EF, 'Ф'),
    (PATTERN_KHA, 'Х'),
    (PATTERN_TSE, 'Ц'),
    (PATTERN_CHE, 'Ч'),
    (PATTERN_SHA, 'Ш'),
    (PATTERN_SHCHA, 'Щ'),
    (PATTERN_HARD_SIGN, 'Ъ'),
    (PATTERN_YERY, 'Ы'),
    (PATTERN_SOFT_SIGN, 'Ь'),
    (PATTERN_E, 'Э'),
    (PATTERN_YU, 'Ю'),
    (PATTERN_YA, 'Я'),
];

/// Resolve a symbol sequence to its character, if the table has one
pub fn lookup(symbols: &[MorseSymbol]) -> Option<char> {
    SYMBOL_TABLE
        .iter()
        .find(|(pattern, _)| *pattern == symbols)
        .map(|&(_, ch)| ch)
}

/// Get the pattern for a character. Case-insensitive; Ё maps to Е.
pub fn get_morse_pattern(ch: char) -> Option<MorsePattern> {
    let upper = match ch {
        'ё' | 'Ё' => 'Е',
        other => other.to_uppercase().next().unwrap_or(other),
    };
    SYMBOL_TABLE
        .iter()
        .find(|&&(_, entry)| entry == upper)
        .map(|&(pattern, _)| pattern)
}
