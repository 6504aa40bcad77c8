use crate::patterns::lookup;
use crate::types::*;

const SYMBOL_DELIMITER: char = ' ';

/// Classify the length of one mark. Runs that are neither a dot nor a dash
/// within tolerance contribute nothing.
pub fn classify_run(run_ticks: u32, config: &DecoderConfig) -> Option<MorseSymbol> {
    // Signed so a tolerance wider than the dot cannot underflow
    let run = i64::from(run_ticks);
    let dot = i64::from(config.dot_duration_ticks);
    let dash = i64::from(config.dash_duration_ticks);
    let tolerance = i64::from(config.tolerance_ticks);

    if run > dot - tolerance && run < dot + tolerance {
        Some(MorseSymbol::Dot)
    } else if run > dash - tolerance {
        Some(MorseSymbol::Dash)
    } else {
        None
    }
}

/// Scan a trimmed tick history left to right and classify every mark.
/// A mark ends at an idle tick or at the end of the history.
pub fn classify_runs(bits: &[bool], config: &DecoderConfig) -> Vec<MorseSymbol> {
    let mut symbols = Vec::new();
    let mut run = 0u32;

    for &bit in bits.iter().chain(std::iter::once(&false)) {
        if bit {
            run += 1;
            continue;
        }
        if run > 0 {
            match classify_run(run, config) {
                Some(symbol) => symbols.push(symbol),
                None => log::debug!("dropping ambiguous mark of {} ticks", run),
            }
        }
        run = 0;
    }

    symbols
}

/// Render symbols as the display pattern, e.g. `"· −"`
pub fn render_symbols(symbols: &[MorseSymbol]) -> String {
    let mut rendered = String::with_capacity(symbols.len() * 4);
    for (i, symbol) in symbols.iter().enumerate() {
        if i > 0 {
            rendered.push(SYMBOL_DELIMITER);
        }
        rendered.push(symbol.glyph());
    }
    rendered
}

/// Decode one trimmed character history. Unmatched patterns are passed
/// through verbatim as the character text.
pub fn decode_bits(trimmed: &[bool], config: &DecoderConfig) -> DecodedCharacter {
    let symbols = classify_runs(trimmed, config);
    let pattern = render_symbols(&symbols);

    let (text, recognized) = match lookup(&symbols) {
        Some(ch) => (ch.to_string(), true),
        None => (pattern.clone(), false),
    };

    log::debug!("decoded {:?} from pattern {:?}", text, pattern);

    DecodedCharacter {
        text,
        pattern,
        symbols,
        recognized,
        mark_ticks: trimmed.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks(runs: &[(u32, u32)]) -> Vec<bool> {
        // (active ticks, idle ticks after)
        let mut bits = Vec::new();
        for &(on, off) in runs {
            bits.extend(std::iter::repeat(true).take(on as usize));
            bits.extend(std::iter::repeat(false).take(off as usize));
        }
        bits
    }

    #[test]
    fn test_dot_bounds_are_exclusive() {
        let config = DecoderConfig::default();
        assert_eq!(classify_run(12, &config), None);
        assert_eq!(classify_run(13, &config), Some(MorseSymbol::Dot));
        assert_eq!(classify_run(22, &config), Some(MorseSymbol::Dot));
        assert_eq!(classify_run(31, &config), Some(MorseSymbol::Dot));
        assert_eq!(classify_run(32, &config), None);
    }

    #[test]
    fn test_dash_lower_bound_is_exclusive() {
        let config = DecoderConfig::default();
        assert_eq!(classify_run(66, &config), None);
        assert_eq!(classify_run(67, &config), Some(MorseSymbol::Dash));
        assert_eq!(classify_run(500, &config), Some(MorseSymbol::Dash));
    }

    #[test]
    fn test_ambiguous_run_is_dropped() {
        let config = DecoderConfig::default();
        assert_eq!(classify_run(50, &config), None);

        let decoded = decode_bits(&marks(&[(50, 0)]), &config);
        assert_eq!(decoded.text, "");
        assert_eq!(decoded.pattern, "");
        assert!(!decoded.recognized);
        assert_eq!(decoded.mark_ticks, 50);
    }

    #[test]
    fn test_wide_tolerance_does_not_underflow() {
        let config = DecoderConfig {
            dot_duration_ticks: 3,
            dash_duration_ticks: 9,
            tolerance_ticks: 10,
            ..Default::default()
        };
        assert_eq!(classify_run(1, &config), Some(MorseSymbol::Dot));
    }

    #[test]
    fn test_final_run_terminated_by_end() {
        let config = DecoderConfig::default();
        let symbols = classify_runs(&marks(&[(22, 10), (76, 0)]), &config);
        assert_eq!(symbols, vec![MorseSymbol::Dot, MorseSymbol::Dash]);
    }

    #[test]
    fn test_render_symbols() {
        assert_eq!(render_symbols(&[]), "");
        assert_eq!(render_symbols(&[MorseSymbol::Dot]), "·");
        assert_eq!(
            render_symbols(&[MorseSymbol::Dash, MorseSymbol::Dot, MorseSymbol::Dot]),
            "− · ·"
        );
    }

    #[test]
    fn test_decode_known_character() {
        let config = DecoderConfig::default();
        // А = .-
        let decoded = decode_bits(&marks(&[(22, 10), (76, 0)]), &config);
        assert_eq!(decoded.text, "А");
        assert_eq!(decoded.pattern, "· −");
        assert!(decoded.recognized);
    }

    #[test]
    fn test_unmatched_pattern_passes_through() {
        let config = DecoderConfig::default();
        // ..... is not in the table
        let bits = marks(&[(22, 5), (22, 5), (22, 5), (22, 5), (22, 0)]);
        let decoded = decode_bits(&bits, &config);
        assert_eq!(decoded.text, "· · · · ·");
        assert_eq!(decoded.pattern, decoded.text);
        assert!(!decoded.recognized);
    }

    #[test]
    fn test_dropped_run_shortens_pattern() {
        let config = DecoderConfig::default();
        // Intended Я (.-.-) with the second dot held too long
        let bits = marks(&[(22, 5), (76, 5), (50, 5), (76, 0)]);
        let decoded = decode_bits(&bits, &config);
        assert_eq!(decoded.pattern, "· − −");
        assert_eq!(decoded.text, "В");
    }

    #[test]
    fn test_decoding_is_idempotent() {
        let config = DecoderConfig::default();
        let bits = marks(&[(76, 8), (22, 8), (76, 0)]);
        let first = decode_bits(&bits, &config);
        let second = decode_bits(&bits, &config);
        assert_eq!(first, second);
        assert_eq!(first.text, "К");
    }
}
