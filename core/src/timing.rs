use crate::patterns::get_morse_pattern;
use crate::types::{DecoderConfig, MorseSymbol};

/// Idle ticks between marks of one character. Kept below the letter spacing
/// so intra-character gaps never count as a silence block.
pub fn intra_gap_ticks(config: &DecoderConfig) -> u32 {
    config
        .dot_duration_ticks
        .min(config.letter_spacing_ticks.saturating_sub(1))
        .max(1)
}

fn push_run(ticks: &mut Vec<bool>, active: bool, count: u32) {
    ticks.extend(std::iter::repeat(active).take(count as usize));
}

/// Ideal tick history for one character: leading silence, marks, trailing
/// silence. With the default boundary policy a listener emits the character
/// on the last tick.
pub fn character_ticks(ch: char, config: &DecoderConfig) -> Result<Vec<bool>, String> {
    let pattern =
        get_morse_pattern(ch).ok_or_else(|| format!("No Morse pattern for character {:?}", ch))?;

    let spacing = config.letter_spacing_ticks;
    let gap = intra_gap_ticks(config);
    let mut ticks = Vec::new();

    push_run(&mut ticks, false, spacing);
    for (i, &symbol) in pattern.iter().enumerate() {
        let mark = match symbol {
            MorseSymbol::Dot => config.dot_duration_ticks,
            MorseSymbol::Dash => config.dash_duration_ticks,
        };
        push_run(&mut ticks, true, mark);

        // Add inter-element gap (except after last element)
        if i < pattern.len() - 1 {
            push_run(&mut ticks, false, gap);
        }
    }
    push_run(&mut ticks, false, spacing);

    Ok(ticks)
}

/// Tick history for a run of characters. Whitespace is skipped since words
/// are not delimited.
pub fn text_ticks(text: &str, config: &DecoderConfig) -> Result<Vec<bool>, String> {
    let mut ticks = Vec::new();
    for ch in text.chars().filter(|c| !c.is_whitespace()) {
        ticks.extend(character_ticks(ch, config)?);
    }
    Ok(ticks)
}
