// Live Morse code decoding from an amplitude stream
// Threshold -> run accumulation -> letter boundary -> pattern lookup

pub mod accumulator;
pub mod interpret;
pub mod listener;
pub mod patterns;
pub mod sampler;
pub mod segmenter;
pub mod timing;
pub mod types;

// Re-export main public API
pub use accumulator::{BoundaryPolicy, RunCounters, LETTER_BOUNDARY_SILENCE_GAPS};
pub use interpret::decode_bits;
pub use listener::{CharacterSink, MorseListener, Transcript};
pub use timing::{character_ticks, text_ticks};
pub use types::*;

/// Run a fresh listener over a whole stream of classified ticks
pub fn decode_ticks(levels: &[TickLevel], config: &DecoderConfig) -> Vec<DecodedCharacter> {
    let mut listener = MorseListener::new(config.clone());
    levels
        .iter()
        .filter_map(|&level| listener.step(level))
        .collect()
}

/// Run a fresh listener over a whole stream of amplitude readings
pub fn decode_amplitudes(amplitudes: &[f32], config: &DecoderConfig) -> Vec<DecodedCharacter> {
    let mut listener = MorseListener::new(config.clone());
    amplitudes
        .iter()
        .filter_map(|&amplitude| listener.process(amplitude))
        .collect()
}
