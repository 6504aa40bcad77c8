use crate::types::TickLevel;

// Analyser frames carry byte magnitudes per frequency bin; the tone lands in
// bin 1 at the original 32-point FFT size.
const TONE_BIN: usize = 1;
const BIN_SCALE: f32 = 0.2;

/// Classify one amplitude reading. Strictly greater than the threshold is
/// active; there is no hysteresis. Non-finite readings count as silence.
pub fn classify(amplitude: f32, threshold: f32) -> TickLevel {
    if !amplitude.is_finite() {
        return TickLevel::Idle;
    }
    TickLevel::from(amplitude > threshold)
}

/// Derive the amplitude scalar from an analyser byte-frequency frame.
/// Returns `None` for frames too short to contain the tone bin.
pub fn spectrum_peak(bins: &[u8]) -> Option<f32> {
    bins.get(TONE_BIN).map(|&level| level as f32 * BIN_SCALE)
}
