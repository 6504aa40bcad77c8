use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MorseSymbol {
    Dot,
    Dash,
}

impl MorseSymbol {
    /// Glyph used when rendering a symbol string
    pub fn glyph(self) -> char {
        match self {
            MorseSymbol::Dot => '·',
            MorseSymbol::Dash => '−',
        }
    }
}

/// Binary classification of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickLevel {
    Active,
    Idle,
}

impl TickLevel {
    pub fn is_active(self) -> bool {
        self == TickLevel::Active
    }
}

impl From<bool> for TickLevel {
    fn from(active: bool) -> Self {
        if active {
            TickLevel::Active
        } else {
            TickLevel::Idle
        }
    }
}

/// Where the listener is in its per-character cycle between ticks.
/// Decoding and emission happen inside the tick that detects the boundary,
/// so they are never observable from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListenerPhase {
    IdleWait,
    Accumulating,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecoderConfig {
    pub amplitude_threshold: f32,
    pub dot_duration_ticks: u32,
    pub dash_duration_ticks: u32,
    pub letter_spacing_ticks: u32,
    pub tolerance_ticks: u32,
    /// Sampling period the host timer should use. The core counts ticks and
    /// never reads this.
    pub tick_interval_ms: u32,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            amplitude_threshold: 50.0,
            dot_duration_ticks: 22,
            dash_duration_ticks: 76,
            letter_spacing_ticks: 22,
            tolerance_ticks: 10,
            tick_interval_ms: 1000,
        }
    }
}

impl DecoderConfig {
    /// Report values that will degrade classification. Nothing is rejected:
    /// callers apply the config regardless and may surface the message.
    pub fn validate(&self) -> Result<(), String> {
        if self.dot_duration_ticks == 0 {
            return Err("dotDurationTicks must be greater than zero".to_string());
        }
        if self.dash_duration_ticks <= self.dot_duration_ticks {
            return Err(format!(
                "dashDurationTicks ({}) must exceed dotDurationTicks ({})",
                self.dash_duration_ticks, self.dot_duration_ticks
            ));
        }
        if self.letter_spacing_ticks == 0 {
            return Err("letterSpacingTicks must be greater than zero".to_string());
        }
        if !self.amplitude_threshold.is_finite() {
            return Err("amplitudeThreshold must be a finite number".to_string());
        }
        Ok(())
    }
}

/// One completed character as handed to the output sinks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedCharacter {
    /// Resolved character, or the raw pattern when the table has no match
    pub text: String,
    pub pattern: String,
    pub symbols: Vec<MorseSymbol>,
    pub recognized: bool,
    /// Length of the trimmed tick buffer the character was decoded from
    pub mark_ticks: usize,
}

impl DecodedCharacter {
    /// Text handed to speech synthesis
    pub fn spoken(&self) -> String {
        self.text.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_json_defaults() {
        let config: DecoderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DecoderConfig::default());

        let json = r#"{"amplitudeThreshold": 35, "letterSpacingTicks": 30}"#;
        let config: DecoderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.amplitude_threshold, 35.0);
        assert_eq!(config.letter_spacing_ticks, 30);
        assert_eq!(config.dot_duration_ticks, 22); // default
        assert_eq!(config.tolerance_ticks, 10); // default
    }

    #[test]
    fn test_validate_reports_inverted_durations() {
        assert!(DecoderConfig::default().validate().is_ok());

        let inverted = DecoderConfig {
            dot_duration_ticks: 40,
            dash_duration_ticks: 40,
            ..Default::default()
        };
        let message = inverted.validate().unwrap_err();
        assert!(message.contains("dashDurationTicks"));

        let no_spacing = DecoderConfig {
            letter_spacing_ticks: 0,
            ..Default::default()
        };
        assert!(no_spacing.validate().is_err());
    }

    #[test]
    fn test_spoken_is_lowercase() {
        let decoded = DecodedCharacter {
            text: "Я".to_string(),
            pattern: "· − · −".to_string(),
            symbols: vec![
                MorseSymbol::Dot,
                MorseSymbol::Dash,
                MorseSymbol::Dot,
                MorseSymbol::Dash,
            ],
            recognized: true,
            mark_ticks: 160,
        };
        assert_eq!(decoded.spoken(), "я");
    }
}
