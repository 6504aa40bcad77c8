use crate::accumulator::{BoundaryPolicy, RunAccumulator, RunCounters};
use crate::interpret::decode_bits;
use crate::sampler::classify;
use crate::segmenter::trim_silence;
use crate::types::*;

/// Receives every completed character exactly once
pub trait CharacterSink {
    fn accept(&mut self, decoded: &DecodedCharacter);
}

impl CharacterSink for Vec<DecodedCharacter> {
    fn accept(&mut self, decoded: &DecodedCharacter) {
        self.push(decoded.clone());
    }
}

// Display and speech both get the character
impl<A: CharacterSink, B: CharacterSink> CharacterSink for (A, B) {
    fn accept(&mut self, decoded: &DecodedCharacter) {
        self.0.accept(decoded);
        self.1.accept(decoded);
    }
}

impl<S: CharacterSink + ?Sized> CharacterSink for &mut S {
    fn accept(&mut self, decoded: &DecodedCharacter) {
        (**self).accept(decoded);
    }
}

/// Characters decoded during the current session
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    characters: Vec<DecodedCharacter>,
}

impl Transcript {
    pub fn characters(&self) -> &[DecodedCharacter] {
        &self.characters
    }

    pub fn text(&self) -> String {
        self.characters.iter().map(|c| c.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn clear(&mut self) {
        self.characters.clear();
    }
}

impl CharacterSink for Transcript {
    fn accept(&mut self, decoded: &DecodedCharacter) {
        self.characters.push(decoded.clone());
    }
}

/// Streaming decoder driven by a periodic tick.
///
/// Audio frames arrive through [`MorseListener::push_frame`] whenever the
/// capture side has one; each [`MorseListener::tick`] reads the latest frame,
/// reusing it if nothing new arrived. Configuration changes only affect
/// ticks that have not happened yet.
#[derive(Debug, Clone, Default)]
pub struct MorseListener {
    config: DecoderConfig,
    accumulator: RunAccumulator,
    latest_amplitude: Option<f32>,
    transcript: Transcript,
}

impl MorseListener {
    pub fn new(config: DecoderConfig) -> Self {
        Self::with_policy(config, BoundaryPolicy::default())
    }

    pub fn with_policy(config: DecoderConfig, policy: BoundaryPolicy) -> Self {
        Self {
            config,
            accumulator: RunAccumulator::new(policy),
            latest_amplitude: None,
            transcript: Transcript::default(),
        }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DecoderConfig) {
        self.config = config;
    }

    /// Store the newest amplitude reading from the audio source
    pub fn push_frame(&mut self, amplitude: f32) {
        self.latest_amplitude = Some(amplitude);
    }

    /// Forget the current frame, e.g. when the capture side reports a
    /// dropped frame. Following ticks are idle until a new one arrives.
    pub fn clear_frame(&mut self) {
        self.latest_amplitude = None;
    }

    pub fn latest_amplitude(&self) -> Option<f32> {
        self.latest_amplitude
    }

    /// One sampling step. Returns the character completed on this tick.
    pub fn tick(&mut self) -> Option<DecodedCharacter> {
        let level = match self.latest_amplitude {
            Some(amplitude) => classify(amplitude, self.config.amplitude_threshold),
            None => TickLevel::Idle,
        };
        self.step(level)
    }

    /// Like [`MorseListener::tick`], also handing the character to `sink`
    pub fn tick_into<S: CharacterSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Option<DecodedCharacter> {
        let decoded = self.tick()?;
        sink.accept(&decoded);
        Some(decoded)
    }

    /// Push a frame and tick on it
    pub fn process(&mut self, amplitude: f32) -> Option<DecodedCharacter> {
        self.push_frame(amplitude);
        self.tick()
    }

    /// Advance on an already classified tick
    pub fn step(&mut self, level: TickLevel) -> Option<DecodedCharacter> {
        let history = self
            .accumulator
            .push(level, self.config.letter_spacing_ticks)?;

        let trimmed = trim_silence(&history);
        if trimmed.is_empty() {
            log::trace!("letter boundary over {} ticks of silence", history.len());
            return None;
        }

        log::debug!(
            "letter boundary: {} buffered ticks, {} after trimming",
            history.len(),
            trimmed.len()
        );
        let decoded = decode_bits(trimmed, &self.config);
        self.transcript.accept(&decoded);
        Some(decoded)
    }

    pub fn phase(&self) -> ListenerPhase {
        if self.accumulator.has_mark() {
            ListenerPhase::Accumulating
        } else {
            ListenerPhase::IdleWait
        }
    }

    pub fn counters(&self) -> RunCounters {
        self.accumulator.counters()
    }

    pub fn buffered_ticks(&self) -> usize {
        self.accumulator.buffer().len()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Start a new session. Configuration is kept.
    pub fn reset(&mut self) {
        self.accumulator.reset();
        self.latest_amplitude = None;
        self.transcript.clear();
    }
}
