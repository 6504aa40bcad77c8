// WebAssembly bindings: a stateful listener the page drives from its timer
use js_sys::{Array, Function};
use morse_listen_core::types::*;
use morse_listen_core::{sampler, timing, CharacterSink, MorseListener};
use wasm_bindgen::prelude::*;

mod support;

// Console logging for debugging
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

/// Level for the core's `log` output routed to the browser console
const LOG_LEVEL: log::Level = log::Level::Debug;

// Installs the console logger on first use; later calls are no-ops
fn init_logging() {
    console_log::init_with_level(LOG_LEVEL).ok();
}

// Macro to generate wasm_bindgen wrapper enums that mirror core enums
macro_rules! wasm_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident = $value:expr),* $(,)?
        }
        from $core_type:ty
    ) => {
        #[wasm_bindgen]
        $(#[$meta])*
        $vis enum $name {
            $($variant = $value),*
        }

        impl From<$core_type> for $name {
            fn from(value: $core_type) -> Self {
                match value {
                    $(<$core_type>::$variant => $name::$variant),*
                }
            }
        }
    };
}

wasm_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ListenerPhaseJs {
        IdleWait = 0,
        Accumulating = 1,
    }
    from morse_listen_core::types::ListenerPhase
}

fn symbol_name(symbol: MorseSymbol) -> &'static str {
    match symbol {
        MorseSymbol::Dot => "dot",
        MorseSymbol::Dash => "dash",
    }
}

fn apply_config(listener: &mut MorseListener, config_json: &str) -> Result<(), JsValue> {
    let config = support::parse_config::<DecoderConfig>(config_json)
        .map_err(|e| JsValue::from_str(&e))?;
    // Out-of-order durations are accepted; they only hurt classification
    if let Err(warning) = config.validate() {
        log::warn!("morse config warning: {}", warning);
    }
    listener.set_config(config);
    Ok(())
}

#[wasm_bindgen]
pub struct DecodedCharacterJs {
    inner: DecodedCharacter,
}

#[wasm_bindgen]
impl DecodedCharacterJs {
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.inner.text.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn pattern(&self) -> String {
        self.inner.pattern.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn spoken(&self) -> String {
        self.inner.spoken()
    }

    #[wasm_bindgen(getter)]
    pub fn recognized(&self) -> bool {
        self.inner.recognized
    }

    #[wasm_bindgen(getter)]
    pub fn mark_ticks(&self) -> usize {
        self.inner.mark_ticks
    }

    #[wasm_bindgen(getter)]
    pub fn symbols(&self) -> Array {
        self.inner
            .symbols
            .iter()
            .map(|&symbol| JsValue::from_str(symbol_name(symbol)))
            .collect()
    }
}

/// Page callbacks for the visible log and speech synthesis
#[derive(Default)]
struct JsSinks {
    display: Option<Function>,
    speech: Option<Function>,
}

impl CharacterSink for JsSinks {
    fn accept(&mut self, decoded: &DecodedCharacter) {
        console_log!("morse {:?} -> {:?}", decoded.pattern, decoded.text);

        if let Some(display) = &self.display {
            if let Err(e) = display.call1(&JsValue::NULL, &JsValue::from_str(&decoded.text)) {
                log::warn!("display callback failed: {:?}", e);
            }
        }
        if let Some(speech) = &self.speech {
            if let Err(e) = speech.call1(&JsValue::NULL, &JsValue::from_str(&decoded.spoken())) {
                log::warn!("speech callback failed: {:?}", e);
            }
        }
    }
}

#[wasm_bindgen]
pub struct MorseListenerJs {
    listener: MorseListener,
    sinks: JsSinks,
}

#[wasm_bindgen]
impl MorseListenerJs {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<MorseListenerJs, JsValue> {
        init_logging();
        let mut listener = MorseListener::default();
        apply_config(&mut listener, config_json)?;
        Ok(MorseListenerJs {
            listener,
            sinks: JsSinks::default(),
        })
    }

    /// Takes effect from the next tick
    pub fn set_config(&mut self, config_json: &str) -> Result<(), JsValue> {
        apply_config(&mut self.listener, config_json)
    }

    /// Register callbacks receiving the character text and its spoken form
    pub fn on_character(&mut self, display: Option<Function>, speech: Option<Function>) {
        self.sinks = JsSinks { display, speech };
    }

    /// Feed an analyser `getByteFrequencyData` frame
    pub fn push_spectrum(&mut self, bins: &[u8]) {
        match sampler::spectrum_peak(bins) {
            Some(peak) => self.listener.push_frame(peak),
            None => self.listener.clear_frame(),
        }
    }

    pub fn push_amplitude(&mut self, amplitude: f32) {
        self.listener.push_frame(amplitude);
    }

    /// One timer tick; returns the character completed on it, if any
    pub fn tick(&mut self) -> Option<DecodedCharacterJs> {
        self.listener
            .tick_into(&mut self.sinks)
            .map(|inner| DecodedCharacterJs { inner })
    }

    pub fn reset(&mut self) {
        self.listener.reset();
    }

    #[wasm_bindgen(getter)]
    pub fn transcript(&self) -> String {
        self.listener.transcript().text()
    }

    pub fn transcript_characters(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.listener.transcript().characters())
            .map_err(JsValue::from)
    }

    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> ListenerPhaseJs {
        self.listener.phase().into()
    }

    #[wasm_bindgen(getter)]
    pub fn buffered_ticks(&self) -> usize {
        self.listener.buffered_ticks()
    }

    #[wasm_bindgen(getter)]
    pub fn tick_interval_ms(&self) -> u32 {
        self.listener.config().tick_interval_ms
    }

    /// Latest amplitude, for the page's level meter
    #[wasm_bindgen(getter)]
    pub fn last_amplitude(&self) -> Option<f32> {
        self.listener.latest_amplitude()
    }
}

#[wasm_bindgen]
pub fn decode_amplitudes(amplitudes: &[f32], config_json: &str) -> Result<JsValue, JsValue> {
    init_logging();
    let config = support::parse_with_defaults::<DecoderConfig>(config_json);
    let decoded = morse_listen_core::decode_amplitudes(amplitudes, &config);
    serde_wasm_bindgen::to_value(&decoded).map_err(JsValue::from)
}

/// Ideal tick stream for `text` as 1/0 bytes, for loopback checks
#[wasm_bindgen]
pub fn synthesize_ticks(text: &str, config_json: &str) -> Result<Vec<u8>, JsValue> {
    let config = support::parse_with_defaults::<DecoderConfig>(config_json);
    timing::text_ticks(text, &config)
        .map(|ticks| ticks.into_iter().map(u8::from).collect())
        .map_err(|e| JsValue::from_str(&e))
}
