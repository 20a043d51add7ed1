//! Declarative audio voices and the backend seam that realizes them.
//!
//! A [`Voice`] describes one short-lived chain (source -> optional filter ->
//! gain -> destination) with all parameter automation and its start/stop
//! times on the backend clock. Backends build the actual graph nodes; the
//! nodes release themselves once the stop time passes.

pub mod sfx;
pub mod synth;

pub use sfx::*;
pub use synth::*;

use crate::error::AudioError;
use smallvec::SmallVec;

/// Basic oscillator shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    Highpass,
    Lowpass,
}

/// Biquad filter settings. `q` of `None` keeps the backend default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Filter {
    pub kind: FilterKind,
    pub frequency_hz: f32,
    pub q: Option<f32>,
}

impl Filter {
    pub fn highpass(frequency_hz: f32) -> Self {
        Self {
            kind: FilterKind::Highpass,
            frequency_hz,
            q: None,
        }
    }

    pub fn lowpass(frequency_hz: f32) -> Self {
        Self {
            kind: FilterKind::Lowpass,
            frequency_hz,
            q: None,
        }
    }

    pub fn with_q(mut self, q: f32) -> Self {
        self.q = Some(q);
        self
    }
}

/// One automation event on an audio parameter, in absolute backend time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Automation {
    Set { value: f32, at: f64 },
    LinearRamp { value: f32, at: f64 },
    ExponentialRamp { value: f32, at: f64 },
}

impl Automation {
    pub fn value(&self) -> f32 {
        match *self {
            Automation::Set { value, .. }
            | Automation::LinearRamp { value, .. }
            | Automation::ExponentialRamp { value, .. } => value,
        }
    }

    pub fn at(&self) -> f64 {
        match *self {
            Automation::Set { at, .. }
            | Automation::LinearRamp { at, .. }
            | Automation::ExponentialRamp { at, .. } => at,
        }
    }
}

pub type Schedule = SmallVec<[Automation; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub enum Source {
    Oscillator { waveform: Waveform, frequency: Schedule },
    /// Plays the shared white-noise buffer.
    Noise,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Voice {
    pub source: Source,
    pub filter: Option<Filter>,
    pub gain: Schedule,
    pub start: f64,
    pub stop: f64,
}

/// Audio output the synthesizer schedules voices on.
pub trait AudioBackend {
    /// Current time of the backend clock in seconds.
    fn current_time(&self) -> f64;
    fn sample_rate(&self) -> f32;
    /// Platforms block audio until a user gesture resumes the context.
    fn is_suspended(&self) -> bool;
    fn resume(&mut self) -> Result<(), AudioError>;
    /// Store the shared mono noise buffer used by [`Source::Noise`].
    fn load_noise(&mut self, samples: Vec<f32>) -> Result<(), AudioError>;
    /// Build and schedule the node chain for `voice`.
    fn play(&mut self, voice: &Voice) -> Result<(), AudioError>;
}
