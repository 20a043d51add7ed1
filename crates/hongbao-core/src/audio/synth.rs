use super::{AudioBackend, Automation, Filter, Schedule, Source, Voice, Waveform};
use crate::constants::*;
use crate::error::AudioError;
use rand::prelude::*;
use smallvec::smallvec;

/// Parameters for a single enveloped oscillator tone.
///
/// Fields:
/// - `frequency_hz`: starting pitch
/// - `waveform`: oscillator shape
/// - `duration_sec`: total length; the envelope decays to near silence by then
/// - `volume`: peak gain reached after the attack
/// - `slide_to_hz`: optional exponential glide target reached at the end
/// - `delay_sec`: offset from "now" at which the tone starts
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub waveform: Waveform,
    pub duration_sec: f64,
    pub volume: f32,
    pub slide_to_hz: Option<f32>,
    pub delay_sec: f64,
}

impl Tone {
    pub fn new(frequency_hz: f32, waveform: Waveform, duration_sec: f64) -> Self {
        Self {
            frequency_hz,
            waveform,
            duration_sec,
            volume: DEFAULT_TONE_VOLUME,
            slide_to_hz: None,
            delay_sec: 0.0,
        }
    }

    pub fn volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }

    pub fn slide_to(mut self, hz: f32) -> Self {
        self.slide_to_hz = Some(hz);
        self
    }

    pub fn delay(mut self, delay_sec: f64) -> Self {
        self.delay_sec = delay_sec;
        self
    }

    /// Voice for this tone when the backend clock reads `now`.
    ///
    /// Linear attack from 0 to `volume` over the first 20 ms, then an
    /// exponential decay toward silence by `duration_sec`.
    pub fn voice(&self, now: f64) -> Voice {
        let t = now + self.delay_sec;
        let end = t + self.duration_sec;
        let mut frequency: Schedule = smallvec![Automation::Set {
            value: self.frequency_hz,
            at: t
        }];
        if let Some(hz) = self.slide_to_hz {
            frequency.push(Automation::ExponentialRamp { value: hz, at: end });
        }
        Voice {
            source: Source::Oscillator {
                waveform: self.waveform,
                frequency,
            },
            filter: None,
            gain: smallvec![
                Automation::Set { value: 0.0, at: t },
                Automation::LinearRamp {
                    value: self.volume,
                    at: t + TONE_ATTACK_SEC
                },
                Automation::ExponentialRamp {
                    value: TONE_FLOOR,
                    at: end
                },
            ],
            start: t,
            stop: end,
        }
    }
}

/// A filtered burst of the shared noise buffer with a percussive decay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseBurst {
    pub filter: Filter,
    pub peak: f32,
    pub decay_sec: f64,
    pub length_sec: f64,
}

impl NoiseBurst {
    pub fn voice(&self, now: f64) -> Voice {
        Voice {
            source: Source::Noise,
            filter: Some(self.filter),
            gain: smallvec![
                Automation::Set {
                    value: self.peak,
                    at: now
                },
                Automation::ExponentialRamp {
                    value: LAYER_FLOOR,
                    at: now + self.decay_sec
                },
            ],
            start: now,
            stop: now + self.length_sec,
        }
    }
}

/// `len` uniformly random samples in [-1, 1].
pub fn white_noise<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f32> {
    (0..len).map(|_| rng.gen_range(-1.0..=1.0)).collect()
}

/// Owns the audio backend and turns tones and noise bursts into voices.
///
/// A missing backend and the muted state behave the same way: every play
/// call returns without touching the backend.
pub struct Synth<B> {
    backend: Option<B>,
    muted: bool,
    noise_ready: bool,
    rng: StdRng,
}

impl<B: AudioBackend> Synth<B> {
    pub fn new(backend: Result<B, AudioError>, seed: u64) -> Self {
        let backend = match backend {
            Ok(b) => Some(b),
            Err(e) => {
                log::error!("[audio] backend init failed, sound disabled: {}", e);
                None
            }
        };
        Self {
            backend,
            muted: false,
            noise_ready: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Resume a suspended backend and build the noise buffer on first use.
    ///
    /// Must run from inside a user gesture handler.
    pub fn init(&mut self) {
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        if backend.is_suspended() {
            if let Err(e) = backend.resume() {
                log::warn!("[audio] resume failed: {}", e);
            }
        }
        if !self.noise_ready {
            let len = (backend.sample_rate() * NOISE_BUFFER_SECONDS) as usize;
            let samples = white_noise(&mut self.rng, len);
            match backend.load_noise(samples) {
                Ok(()) => {
                    self.noise_ready = true;
                    log::debug!("[audio] noise buffer ready ({} samples)", len);
                }
                Err(e) => log::error!("[audio] noise buffer failed: {}", e),
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flip the muted flag and return the new state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn has_noise(&self) -> bool {
        self.noise_ready
    }

    /// Backend clock, or `None` when sound is muted or unavailable.
    pub fn now(&self) -> Option<f64> {
        if self.muted {
            return None;
        }
        self.backend.as_ref().map(|b| b.current_time())
    }

    pub fn backend(&self) -> Option<&B> {
        self.backend.as_ref()
    }

    pub fn play_tone(&mut self, tone: &Tone) {
        if let Some(now) = self.now() {
            self.play_voice(tone.voice(now));
        }
    }

    /// No-op until [`Synth::init`] has built the noise buffer.
    pub fn play_noise(&mut self, burst: &NoiseBurst) {
        if !self.noise_ready {
            return;
        }
        if let Some(now) = self.now() {
            self.play_voice(burst.voice(now));
        }
    }

    /// Schedule a fully described voice.
    pub fn play_voice(&mut self, voice: Voice) {
        if self.muted {
            return;
        }
        if let Some(backend) = self.backend.as_mut() {
            if let Err(e) = backend.play(&voice) {
                log::warn!("[audio] voice dropped: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_noise_stays_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let buf = white_noise(&mut rng, 4096);
        assert_eq!(buf.len(), 4096);
        assert!(buf.iter().all(|s| (-1.0..=1.0).contains(s)));
        assert!(buf.iter().any(|s| *s < 0.0) && buf.iter().any(|s| *s > 0.0));
    }

    #[test]
    fn tone_voice_has_attack_then_decay() {
        let v = Tone::new(440.0, Waveform::Sine, 0.5)
            .volume(0.2)
            .delay(0.1)
            .voice(1.0);
        assert!((v.start - 1.1).abs() < 1e-9);
        assert!((v.stop - 1.6).abs() < 1e-9);
        assert_eq!(v.gain[0], Automation::Set { value: 0.0, at: v.start });
        assert_eq!(v.gain[1].value(), 0.2);
        assert!((v.gain[1].at() - (v.start + TONE_ATTACK_SEC)).abs() < 1e-9);
        assert!(matches!(v.gain[2], Automation::ExponentialRamp { .. }));
        assert!((v.gain[2].at() - v.stop).abs() < 1e-9);
    }
}
