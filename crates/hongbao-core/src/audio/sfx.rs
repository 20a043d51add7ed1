use super::{AudioBackend, Automation, Filter, NoiseBurst, Source, Synth, Tone, Voice, Waveform};
use crate::constants::*;
use crate::error::AudioError;
use smallvec::smallvec;

/// Named sound effects for the card, each layered from synth primitives.
pub struct SoundFx<B> {
    synth: Synth<B>,
}

impl<B: AudioBackend> SoundFx<B> {
    pub fn new(backend: Result<B, AudioError>, seed: u64) -> Self {
        Self {
            synth: Synth::new(backend, seed),
        }
    }

    pub fn init(&mut self) {
        self.synth.init();
    }

    pub fn toggle_mute(&mut self) -> bool {
        let muted = self.synth.toggle_mute();
        log::info!("[audio] muted={}", muted);
        muted
    }

    pub fn is_muted(&self) -> bool {
        self.synth.is_muted()
    }

    pub fn synth(&self) -> &Synth<B> {
        &self.synth
    }

    /// Envelope opening: a high-passed noise snap, a rising triangle body
    /// and a falling sine thud.
    pub fn play_pop(&mut self) {
        let Some(t) = self.synth.now() else {
            return;
        };

        // Snap; skipped until the noise buffer exists
        self.synth.play_noise(&NoiseBurst {
            filter: Filter::highpass(3000.0).with_q(1.0),
            peak: 0.5,
            decay_sec: 0.05,
            length_sec: 0.1,
        });

        // Body
        self.synth.play_voice(Voice {
            source: Source::Oscillator {
                waveform: Waveform::Triangle,
                frequency: smallvec![
                    Automation::Set { value: 250.0, at: t },
                    Automation::ExponentialRamp {
                        value: 550.0,
                        at: t + 0.15
                    },
                ],
            },
            filter: None,
            gain: smallvec![
                Automation::Set { value: 0.0, at: t },
                Automation::LinearRamp {
                    value: 0.5,
                    at: t + 0.01
                },
                Automation::ExponentialRamp {
                    value: LAYER_FLOOR,
                    at: t + 0.2
                },
            ],
            start: t,
            stop: t + 0.2,
        });

        // Thud
        self.synth.play_voice(Voice {
            source: Source::Oscillator {
                waveform: Waveform::Sine,
                frequency: smallvec![
                    Automation::Set { value: 150.0, at: t },
                    Automation::LinearRamp {
                        value: 100.0,
                        at: t + 0.1
                    },
                ],
            },
            filter: None,
            gain: smallvec![
                Automation::Set { value: 0.3, at: t },
                Automation::ExponentialRamp {
                    value: LAYER_FLOOR,
                    at: t + 0.15
                },
            ],
            start: t,
            stop: t + 0.15,
        });
    }

    /// Rising whistle.
    pub fn play_firework_launch(&mut self) {
        self.synth
            .play_tone(&Tone::new(300.0, Waveform::Sine, 0.5).volume(0.15).slide_to(1500.0));
    }

    /// Crack, body and rumble noise layers. Silent until the noise buffer exists.
    pub fn play_firework_explosion(&mut self) {
        if !self.synth.has_noise() {
            return;
        }
        for burst in EXPLOSION_LAYERS {
            self.synth.play_noise(&burst);
        }
    }

    /// Staggered sine arpeggio with a high "ting" on top.
    pub fn play_sparkle(&mut self) {
        for (i, ratio) in SPARKLE_RATIOS.iter().enumerate() {
            self.synth.play_tone(
                &Tone::new(SPARKLE_BASE_HZ * ratio, Waveform::Sine, 0.5)
                    .delay(i as f64 * SPARKLE_STAGGER_SEC),
            );
        }
        self.synth.play_tone(
            &Tone::new(SPARKLE_BASE_HZ * 4.0, Waveform::Sine, 0.8)
                .volume(0.05)
                .delay(0.3),
        );
    }
}

const EXPLOSION_LAYERS: [NoiseBurst; 3] = [
    // crack
    NoiseBurst {
        filter: Filter {
            kind: super::FilterKind::Highpass,
            frequency_hz: 1500.0,
            q: None,
        },
        peak: 0.8,
        decay_sec: 0.1,
        length_sec: 0.1,
    },
    // body
    NoiseBurst {
        filter: Filter {
            kind: super::FilterKind::Lowpass,
            frequency_hz: 800.0,
            q: None,
        },
        peak: 0.5,
        decay_sec: 0.6,
        length_sec: 0.6,
    },
    // rumble
    NoiseBurst {
        filter: Filter {
            kind: super::FilterKind::Lowpass,
            frequency_hz: 200.0,
            q: None,
        },
        peak: 0.6,
        decay_sec: 1.2,
        length_sec: 1.2,
    },
];
