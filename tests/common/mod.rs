// Recording stand-ins for the canvas and the audio context.
#![allow(dead_code)]

use glam::Vec2;
use hongbao_core::{AudioBackend, AudioError, Composite, Rgb, Surface, Voice};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Composite(Composite),
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgb,
        alpha: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgb,
        alpha: f32,
    },
}

pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn set_composite(&mut self, mode: Composite) {
        self.ops.push(DrawOp::Composite(mode));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb, alpha: f32) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            w,
            h,
            color,
            alpha,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
            alpha,
        });
    }
}

pub const TEST_SAMPLE_RATE: f32 = 8000.0;
pub const TEST_NOW: f64 = 2.0;

/// Audio backend that records every voice instead of building nodes.
pub struct RecordingBackend {
    pub time: f64,
    pub rate: f32,
    pub suspended: bool,
    pub resumes: usize,
    pub noise: Option<Vec<f32>>,
    pub noise_loads: usize,
    pub voices: Vec<Voice>,
    pub fail_play: bool,
    pub fail_resume: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            time: TEST_NOW,
            rate: TEST_SAMPLE_RATE,
            suspended: true,
            resumes: 0,
            noise: None,
            noise_loads: 0,
            voices: Vec::new(),
            fail_play: false,
            fail_resume: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_play: true,
            ..Self::new()
        }
    }
}

impl AudioBackend for RecordingBackend {
    fn current_time(&self) -> f64 {
        self.time
    }

    fn sample_rate(&self) -> f32 {
        self.rate
    }

    fn is_suspended(&self) -> bool {
        self.suspended
    }

    fn resume(&mut self) -> Result<(), AudioError> {
        self.resumes += 1;
        if self.fail_resume {
            return Err(AudioError::Backend("resume rejected".into()));
        }
        self.suspended = false;
        Ok(())
    }

    fn load_noise(&mut self, samples: Vec<f32>) -> Result<(), AudioError> {
        self.noise_loads += 1;
        self.noise = Some(samples);
        Ok(())
    }

    fn play(&mut self, voice: &Voice) -> Result<(), AudioError> {
        if self.fail_play {
            return Err(AudioError::Backend("boom".into()));
        }
        self.voices.push(voice.clone());
        Ok(())
    }
}

pub fn voices<'a>(sfx: &'a hongbao_core::SoundFx<RecordingBackend>) -> &'a [Voice] {
    sfx.synth()
        .backend()
        .map(|b| b.voices.as_slice())
        .unwrap_or(&[])
}
