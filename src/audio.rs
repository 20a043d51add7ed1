use hongbao_core::{AudioBackend, AudioError, Automation, FilterKind, Source, Voice, Waveform};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// WebAudio implementation of the synthesizer backend.
///
/// Every voice gets fresh source/filter/gain nodes wired straight to the
/// destination; the browser frees them after their scheduled stop.
pub struct WebAudio {
    ctx: web::AudioContext,
    noise: Option<web::AudioBuffer>,
}

impl WebAudio {
    pub fn new() -> Result<Self, AudioError> {
        let ctx = web::AudioContext::new().map_err(js_err)?;
        Ok(Self { ctx, noise: None })
    }
}

fn js_err(e: JsValue) -> AudioError {
    AudioError::Backend(format!("{:?}", e))
}

fn oscillator_type(waveform: Waveform) -> web::OscillatorType {
    match waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Square => web::OscillatorType::Square,
        Waveform::Sawtooth => web::OscillatorType::Sawtooth,
        Waveform::Triangle => web::OscillatorType::Triangle,
    }
}

fn apply_schedule(param: &web::AudioParam, schedule: &[Automation]) -> Result<(), AudioError> {
    for step in schedule {
        match *step {
            Automation::Set { value, at } => param.set_value_at_time(value, at),
            Automation::LinearRamp { value, at } => param.linear_ramp_to_value_at_time(value, at),
            Automation::ExponentialRamp { value, at } => {
                param.exponential_ramp_to_value_at_time(value, at)
            }
        }
        .map_err(js_err)?;
    }
    Ok(())
}

impl AudioBackend for WebAudio {
    fn current_time(&self) -> f64 {
        self.ctx.current_time()
    }

    fn sample_rate(&self) -> f32 {
        self.ctx.sample_rate()
    }

    fn is_suspended(&self) -> bool {
        self.ctx.state() == web::AudioContextState::Suspended
    }

    fn resume(&mut self) -> Result<(), AudioError> {
        let promise = self.ctx.resume().map_err(js_err)?;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] resume rejected: {:?}", e);
            }
        });
        Ok(())
    }

    fn load_noise(&mut self, mut samples: Vec<f32>) -> Result<(), AudioError> {
        let buffer = self
            .ctx
            .create_buffer(1, samples.len() as u32, self.ctx.sample_rate())
            .map_err(js_err)?;
        buffer.copy_to_channel(&mut samples, 0).map_err(js_err)?;
        self.noise = Some(buffer);
        Ok(())
    }

    fn play(&mut self, voice: &Voice) -> Result<(), AudioError> {
        let gain = web::GainNode::new(&self.ctx).map_err(js_err)?;
        apply_schedule(&gain.gain(), &voice.gain)?;
        gain.connect_with_audio_node(&self.ctx.destination())
            .map_err(js_err)?;

        let filter = match voice.filter {
            Some(f) => {
                let node = web::BiquadFilterNode::new(&self.ctx).map_err(js_err)?;
                node.set_type(match f.kind {
                    FilterKind::Highpass => web::BiquadFilterType::Highpass,
                    FilterKind::Lowpass => web::BiquadFilterType::Lowpass,
                });
                node.frequency().set_value(f.frequency_hz);
                if let Some(q) = f.q {
                    node.q().set_value(q);
                }
                node.connect_with_audio_node(&gain).map_err(js_err)?;
                Some(node)
            }
            None => None,
        };
        let head: &web::AudioNode = match &filter {
            Some(f) => f.as_ref(),
            None => gain.as_ref(),
        };

        match &voice.source {
            Source::Oscillator {
                waveform,
                frequency,
            } => {
                let osc = web::OscillatorNode::new(&self.ctx).map_err(js_err)?;
                osc.set_type(oscillator_type(*waveform));
                apply_schedule(&osc.frequency(), frequency)?;
                osc.connect_with_audio_node(head).map_err(js_err)?;
                osc.start_with_when(voice.start).map_err(js_err)?;
                osc.stop_with_when(voice.stop).map_err(js_err)?;
            }
            Source::Noise => {
                let buffer = self.noise.as_ref().ok_or(AudioError::NoiseBufferMissing)?;
                let src = web::AudioBufferSourceNode::new(&self.ctx).map_err(js_err)?;
                src.set_buffer(Some(buffer));
                src.connect_with_audio_node(head).map_err(js_err)?;
                src.start_with_when(voice.start).map_err(js_err)?;
                src.stop_with_when(voice.stop).map_err(js_err)?;
            }
        }
        Ok(())
    }
}
