use crate::audio::{AudioBackend, SoundFx};
use crate::color::Rgb;
use crate::fireworks::{FireworkSim, SimEvent, SimParams};
use crate::surface::{Composite, Surface};

/// Per-frame driver: trail fade, spawn cadence, physics and sound.
///
/// The front-end calls [`FrameDriver::frame`] once per display refresh.
pub struct FrameDriver {
    sim: FireworkSim,
    tick: u64,
    was_active: bool,
    events: Vec<SimEvent>,
}

impl FrameDriver {
    pub fn new(params: SimParams, seed: u64) -> Self {
        Self {
            sim: FireworkSim::new(params, seed),
            tick: 0,
            was_active: false,
            events: Vec::new(),
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn sim(&self) -> &FireworkSim {
        &self.sim
    }

    pub fn frame<S: Surface + ?Sized, B: AudioBackend>(
        &mut self,
        surface: &mut S,
        active: bool,
        sfx: &mut SoundFx<B>,
    ) {
        let (w, h) = surface.size();

        surface.set_composite(Composite::DestinationOut);
        surface.fill_rect(0.0, 0.0, w, h, Rgb::BLACK, self.sim.params.trail_fade_alpha);
        surface.set_composite(Composite::Lighter);

        // spawn cadence restarts on activation; shells in flight are kept
        if active && !self.was_active {
            self.tick = 0;
        }
        self.was_active = active;

        let interval = self.sim.params.spawn_interval.max(1);
        if active && self.tick % interval == 0 {
            self.sim.spawn(w, h, active, &mut self.events);
        }
        self.tick += 1;

        self.sim.advance(surface, active, &mut self.events);

        for ev in self.events.drain(..) {
            match ev {
                SimEvent::Launch => sfx.play_firework_launch(),
                SimEvent::Explosion => sfx.play_firework_explosion(),
            }
        }
    }
}
