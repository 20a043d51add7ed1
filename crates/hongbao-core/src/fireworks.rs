use crate::color::Rgb;
use crate::constants::*;
use crate::surface::Surface;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Simulator tunables. `Default` reproduces the stock look of the card.
///
/// Ranges are `(low, high)` pairs sampled uniformly.
#[derive(Clone, Debug)]
pub struct SimParams {
    pub launch_gravity: f32,
    pub particle_gravity: f32,
    pub launch_vy: (f32, f32),
    pub apex_band: (f32, f32),
    pub particles_per_burst: usize,
    pub particle_speed: (f32, f32),
    pub particle_decay: (f32, f32),
    pub spawn_interval: u64,
    pub trail_fade_alpha: f32,
    pub rocket_radius: f32,
    pub particle_radius: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            launch_gravity: LAUNCH_GRAVITY,
            particle_gravity: PARTICLE_GRAVITY,
            launch_vy: LAUNCH_VY_RANGE,
            apex_band: APEX_BAND,
            particles_per_burst: PARTICLES_PER_BURST,
            particle_speed: PARTICLE_SPEED_RANGE,
            particle_decay: PARTICLE_DECAY_RANGE,
            spawn_interval: SPAWN_INTERVAL_FRAMES,
            trail_fade_alpha: TRAIL_FADE_ALPHA,
            rocket_radius: ROCKET_RADIUS,
            particle_radius: PARTICLE_RADIUS,
        }
    }
}

/// Side effects raised by the simulator for the sound library to voice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimEvent {
    Launch,
    Explosion,
}

/// One spark of an exploded firework.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub alpha: f32,
    pub decay: f32,
    pub color: Rgb,
}

impl Particle {
    /// Advance one frame. Returns `false` once the particle has faded out.
    pub fn step(&mut self, gravity: f32) -> bool {
        self.pos += self.vel;
        self.vel.y += gravity;
        self.alpha -= self.decay;
        self.is_alive()
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alpha > 0.0
    }
}

/// A rising shell and, after its apex, the sparks it burst into.
///
/// `particles` stays empty until the explosion, is filled exactly once, and
/// only shrinks afterwards.
#[derive(Clone, Debug)]
pub struct Firework {
    pub x: f32,
    pub y: f32,
    pub target_y: f32,
    pub vy: f32,
    pub color: Rgb,
    exploded: bool,
    particles: Vec<Particle>,
}

impl Firework {
    pub fn new(x: f32, y: f32, target_y: f32, vy: f32, color: Rgb) -> Self {
        Self {
            x,
            y,
            target_y,
            vy,
            color,
            exploded: false,
            particles: Vec::new(),
        }
    }

    /// Sample a new shell launched from the bottom edge of a `width` x `height` canvas.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, params: &SimParams, width: f32, height: f32) -> Self {
        let x = rng.gen::<f32>() * width;
        let target_y = height * sample(rng, params.apex_band);
        let vy = sample(rng, params.launch_vy);
        let color = *PALETTE.choose(rng).unwrap_or(&PALETTE[0]);
        Self::new(x, height, target_y, vy, color)
    }

    pub fn exploded(&self) -> bool {
        self.exploded
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Exploded and every spark has faded; ready to be pruned.
    pub fn is_spent(&self) -> bool {
        self.exploded && self.particles.is_empty()
    }

    /// Rise one frame. Returns `true` when the shell should burst: it has
    /// stopped climbing, or it already passed its target height.
    pub fn ascend(&mut self, gravity: f32) -> bool {
        self.y += self.vy;
        self.vy += gravity;
        self.vy >= -APEX_EPSILON || self.y <= self.target_y
    }

    /// Burst into `particles_per_burst` sparks on evenly spaced angles.
    pub fn explode<R: Rng + ?Sized>(&mut self, rng: &mut R, params: &SimParams) {
        if self.exploded {
            return;
        }
        self.exploded = true;
        let count = params.particles_per_burst;
        let origin = Vec2::new(self.x, self.y);
        self.particles.reserve_exact(count);
        for i in 0..count {
            let angle = burst_angle(i, count);
            let speed = sample(rng, params.particle_speed);
            self.particles.push(Particle {
                pos: origin,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                alpha: 1.0,
                decay: sample(rng, params.particle_decay),
                color: self.color,
            });
        }
    }

    /// Step every spark, drawing the survivors and dropping faded ones.
    fn advance_particles<S: Surface + ?Sized>(&mut self, surface: &mut S, params: &SimParams) {
        let mut j = self.particles.len();
        while j > 0 {
            j -= 1;
            let p = &mut self.particles[j];
            if p.step(params.particle_gravity) {
                surface.fill_circle(p.pos, params.particle_radius, p.color, p.alpha);
            } else {
                self.particles.swap_remove(j);
            }
        }
    }
}

/// Angle of spark `i` out of `count`, evenly covering a full turn.
#[inline]
pub fn burst_angle(i: usize, count: usize) -> f32 {
    TAU * i as f32 / count as f32
}

#[inline]
fn sample<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo)
}

/// Live set of fireworks plus the random source that shapes them.
///
/// Insertion order is creation order; pruning uses swap-remove while walking
/// backwards, so survivors may be reordered.
pub struct FireworkSim {
    pub params: SimParams,
    fireworks: Vec<Firework>,
    rng: StdRng,
}

impl FireworkSim {
    pub fn new(params: SimParams, seed: u64) -> Self {
        Self {
            params,
            fireworks: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn fireworks(&self) -> &[Firework] {
        &self.fireworks
    }

    pub fn is_empty(&self) -> bool {
        self.fireworks.is_empty()
    }

    /// Launch a random shell from the bottom of the canvas.
    pub fn spawn(&mut self, width: f32, height: f32, active: bool, events: &mut Vec<SimEvent>) {
        let fw = Firework::random(&mut self.rng, &self.params, width, height);
        self.launch(fw, active, events);
    }

    /// Add a prepared shell to the live set.
    pub fn launch(&mut self, fw: Firework, active: bool, events: &mut Vec<SimEvent>) {
        log::debug!(
            "[fireworks] launch x={:.1} vy={:.2} target_y={:.1}",
            fw.x,
            fw.vy,
            fw.target_y
        );
        self.fireworks.push(fw);
        if active {
            events.push(SimEvent::Launch);
        }
    }

    /// Advance every shell and spark by one frame, painting as it goes.
    ///
    /// Inactive runs still finish animating what is already in flight; they
    /// only stop raising sound events.
    pub fn advance<S: Surface + ?Sized>(&mut self, surface: &mut S, active: bool, events: &mut Vec<SimEvent>) {
        let params = &self.params;
        let mut i = self.fireworks.len();
        while i > 0 {
            i -= 1;
            let fw = &mut self.fireworks[i];
            if !fw.exploded {
                let burst = fw.ascend(params.launch_gravity);
                surface.fill_circle(Vec2::new(fw.x, fw.y), params.rocket_radius, fw.color, 1.0);
                if burst {
                    if active {
                        events.push(SimEvent::Explosion);
                    }
                    fw.explode(&mut self.rng, params);
                }
            } else {
                fw.advance_particles(surface, params);
                if fw.is_spent() {
                    self.fireworks.swap_remove(i);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_angle_covers_full_turn() {
        assert_eq!(burst_angle(0, 80), 0.0);
        assert!((burst_angle(20, 80) - TAU / 4.0).abs() < 1e-6);
        assert!((burst_angle(40, 80) - TAU / 2.0).abs() < 1e-6);
        assert!(burst_angle(79, 80) < TAU);
    }

    #[test]
    fn explode_is_one_shot() {
        let params = SimParams::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut fw = Firework::new(100.0, 200.0, 50.0, -3.0, PALETTE[0]);
        fw.explode(&mut rng, &params);
        fw.explode(&mut rng, &params);
        assert_eq!(fw.particles().len(), params.particles_per_burst);
    }

    #[test]
    fn random_firework_starts_at_bottom_edge() {
        let params = SimParams::default();
        let mut rng = StdRng::seed_from_u64(3);
        let fw = Firework::random(&mut rng, &params, 640.0, 480.0);
        assert_eq!(fw.y, 480.0);
        assert!(!fw.exploded());
        assert!(fw.particles().is_empty());
    }
}
