use crate::color::Rgb;

// Shared simulation and sound tuning constants.

// Festive palette: gold, orange-red, deep pink, cyan, lime, white, dark orange
pub const PALETTE: [Rgb; 7] = [
    Rgb::new(0xFF, 0xD7, 0x00),
    Rgb::new(0xFF, 0x45, 0x00),
    Rgb::new(0xFF, 0x14, 0x93),
    Rgb::new(0x00, 0xFF, 0xFF),
    Rgb::new(0x32, 0xCD, 0x32),
    Rgb::new(0xFF, 0xFF, 0xFF),
    Rgb::new(0xFF, 0x8C, 0x00),
];

// Physics (pixels and pixels-per-frame)
pub const LAUNCH_GRAVITY: f32 = 0.2;
pub const PARTICLE_GRAVITY: f32 = 0.08; // weaker than launch gravity
pub const LAUNCH_VY_RANGE: (f32, f32) = (-17.0, -12.0);
pub const APEX_BAND: (f32, f32) = (0.1, 0.4); // fraction of canvas height
// Accumulated f32 error leaves vy a hair below zero on the exact apex frame
pub const APEX_EPSILON: f32 = 1e-3;

// Bursts
pub const PARTICLES_PER_BURST: usize = 80;
pub const PARTICLE_SPEED_RANGE: (f32, f32) = (2.0, 8.0);
pub const PARTICLE_DECAY_RANGE: (f32, f32) = (0.015, 0.03);

// Render loop
pub const SPAWN_INTERVAL_FRAMES: u64 = 25;
pub const TRAIL_FADE_ALPHA: f32 = 0.15;
pub const ROCKET_RADIUS: f32 = 3.0;
pub const PARTICLE_RADIUS: f32 = 2.0;

// Synthesizer
pub const NOISE_BUFFER_SECONDS: f32 = 2.0;
pub const DEFAULT_TONE_VOLUME: f32 = 0.1;
pub const TONE_ATTACK_SEC: f64 = 0.02;
pub const TONE_FLOOR: f32 = 0.001; // exponential ramps cannot reach zero
pub const LAYER_FLOOR: f32 = 0.01;

// Sparkle arpeggio
pub const SPARKLE_BASE_HZ: f32 = 880.0; // A5
pub const SPARKLE_RATIOS: [f32; 5] = [1.0, 1.25, 1.5, 2.0, 2.5];
pub const SPARKLE_STAGGER_SEC: f64 = 0.06;

// Card
pub const OPENING_DELAY_MS: i32 = 800;
