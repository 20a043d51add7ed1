// Host-side tests for the per-frame render loop driver.

mod common;

use common::{voices, DrawOp, RecordingBackend, RecordingSurface};
use hongbao_core::*;

fn driver() -> FrameDriver {
    FrameDriver::new(SimParams::default(), 7)
}

fn sfx() -> SoundFx<RecordingBackend> {
    SoundFx::new(Ok(RecordingBackend::new()), 99)
}

#[test]
fn spawns_exactly_every_25_ticks_while_active() {
    let mut driver = driver();
    let mut surface = RecordingSurface::new(800.0, 600.0);
    // no init: explosions stay silent, so every recorded voice is a launch
    let mut sfx = sfx();

    for _ in 0..260 {
        let tick = driver.tick();
        let before = voices(&sfx).len();
        driver.frame(&mut surface, true, &mut sfx);
        let launched = voices(&sfx).len() - before;
        let expected = usize::from(tick % 25 == 0);
        assert_eq!(launched, expected, "tick {tick}");
    }
    assert_eq!(driver.tick(), 260);
}

#[test]
fn inactive_loop_ticks_without_spawning() {
    let mut driver = driver();
    let mut surface = RecordingSurface::new(800.0, 600.0);
    let mut sfx = sfx();
    for _ in 0..100 {
        driver.frame(&mut surface, false, &mut sfx);
    }
    assert_eq!(driver.tick(), 100);
    assert!(driver.sim().is_empty());
    assert!(voices(&sfx).is_empty());
}

#[test]
fn activation_launches_on_the_first_active_frame() {
    let mut driver = driver();
    let mut surface = RecordingSurface::new(800.0, 600.0);
    let mut sfx = sfx();
    for _ in 0..30 {
        driver.frame(&mut surface, false, &mut sfx);
    }
    assert!(voices(&sfx).is_empty());

    driver.frame(&mut surface, true, &mut sfx);
    assert_eq!(voices(&sfx).len(), 1);
    assert_eq!(driver.sim().fireworks().len(), 1);
    assert_eq!(driver.tick(), 1);
}

#[test]
fn reactivation_restarts_cadence_and_keeps_shells_in_flight() {
    let mut driver = driver();
    let mut surface = RecordingSurface::new(800.0, 600.0);
    let mut sfx = sfx();

    driver.frame(&mut surface, true, &mut sfx);
    for _ in 0..10 {
        driver.frame(&mut surface, false, &mut sfx);
    }
    assert_eq!(driver.sim().fireworks().len(), 1);

    driver.frame(&mut surface, true, &mut sfx);
    assert_eq!(voices(&sfx).len(), 2);
    assert_eq!(driver.sim().fireworks().len(), 2);
    assert!(driver.sim().fireworks().iter().all(|f| !f.exploded()));
}

#[test]
fn frame_fades_trails_then_switches_to_additive() {
    let mut driver = driver();
    let mut surface = RecordingSurface::new(320.0, 240.0);
    let mut sfx = sfx();
    driver.frame(&mut surface, false, &mut sfx);

    assert_eq!(
        surface.ops,
        vec![
            DrawOp::Composite(Composite::DestinationOut),
            DrawOp::Rect {
                x: 0.0,
                y: 0.0,
                w: 320.0,
                h: 240.0,
                color: Rgb::BLACK,
                alpha: TRAIL_FADE_ALPHA,
            },
            DrawOp::Composite(Composite::Lighter),
        ]
    );
}

#[test]
fn explosions_play_layered_noise_when_active() {
    let mut driver = driver();
    let mut surface = RecordingSurface::new(800.0, 600.0);
    let mut sfx = sfx();
    sfx.init();

    for _ in 0..120 {
        driver.frame(&mut surface, true, &mut sfx);
    }
    let noise = voices(&sfx)
        .iter()
        .filter(|v| v.source == Source::Noise)
        .count();
    assert!(noise > 0, "no explosion was voiced");
    assert_eq!(noise % 3, 0);
}

#[test]
fn deactivating_lets_fireworks_finish_in_silence() {
    let mut driver = driver();
    let mut surface = RecordingSurface::new(800.0, 600.0);
    let mut sfx = sfx();
    sfx.init();

    driver.frame(&mut surface, true, &mut sfx);
    assert_eq!(driver.sim().fireworks().len(), 1);
    let voiced = voices(&sfx).len();

    let mut saw_burst = false;
    for _ in 0..400 {
        driver.frame(&mut surface, false, &mut sfx);
        saw_burst |= driver.sim().fireworks().iter().any(|f| f.exploded());
    }
    assert!(saw_burst);
    assert!(driver.sim().is_empty());
    assert_eq!(voices(&sfx).len(), voiced);
}

#[test]
fn muted_loop_still_draws_fireworks() {
    let mut driver = driver();
    let mut surface = RecordingSurface::new(800.0, 600.0);
    let mut sfx = sfx();
    sfx.init();
    assert!(sfx.toggle_mute());

    for _ in 0..60 {
        driver.frame(&mut surface, true, &mut sfx);
    }
    assert!(!driver.sim().is_empty());
    assert!(surface
        .ops
        .iter()
        .any(|op| matches!(op, DrawOp::Circle { .. })));
    assert!(voices(&sfx).is_empty());
}
