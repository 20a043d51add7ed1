use crate::color::Rgb;
use glam::Vec2;

/// Compositing modes used by the render loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Composite {
    /// Erase toward transparency; used for the trail fade.
    DestinationOut,
    /// Additive blending so overlapping sparks glow.
    Lighter,
}

impl Composite {
    pub fn as_css(self) -> &'static str {
        match self {
            Composite::DestinationOut => "destination-out",
            Composite::Lighter => "lighter",
        }
    }
}

/// Drawing target for the firework renderer, in absolute pixel space.
pub trait Surface {
    fn size(&self) -> (f32, f32);
    fn set_composite(&mut self, mode: Composite);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb, alpha: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32);
}
