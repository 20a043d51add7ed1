/// 8-bit RGB color taken from the firework palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgba(...)` string with `alpha` clamped to [0, 1].
    pub fn css_rgba(&self, alpha: f32) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_rgba_formats_channels_and_clamps_alpha() {
        let gold = Rgb::new(0xFF, 0xD7, 0x00);
        assert_eq!(gold.css_rgba(0.5), "rgba(255, 215, 0, 0.5)");
        assert_eq!(gold.css_rgba(1.7), "rgba(255, 215, 0, 1)");
        assert_eq!(Rgb::BLACK.css_rgba(-0.2), "rgba(0, 0, 0, 0)");
    }
}
