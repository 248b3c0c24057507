use std::fmt;

/// HSL color with the hue in degrees and saturation/lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl HslColor {
    /// Fully saturated, mid-lightness color for the given hue.
    pub const fn from_hue(hue: f64) -> Self {
        Self {
            hue,
            saturation: 100.0,
            lightness: 50.0,
        }
    }

    /// Convert to 8-bit RGB. The hue wraps into `[0, 360)`; a non-finite hue
    /// yields black.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgb(self) -> (u8, u8, u8) {
        if !self.hue.is_finite() {
            return (0, 0, 0);
        }

        let h = self.hue.rem_euclid(360.0) / 60.0;
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);

        let chroma = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
        let x = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = match h as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        (channel(r), channel(g), channel(b))
    }
}

impl fmt::Display for HslColor {
    /// CSS form, e.g. `hsl(226.15384615384616, 100%, 50%)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Affine map from a numeric domain onto a hue range. Not clamped: values
/// outside the domain extrapolate past the range ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueScale {
    pub domain: [f64; 2],
    pub range: [f64; 2],
}

impl HueScale {
    pub const fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    pub fn hue(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [h0, h1] = self.range;
        h0 + (value - d0) * (h1 - h0) / (d1 - d0)
    }

    pub fn color(&self, value: f64) -> HslColor {
        HslColor::from_hue(self.hue(value))
    }
}

/// Color string for `value` interpolated over `domain` into the hue `range`.
pub fn color_hsl(value: f64, domain: [f64; 2], range: [f64; 2]) -> String {
    HueScale::new(domain, range).color(value).to_string()
}
