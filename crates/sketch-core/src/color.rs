/// 8-bit RGBA colour as consumed by the canvas executor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// White at an alpha stored as a float budget (clamped into 0..=255).
    pub fn white_alpha(alpha: f32) -> Self {
        Self::WHITE.with_alpha(alpha_to_u8(alpha))
    }

    /// Component-wise linear interpolation, `t` clamped to \[0, 1\].
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// CSS `rgba()` string for the 2D context fill/stroke styles.
    pub fn css(&self) -> String {
        format!(
            "rgba({},{},{},{:.3})",
            self.r,
            self.g,
            self.b,
            self.a as f32 / 255.0
        )
    }
}

#[inline]
pub fn alpha_to_u8(alpha: f32) -> u8 {
    alpha.round().clamp(0.0, 255.0) as u8
}

// Sky gradient, top to bottom
pub const SKY_TOP: Rgba = Rgba::rgb(0x0f, 0x20, 0x27);
pub const SKY_BOTTOM: Rgba = Rgba::rgb(0x2c, 0x53, 0x64);

// Halftone dot palette
pub const LINE_COLORS: [Rgba; 4] = [
    Rgba::rgb(0x64, 0x39, 0xFF),
    Rgba::rgb(0x4F, 0x75, 0xFF),
    Rgba::rgb(0x00, 0xCC, 0xDD),
    Rgba::rgb(0x7C, 0xF5, 0xFF),
];
