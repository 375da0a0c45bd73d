/// Premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

/// Channel multiplier applied by [`Color::darker`].
const DARKER_FACTOR: f64 = 0.7;

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self::from_premul(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::from_premul(0.0, 0.0, 0.0, 1.0)
    }

    /// sRGB (192, 192, 192).
    #[inline]
    pub const fn light_gray() -> Self {
        Self::from_premul(192.0 / 255.0, 192.0 / 255.0, 192.0 / 255.0, 1.0)
    }

    #[inline]
    pub const fn red() -> Self {
        Self::from_premul(1.0, 0.0, 0.0, 1.0)
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Straight-alpha sRGB bytes, rounded to nearest.
    #[inline]
    pub fn to_srgb_u8(self) -> [u8; 4] {
        let (r, g, b, a) = self.clamped().to_straight();
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(r), q(g), q(b), q(a)]
    }

    /// A darker shade of this color: each straight 8-bit channel is scaled
    /// by 0.7 and truncated, alpha kept. `255` becomes `178`.
    pub fn darker(self) -> Self {
        let (r, g, b, a) = self.clamped().to_straight();
        let shade = |c: f32| {
            let byte = (c * 255.0).round() as f64;
            (byte * DARKER_FACTOR) as u8 as f32 / 255.0
        };
        Self::from_straight(shade(r), shade(g), shade(b), a)
    }

    /// Clamps all channels to [0, 1] and enforces premultiplication.
    #[inline]
    pub fn clamped(self) -> Self {
        let a = self.a.clamp(0.0, 1.0);

        // Clamp premultiplied rgb so it cannot exceed alpha.
        let r = self.r.clamp(0.0, a);
        let g = self.g.clamp(0.0, a);
        let b = self.b.clamp(0.0, a);

        Self { r, g, b, a }
    }

    /// Porter-Duff source-over: `self` drawn on top of `dst`.
    #[inline]
    pub fn over(self, dst: Color) -> Color {
        let k = 1.0 - self.a;
        Color {
            r: self.r + dst.r * k,
            g: self.g + dst.g * k,
            b: self.b + dst.b * k,
            a: self.a + dst.a * k,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darker_truncates_each_channel_and_keeps_alpha() {
        let c = Color::from_srgb_u8(100, 50, 0, 128).darker();
        assert_eq!(c.to_srgb_u8(), [70, 35, 0, 128]);
    }

    #[test]
    fn darker_light_gray_matches_legacy_bytes() {
        // 192 * 0.7 = 134.4, 255 * 0.7 = 178.5; both truncate.
        assert_eq!(Color::light_gray().darker().to_srgb_u8(), [134, 134, 134, 255]);
        assert_eq!(Color::white().darker().to_srgb_u8(), [178, 178, 178, 255]);
    }

    #[test]
    fn srgb_bytes_round_trip_opaque() {
        assert_eq!(Color::from_srgb_u8(12, 200, 99, 255).to_srgb_u8(), [12, 200, 99, 255]);
    }

    #[test]
    fn over_opaque_source_replaces_destination() {
        let out = Color::red().over(Color::white());
        assert_eq!(out, Color::red());
    }

    #[test]
    fn over_transparent_source_keeps_destination() {
        let out = Color::transparent().over(Color::white());
        assert_eq!(out, Color::white());
    }
}
