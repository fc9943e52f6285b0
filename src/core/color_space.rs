//! sRGB <-> linear sRGB <-> Oklab <-> Oklch.
//!
//! Matrices are the published Oklab constants (Björn Ottosson, 2020).
//! Hue is expressed in degrees, `0.0..360.0`.

use crate::domain::model::Color;

/// Slack allowed on linear channels before a color counts as out of gamut.
const GAMUT_EPSILON: f64 = 1e-6;

/// Bisection rounds used when reducing chroma into the sRGB gamut.
const GAMUT_ITERATIONS: usize = 32;

/// Decode an 8 bit sRGB channel into linear light.
#[inline]
pub fn srgb_to_linear(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode linear light into an 8 bit sRGB channel. Clips to `[0, 1]` first.
#[inline]
pub fn linear_to_srgb(linear: f64) -> u8 {
    let l = if linear.is_finite() { linear.clamp(0.0, 1.0) } else { 0.0 };
    let c = if l <= 0.003_130_8 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    };
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Oklab {
    pub fn from_linear_rgb([r, g, b]: [f64; 3]) -> Self {
        let l = 0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b;
        let m = 0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b;
        let s = 0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Self {
            l: 0.210_454_255_3 * l_ + 0.793_617_785_0 * m_ - 0.004_072_046_8 * s_,
            a: 1.977_998_495_1 * l_ - 2.428_592_205_0 * m_ + 0.450_593_709_9 * s_,
            b: 0.025_904_037_1 * l_ + 0.782_771_766_2 * m_ - 0.808_675_766_0 * s_,
        }
    }

    /// Linear sRGB, unclipped. Channels outside `[0, 1]` mean out of gamut.
    pub fn to_linear_rgb(self) -> [f64; 3] {
        let l_ = self.l + 0.396_337_777_4 * self.a + 0.215_803_757_3 * self.b;
        let m_ = self.l - 0.105_561_345_8 * self.a - 0.063_854_172_8 * self.b;
        let s_ = self.l - 0.089_484_177_5 * self.a - 1.291_485_548_0 * self.b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        [
            4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s,
            -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s,
            -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701_0 * s,
        ]
    }

    pub fn to_oklch(self) -> Oklch {
        let c = self.a.hypot(self.b);
        let h = self.b.atan2(self.a).to_degrees().rem_euclid(360.0);
        Oklch { l: self.l, c, h }
    }
}

/// Cylindrical Oklab: lightness `0..=1`, chroma `>= 0`, hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Oklch {
    pub fn to_oklab(self) -> Oklab {
        let (sin, cos) = self.h.to_radians().sin_cos();
        Oklab {
            l: self.l,
            a: self.c * cos,
            b: self.c * sin,
        }
    }

    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    pub fn is_in_gamut(self) -> bool {
        self.to_oklab()
            .to_linear_rgb()
            .iter()
            .all(|&channel| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(&channel))
    }

    /// Brings the color into sRGB by lowering chroma only, so lightness and
    /// hue survive unchanged. Colors already in gamut are returned as is.
    #[must_use]
    pub fn map_into_gamut(self) -> Self {
        let l = if self.l.is_finite() { self.l.clamp(0.0, 1.0) } else { 0.0 };
        let c = if self.c.is_finite() { self.c.max(0.0) } else { 0.0 };
        let h = if self.h.is_finite() { self.h } else { 0.0 };
        let color = Self { l, c, h };

        if color.is_in_gamut() {
            return color;
        }

        // chroma 0 is always in gamut for l in [0, 1]
        let (mut lo, mut hi) = (0.0, c);
        for _ in 0..GAMUT_ITERATIONS {
            let mid = (lo + hi) / 2.0;
            if color.with_chroma(mid).is_in_gamut() {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        let mapped = color.with_chroma(lo);
        tracing::trace!(
            "Gamut mapped oklch({:.4} {:.4} {:.2}) to chroma {:.4}",
            l,
            c,
            h,
            lo
        );
        mapped
    }

    fn with_chroma(self, c: f64) -> Self {
        Self { c, ..self }
    }
}

impl From<Color> for Oklab {
    fn from(color: Color) -> Self {
        Oklab::from_linear_rgb([
            srgb_to_linear(color.r),
            srgb_to_linear(color.g),
            srgb_to_linear(color.b),
        ])
    }
}

impl From<Color> for Oklch {
    fn from(color: Color) -> Self {
        Oklab::from(color).to_oklch()
    }
}

/// Gamut maps, clips residual error and quantizes to 8 bits.
impl From<Oklch> for Color {
    fn from(lch: Oklch) -> Self {
        let [r, g, b] = lch.map_into_gamut().to_oklab().to_linear_rgb();
        Color::from_rgb(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
    }
}
