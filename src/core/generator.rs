use crate::core::color_space::Oklch;
use crate::domain::model::{Color, ColorScale, Step};
use crate::utils::error::Result;

/// How a step is derived from the base color in Oklch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepAdjustment {
    pub step: Step,
    /// Added to the base lightness, then clamped to `[0, 1]`.
    pub lightness_offset: f64,
    /// Multiplies the base chroma.
    pub chroma_factor: f64,
}

/// Indexed by `Step::index()`.
#[rustfmt::skip]
pub const STEP_ADJUSTMENTS: [StepAdjustment; 9] = [
    StepAdjustment { step: Step::S50, lightness_offset: 0.35, chroma_factor: 0.3 },
    StepAdjustment { step: Step::S100, lightness_offset: 0.30, chroma_factor: 0.4 },
    StepAdjustment { step: Step::S200, lightness_offset: 0.22, chroma_factor: 0.6 },
    StepAdjustment { step: Step::S300, lightness_offset: 0.15, chroma_factor: 0.8 },
    StepAdjustment { step: Step::S400, lightness_offset: 0.07, chroma_factor: 0.9 },
    StepAdjustment { step: Step::S500, lightness_offset: 0.0, chroma_factor: 1.0 },
    StepAdjustment { step: Step::S600, lightness_offset: -0.07, chroma_factor: 0.95 },
    StepAdjustment { step: Step::S700, lightness_offset: -0.15, chroma_factor: 0.85 },
    StepAdjustment { step: Step::S800, lightness_offset: -0.22, chroma_factor: 0.7 },
];

pub fn adjustment(step: Step) -> &'static StepAdjustment {
    &STEP_ADJUSTMENTS[step.index()]
}

/// Expands a `#RRGGBB` base color into a nine-step scale.
///
/// Step 500 is the parsed input itself; every other step shifts lightness
/// and scales chroma in Oklch while keeping the hue.
pub fn generate(base_hex: &str) -> Result<ColorScale> {
    let base = Color::from_hex(base_hex)?;
    Ok(generate_from_color(base))
}

pub fn generate_from_color(base: Color) -> ColorScale {
    let base_lch = Oklch::from(base);
    tracing::debug!(
        "Generating scale for {} (L={:.4}, C={:.4}, H={:.2})",
        base,
        base_lch.l,
        base_lch.c,
        base_lch.h
    );

    ColorScale::from_fn(|step| {
        if step == Step::BASE {
            base
        } else {
            Color::from(derive_step(base_lch, step))
        }
    })
}

/// The Oklch target for `step` before gamut mapping and quantization.
pub fn derive_step(base: Oklch, step: Step) -> Oklch {
    let adj = adjustment(step);
    Oklch {
        l: (base.l + adj.lightness_offset).clamp(0.0, 1.0),
        c: base.c * adj.chroma_factor,
        h: base.h,
    }
}
