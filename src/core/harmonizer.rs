use crate::core::color_space::Oklch;
use crate::domain::model::{Color, ColorScale, ScaleSet, Step};
use crate::utils::error::{PaletteError, Result};

/// Equalizes perceived lightness across scales, step by step.
///
/// For every step the Oklch lightness of all scales is averaged, then each
/// color is rebuilt with that mean lightness and its own chroma and hue.
/// The set is walked in key order, so the result does not depend on how it
/// was built. A single scale is returned unchanged.
pub fn harmonize(scales: &ScaleSet) -> Result<ScaleSet> {
    if scales.is_empty() {
        return Err(PaletteError::EmptyInput);
    }

    if scales.len() == 1 {
        tracing::debug!("Single scale, nothing to harmonize");
        return Ok(scales.clone());
    }

    let converted: Vec<(&String, [Oklch; 9])> = scales
        .iter()
        .map(|(id, scale)| (id, Step::ALL.map(|step| Oklch::from(scale[step]))))
        .collect();

    let means = Step::ALL.map(|step| {
        let mean = mean_lightness(converted.iter().map(|(_, lch)| lch[step.index()].l));
        tracing::trace!("Step {} mean lightness {:.4}", step, mean);
        mean
    });

    tracing::debug!("Harmonizing {} scales", converted.len());

    Ok(converted
        .into_iter()
        .map(|(id, lch)| {
            let scale = ColorScale::from_fn(|step| {
                let i = step.index();
                Color::from(lch[i].with_lightness(means[i]))
            });
            (id.clone(), scale)
        })
        .collect())
}

fn mean_lightness(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let count = values.len();
    values.sum::<f64>() / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generator::generate;

    fn set(entries: &[(&str, &str)]) -> ScaleSet {
        entries
            .iter()
            .map(|(id, hex)| (id.to_string(), generate(hex).unwrap()))
            .collect()
    }

    #[test]
    fn test_empty_set_is_rejected() {
        assert!(matches!(
            harmonize(&ScaleSet::new()),
            Err(PaletteError::EmptyInput)
        ));
    }

    #[test]
    fn test_singleton_is_unchanged() {
        let input = set(&[("a", "#6831F2")]);
        assert_eq!(harmonize(&input).unwrap(), input);
    }

    #[test]
    fn test_red_and_blue_share_lightness() {
        let input = set(&[("red", "#FF0000"), ("blue", "#0000FF")]);
        let output = harmonize(&input).unwrap();

        for step in Step::ALL {
            let red = Oklch::from(output["red"][step]);
            let blue = Oklch::from(output["blue"][step]);
            assert!(
                (red.l - blue.l).abs() < 0.01,
                "step {}: {} vs {}",
                step,
                red.l,
                blue.l
            );
        }

        let red_50 = Oklch::from(output["red"][Step::S50]);
        let blue_50 = Oklch::from(output["blue"][Step::S50]);
        assert!(red_50.h < 60.0 || red_50.h > 330.0, "red hue {}", red_50.h);
        assert!((220.0..300.0).contains(&blue_50.h), "blue hue {}", blue_50.h);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = set(&[("red", "#FF0000"), ("blue", "#0000FF")]);
        let snapshot = input.clone();
        let _ = harmonize(&input).unwrap();
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_mean_lightness() {
        let values = vec![0.2, 0.4, 0.9];
        assert!((mean_lightness(values.into_iter()) - 0.5).abs() < 1e-12);
    }
}
