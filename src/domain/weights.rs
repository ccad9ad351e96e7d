use super::ConfigError;

/// Trait for the radial weighting applied when building a kernel.
/// Enables different kernel shapes over the same generator.
pub trait RadialWeight: Send + Sync {
    /// Name of the weighting
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Weight at normalized distance `r`, only ever called with `r` in (0, 1]
    fn weight(&self, r: f32) -> f32;
}

/// Smooth bump peaking at r = 0.5 and vanishing at both ends.
/// The usual Lenia shell.
#[derive(Clone, Copy)]
pub struct SmoothBump;

impl RadialWeight for SmoothBump {
    fn name(&self) -> &'static str {
        "Bump"
    }

    fn description(&self) -> &'static str {
        "exp(4 - 1/(r(1-r)))"
    }

    fn weight(&self, r: f32) -> f32 {
        // At r = 1 the denominator is zero and the exponent goes to -inf, giving exactly 0.
        (4.0 * (1.0 - 1.0 / (4.0 * r * (1.0 - r)))).exp()
    }
}

/// Flat ring: full weight between a quarter and three quarters of the radius
#[derive(Clone, Copy)]
pub struct Ring;

impl RadialWeight for Ring {
    fn name(&self) -> &'static str {
        "Ring"
    }

    fn description(&self) -> &'static str {
        "1 on (0.25, 0.75)"
    }

    fn weight(&self, r: f32) -> f32 {
        if r > 0.25 && r < 0.75 { 1.0 } else { 0.0 }
    }
}

/// Get all available weightings
pub fn all_weights() -> Vec<(&'static str, Box<dyn RadialWeight>)> {
    vec![
        ("Bump", Box::new(SmoothBump) as Box<dyn RadialWeight>),
        ("Ring", Box::new(Ring)),
    ]
}

/// Get default weighting (smooth bump)
pub fn default_weight() -> Box<dyn RadialWeight> {
    Box::new(SmoothBump)
}

/// Look up a weighting by name, ignoring case
pub fn weight_by_name(name: &str) -> Result<Box<dyn RadialWeight>, ConfigError> {
    all_weights()
        .into_iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, weight)| weight)
        .ok_or_else(|| ConfigError::UnknownWeight(name.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_peaks_at_half() {
        let bump = SmoothBump;
        assert!((bump.weight(0.5) - 1.0).abs() < 1e-6);
        assert!(bump.weight(0.25) < bump.weight(0.5));
        assert!(bump.weight(0.75) < bump.weight(0.5));
    }

    #[test]
    fn test_bump_vanishes_at_edge() {
        assert_eq!(SmoothBump.weight(1.0), 0.0);
    }

    #[test]
    fn test_bump_is_positive_inside() {
        for i in 5..=95 {
            let r = i as f32 / 100.0;
            assert!(SmoothBump.weight(r) > 0.0, "r = {r}");
        }
    }

    #[test]
    fn test_ring_band() {
        let ring = Ring;
        assert_eq!(ring.weight(0.25), 0.0);
        assert_eq!(ring.weight(0.5), 1.0);
        assert_eq!(ring.weight(0.75), 0.0);
        assert_eq!(ring.weight(1.0), 0.0);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = all_weights().iter().map(|(n, _)| *n).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(weight_by_name("Ring").unwrap().name(), "Ring");
        assert_eq!(weight_by_name("bump").unwrap().name(), "Bump");
        assert_eq!(
            weight_by_name("triangle").err(),
            Some(ConfigError::UnknownWeight("triangle".into()))
        );
    }

    #[test]
    fn test_names_match_weightings() {
        for (name, weight) in all_weights() {
            assert_eq!(name, weight.name());
            assert!(!weight.description().is_empty());
        }
    }
}
