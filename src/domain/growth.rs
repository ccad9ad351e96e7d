use super::ConfigError;

/// Gaussian growth mapping.
///
/// `growth(sum) = a * exp(-(sum - b)^2 / (2 c^2)) + d`: a bump of height `a`
/// centred on `b` with width `c`, shifted by `d`. With `d = -1` cells decay
/// unless their neighbourhood density sits close to `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthParams {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

impl GrowthParams {
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self { a, b, c, d }
    }

    /// Reject parameters that would let NaN into the grid.
    ///
    /// `2 c^2` must be a normal number, otherwise it rounds to zero (or
    /// overflows) and the exponent becomes `0 / 0` at `sum == b`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("a", self.a), ("b", self.b), ("d", self.d)] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidGrowthParam { name, value });
            }
        }
        if !(2.0 * self.c * self.c).is_normal() {
            return Err(ConfigError::InvalidGrowthWidth(self.c));
        }
        Ok(())
    }

    /// Unscaled growth for a normalized neighbourhood sum
    #[inline]
    pub fn growth(&self, sum: f32) -> f32 {
        let diff = sum - self.b;
        self.a * (-(diff * diff) / (2.0 * self.c * self.c)).exp() + self.d
    }

    /// Growth scaled by the time step
    #[inline]
    pub fn delta(&self, sum: f32, dt: f32) -> f32 {
        self.growth(sum) * dt
    }

    /// Apply one update to a committed value, clamped to [0, 1]
    #[inline]
    pub fn apply(&self, old_state: f32, sum: f32, dt: f32) -> f32 {
        (old_state + self.delta(sum, dt)).clamp(0.0, 1.0)
    }
}

impl Default for GrowthParams {
    fn default() -> Self {
        Self::new(2.0, 0.15, 0.015, -1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_is_at_centre() {
        let params = GrowthParams::new(2.0, 0.3, 0.05, -1.0);
        assert_eq!(params.growth(0.3), 1.0);
        assert!(params.growth(0.25) < params.growth(0.3));
        assert!(params.growth(0.35) < params.growth(0.3));
    }

    #[test]
    fn test_far_from_centre_decays() {
        let params = GrowthParams::default();
        assert!((params.growth(1.0) - params.d).abs() < 1e-6);
        assert!((params.growth(0.0) - params.d).abs() < 1e-6);
    }

    #[test]
    fn test_delta_scales_with_dt() {
        let params = GrowthParams::new(2.0, 0.5, 0.1, -1.0);
        assert_eq!(params.delta(0.5, 0.1), params.growth(0.5) * 0.1);
    }

    #[test]
    fn test_validate_rejects_vanishing_width() {
        let tiny = GrowthParams::new(2.0, 0.0, 1e-25, -1.0);
        assert_eq!(tiny.validate(), Err(ConfigError::InvalidGrowthWidth(1e-25)));
        assert!(GrowthParams::new(2.0, 0.0, 0.0, -1.0).validate().is_err());
        assert!(GrowthParams::new(2.0, 0.0, 1e30, -1.0).validate().is_err());
        assert!(GrowthParams::new(2.0, 0.0, f32::NAN, -1.0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_params() {
        assert!(matches!(
            GrowthParams::new(f32::NAN, 0.15, 0.015, -1.0).validate(),
            Err(ConfigError::InvalidGrowthParam { name: "a", .. })
        ));
        assert_eq!(
            GrowthParams::new(2.0, f32::INFINITY, 0.015, -1.0).validate(),
            Err(ConfigError::InvalidGrowthParam { name: "b", value: f32::INFINITY })
        );
        assert_eq!(
            GrowthParams::new(2.0, 0.15, 0.015, f32::NEG_INFINITY).validate(),
            Err(ConfigError::InvalidGrowthParam { name: "d", value: f32::NEG_INFINITY })
        );
        assert_eq!(GrowthParams::default().validate(), Ok(()));
    }

    #[test]
    fn test_smallest_valid_width_stays_in_range() {
        let sharp = GrowthParams::new(2.0, 0.3, 1e-15, -1.0);
        assert_eq!(sharp.validate(), Ok(()));
        for sum in [0.0, 0.3, 0.3000001, 1.0] {
            let next = sharp.apply(0.5, sum, 1.0);
            assert!((0.0..=1.0).contains(&next), "sum = {sum}: {next}");
        }
    }

    #[test]
    fn test_apply_clamps() {
        let wild = GrowthParams::new(100.0, 0.5, 0.1, 0.0);
        assert_eq!(wild.apply(0.5, 0.5, 1.0), 1.0);

        let negative = GrowthParams::new(-100.0, 0.5, 0.1, 0.0);
        assert_eq!(negative.apply(0.5, 0.5, 1.0), 0.0);
    }
}
