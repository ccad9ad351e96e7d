//! Precomputed convolution kernel.
//!
//! The kernel is a square of side `2 * radius + 1` built once per
//! configuration and never mutated afterwards. Alongside the dense weights it
//! keeps the list of nonzero taps, so the convolution only visits offsets that
//! actually contribute.

use super::{ConfigError, RadialWeight};

/// One nonzero kernel entry at offset `(dx, dy)` from the cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tap {
    pub dx: i32,
    pub dy: i32,
    pub weight: f32,
}

#[derive(Clone, Debug)]
pub struct Kernel {
    radius: i32,
    /// Row-major by `dy`, side `2 * radius + 1`
    weights: Vec<f32>,
    taps: Vec<Tap>,
    sum: f32,
}

impl Kernel {
    /// Build the kernel from a radial weighting.
    ///
    /// Offsets at normalized distance 0 (the cell itself) or beyond 1 get no
    /// weight. Fails when the radius is below 1 or when no offset ends up with
    /// a nonzero weight, since the neighbourhood sum divides by the total.
    pub fn generate(radius: i32, weighting: &dyn RadialWeight) -> Result<Self, ConfigError> {
        if radius < 1 {
            return Err(ConfigError::InvalidRadius(radius));
        }

        let side = Self::side_for(radius);
        let weights = (-radius..=radius)
            .flat_map(|dy| (-radius..=radius).map(move |dx| (dx, dy)))
            .map(|(dx, dy)| {
                let r = ((dx * dx + dy * dy) as f32).sqrt() / radius as f32;
                if r > 1.0 || r == 0.0 { 0.0 } else { weighting.weight(r) }
            })
            .collect::<Vec<_>>();
        debug_assert_eq!(weights.len(), side * side);

        Self::from_weights(radius, weights)
    }

    /// Build a kernel from explicit weights, row-major by `dy`.
    pub fn from_weights(radius: i32, weights: Vec<f32>) -> Result<Self, ConfigError> {
        if radius < 1 {
            return Err(ConfigError::InvalidRadius(radius));
        }
        let side = Self::side_for(radius);
        if weights.len() != side * side {
            return Err(ConfigError::KernelShape {
                radius,
                expected: side * side,
                actual: weights.len(),
            });
        }

        let mut taps = Vec::new();
        for (idx, &weight) in weights.iter().enumerate() {
            let dx = (idx % side) as i32 - radius;
            let dy = (idx / side) as i32 - radius;
            let centre_weighted = dx == 0 && dy == 0 && weight != 0.0;
            if !weight.is_finite() || weight < 0.0 || centre_weighted {
                return Err(ConfigError::InvalidKernelWeight { dx, dy, weight });
            }
            if weight != 0.0 {
                taps.push(Tap { dx, dy, weight });
            }
        }

        let sum: f32 = taps.iter().map(|tap| tap.weight).sum();
        if sum <= 0.0 || !sum.is_finite() {
            return Err(ConfigError::ZeroKernelSum { radius });
        }

        Ok(Self { radius, weights, taps, sum })
    }

    /// Moore neighbourhood: weight 1 on the eight cells around the centre
    pub fn moore() -> Self {
        let mut weights = vec![1.0; 9];
        weights[4] = 0.0;
        Self::from_weights(1, weights).expect("moore kernel is valid")
    }

    const fn side_for(radius: i32) -> usize {
        (2 * radius + 1) as usize
    }

    pub const fn radius(&self) -> i32 {
        self.radius
    }

    /// Side length of the square weight array
    pub const fn side(&self) -> usize {
        Self::side_for(self.radius)
    }

    /// Sum of every nonzero weight, always positive
    pub const fn sum(&self) -> f32 {
        self.sum
    }

    /// Weight at offset `(dx, dy)`, zero outside the window
    pub fn weight(&self, dx: i32, dy: i32) -> f32 {
        if dx.abs() > self.radius || dy.abs() > self.radius {
            return 0.0;
        }
        let side = self.side();
        let col = (dx + self.radius) as usize;
        let row = (dy + self.radius) as usize;
        self.weights[row * side + col]
    }

    /// Largest single weight
    pub fn max_weight(&self) -> f32 {
        self.taps.iter().map(|tap| tap.weight).fold(0.0, f32::max)
    }

    pub fn taps(&self) -> &[Tap] {
        &self.taps
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }
}
