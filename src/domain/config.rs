use super::{ConfigError, GrowthParams, patch_count};

/// Everything needed to start a session.
/// Set once; the grid and kernel are derived from it.
#[derive(Clone, Debug, PartialEq)]
pub struct LeniaConfig {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    /// On-screen size of one cell in pixels, used by the viewer only
    pub cell_size: u32,
    pub radius: i32,
    pub dt: f32,
    pub random_density: f32,
    pub noise_factor: f32,
    pub growth: GrowthParams,
}

impl Default for LeniaConfig {
    fn default() -> Self {
        presets::classic()
    }
}

impl LeniaConfig {
    /// Reject values that would make the simulation meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.radius < 1 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ConfigError::InvalidTimeStep(self.dt));
        }
        patch_count(self.width, self.height, self.radius, self.random_density)?;
        if !self.noise_factor.is_finite() || self.noise_factor < 0.0 {
            return Err(ConfigError::InvalidNoiseFactor(self.noise_factor));
        }
        self.growth.validate()
    }

    /// Window size in pixels for the viewer
    pub fn window_size(&self) -> (u32, u32) {
        (
            self.width as u32 * self.cell_size,
            self.height as u32 * self.cell_size,
        )
    }
}

/// Named configurations
pub mod presets {
    use super::*;

    /// Square grid with a wide smooth kernel
    pub fn classic() -> LeniaConfig {
        LeniaConfig {
            name: "classic",
            width: 255,
            height: 255,
            cell_size: 3,
            radius: 13,
            dt: 0.1,
            random_density: 0.5,
            noise_factor: 0.05,
            growth: GrowthParams::default(),
        }
    }

    /// Small grid with a couple of sparse patches
    pub fn small() -> LeniaConfig {
        LeniaConfig {
            name: "small",
            width: 120,
            height: 120,
            cell_size: 5,
            random_density: 5.0,
            ..classic()
        }
    }

    /// Wide screen-filling grid
    pub fn wide() -> LeniaConfig {
        LeniaConfig {
            name: "wide",
            width: 960,
            height: 505,
            cell_size: 2,
            random_density: 5.0,
            ..classic()
        }
    }

    /// Grid exactly the size of the kernel, for looking at its shape
    pub fn kernel_view() -> LeniaConfig {
        let base = classic();
        let side = (2 * base.radius + 1) as usize;
        LeniaConfig {
            name: "kernel_view",
            width: side,
            height: side,
            cell_size: 10,
            ..base
        }
    }

    /// Get all available presets
    pub fn all_presets() -> Vec<LeniaConfig> {
        vec![classic(), small(), wide(), kernel_view()]
    }

    /// Look up a preset by name
    pub fn by_name(name: &str) -> Result<LeniaConfig, ConfigError> {
        all_presets()
            .into_iter()
            .find(|preset| preset.name == name)
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_owned()))
    }
}
