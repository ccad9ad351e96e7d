use crate::domain::{Grid, Kernel, LeniaConfig, LeniaError, RadialWeight, StepMode, perturb, reseed};
use crate::persistence;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Whether the session advances on its own every tick
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

impl RunState {
    pub const fn toggled(self) -> Self {
        match self {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        }
    }

    pub const fn is_running(self) -> bool {
        matches!(self, RunState::Running)
    }
}

/// Discrete triggers coming from whatever input layer drives the session
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Advance exactly one step
    Step,
    /// Switch between paused and running
    ToggleRun,
    /// Fill the grid with fresh random patches
    Reseed,
    /// Restore the last reseeded or loaded grid
    ResetToSnapshot,
    /// Write the snapshot to `<saves>/<name>.blob`
    Save(String),
    /// Read `<saves>/<name>.blob` into the snapshot and live grid
    Load(String),
    /// Add noise to the live grid
    Perturb,
}

/// Session orchestrates the simulation.
/// It owns the grid, the kernel and the random generator, and serializes
/// every mutation behind `&mut self`.
pub struct Session {
    config: LeniaConfig,
    grid: Grid,
    kernel: Kernel,
    weight: Box<dyn RadialWeight>,
    rng: StdRng,
    seed: u64,
    run_state: RunState,
    step_mode: StepMode,
    generation: u64,
    saves_dir: PathBuf,
    last_step_time_ms: f32,
}

impl Session {
    /// Start a session from `config` with the given kernel shape,
    /// seeded from the wall clock
    pub fn new(config: LeniaConfig, weight: Box<dyn RadialWeight>) -> Result<Self, LeniaError> {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_weight(config, weight, seed)
    }

    /// Start a session with an explicit kernel shape and random seed.
    /// The grid is reseeded once so the session opens on something alive.
    pub fn with_weight(
        config: LeniaConfig,
        weight: Box<dyn RadialWeight>,
        seed: u64,
    ) -> Result<Self, LeniaError> {
        config.validate()?;
        let kernel = Kernel::generate(config.radius, weight.as_ref())?;
        let grid = Grid::new(config.width, config.height)?;

        let mut session = Self {
            config,
            grid,
            kernel,
            weight,
            rng: StdRng::seed_from_u64(seed),
            seed,
            run_state: RunState::Paused,
            step_mode: StepMode::default(),
            generation: 0,
            saves_dir: PathBuf::from(persistence::DEFAULT_SAVE_DIR),
            last_step_time_ms: 0.0,
        };
        session.reseed()?;

        log::info!(
            "session '{}' started: {}x{} grid, radius {}, {} kernel [{}] (sum {:.3}), seed {}",
            session.config.name,
            session.config.width,
            session.config.height,
            session.config.radius,
            session.weight.name(),
            session.weight.description(),
            session.kernel.sum(),
            seed
        );
        Ok(session)
    }

    /// Keep checkpoints somewhere other than `./saves` (builder pattern)
    pub fn with_saves_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.saves_dir = dir.into();
        self
    }

    /// Set the step implementation
    pub fn set_step_mode(&mut self, mode: StepMode) {
        self.step_mode = mode;
    }

    /// Apply one trigger event
    pub fn handle(&mut self, event: SessionEvent) -> Result<(), LeniaError> {
        match event {
            SessionEvent::Step => self.step(),
            SessionEvent::ToggleRun => {
                self.run_state = self.run_state.toggled();
                log::debug!("run state is now {:?}", self.run_state);
            }
            SessionEvent::Reseed => self.reseed()?,
            SessionEvent::ResetToSnapshot => {
                self.grid.reset_to_snapshot();
                self.generation = 0;
            }
            SessionEvent::Save(name) => {
                persistence::save(self.save_path(&name), &self.grid)?;
            }
            SessionEvent::Load(name) => {
                persistence::load_into(self.save_path(&name), &mut self.grid)?;
                self.generation = 0;
            }
            SessionEvent::Perturb => {
                perturb(&mut self.grid, self.config.noise_factor, &mut self.rng)?;
            }
        }
        Ok(())
    }

    /// Advance one step if running; returns whether a step happened
    pub fn tick(&mut self) -> bool {
        if !self.run_state.is_running() {
            return false;
        }
        self.step();
        true
    }

    fn step(&mut self) {
        let start = Instant::now();
        self.step_mode
            .step(&mut self.grid, &self.kernel, &self.config.growth, self.config.dt);
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        log::trace!(
            "generation {} took {:.2}ms ({})",
            self.generation,
            self.last_step_time_ms,
            self.step_mode.name()
        );
    }

    fn reseed(&mut self) -> Result<(), LeniaError> {
        let patches = reseed(
            &mut self.grid,
            self.config.radius,
            self.config.random_density,
            &mut self.rng,
        )?;
        self.generation = 0;
        log::info!("reseeded with {patches} patches");
        Ok(())
    }

    fn save_path(&self, name: &str) -> PathBuf {
        persistence::save_path(&self.saves_dir, name)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    pub fn config(&self) -> &LeniaConfig {
        &self.config
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn step_mode(&self) -> StepMode {
        self.step_mode
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Seed the session's generator was started with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn saves_dir(&self) -> &Path {
        &self.saves_dir
    }

    pub fn last_step_time_ms(&self) -> f32 {
        self.last_step_time_ms
    }
}
