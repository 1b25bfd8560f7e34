//! Runtime game configuration.

use melt_tetris_core::{GridSize, KindRandomizer, PoolRandomizer, UniformRandomizer};

use crate::types::DEFAULT_SPEED;

/// How the next piece kind is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomizerKind {
    #[default]
    Uniform,
    Pool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub grid: GridSize,
    pub speed: u32,
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub randomizer: RandomizerKind,
    /// Start with computer placement switched on.
    pub auto: bool,
}

impl GameConfig {
    pub fn build_randomizer(&self) -> Box<dyn KindRandomizer> {
        match (self.randomizer, self.seed) {
            (RandomizerKind::Uniform, Some(seed)) => Box::new(UniformRandomizer::seeded(seed)),
            (RandomizerKind::Uniform, None) => Box::new(UniformRandomizer::from_entropy()),
            (RandomizerKind::Pool, Some(seed)) => Box::new(PoolRandomizer::seeded(seed)),
            (RandomizerKind::Pool, None) => Box::new(PoolRandomizer::from_entropy()),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            speed: DEFAULT_SPEED,
            seed: None,
            randomizer: RandomizerKind::Uniform,
            auto: false,
        }
    }
}
