use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::LevelConfig;
use crate::error::LevelError;
use crate::level::{LevelAssembler, LevelDescriptor};

/// Owns the current level and serializes regenerate requests.
///
/// A regenerate computes the whole new level before swapping it in. If the
/// build fails, the previous level stays current.
pub struct LevelSession {
    assembler: LevelAssembler,
    rng: ChaCha8Rng,
    current: Option<LevelDescriptor>,
    generation: u64,
}

impl LevelSession {
    pub fn new(config: LevelConfig) -> Result<Self, LevelError> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self {
            assembler: LevelAssembler::new(config)?,
            rng,
            current: None,
            generation: 0,
        })
    }

    pub fn config(&self) -> &LevelConfig {
        self.assembler.config()
    }

    /// The level from the last successful regenerate.
    pub fn current(&self) -> Option<&LevelDescriptor> {
        self.current.as_ref()
    }

    /// Number of successful regenerates so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Restart the random stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Use `config` for later builds. The random stream continues; call
    /// [`reseed`](Self::reseed) to restart it.
    pub fn set_config(&mut self, config: LevelConfig) -> Result<(), LevelError> {
        self.assembler = LevelAssembler::new(config)?;
        Ok(())
    }

    /// Build a new level and replace the current one.
    pub fn regenerate(&mut self) -> Result<&LevelDescriptor, LevelError> {
        match self.assembler.build(&mut self.rng) {
            Ok(level) => {
                self.generation += 1;
                tracing::debug!(generation = self.generation, "level replaced");
                Ok(self.current.insert(level))
            }
            Err(e) => {
                tracing::warn!(error = %e, "regenerate failed, keeping previous level");
                Err(e)
            }
        }
    }
}
