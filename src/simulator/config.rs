//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of battles to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Drive every battle with the fixed-zero source instead of a generator
    pub fixed_zero: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per battle)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            fixed_zero: false,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Seeded config; battle `i` uses seed `seed + i`, wrapping at `u64::MAX`
    pub fn reproducible(num_runs: u32, seed: u64) -> Self {
        Self {
            num_runs,
            seed: Some(seed),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.num_runs, 1000);
        assert!(config.seed.is_none());
        assert!(!config.fixed_zero);
    }

    #[test]
    fn test_reproducible_config() {
        let config = SimConfig::reproducible(25, 7);
        assert_eq!(config.num_runs, 25);
        assert_eq!(config.seed, Some(7));
    }
}
