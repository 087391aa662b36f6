// Run configuration for the uprod binary

use crate::mul::Strategy;

/// Configuration for computing and verifying a product
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MulConfig {
    /// Forced strategy; `None` picks the fastest available one
    pub strategy: Option<Strategy>,
    /// Random operand pairs to verify against the reference
    pub verify_samples: usize,
}

impl MulConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn with_verify_samples(mut self, samples: usize) -> Self {
        self.verify_samples = samples;
        self
    }

    pub fn resolve_strategy(&self) -> Strategy {
        self.strategy.unwrap_or_else(Strategy::detect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MulConfig::default();
        assert_eq!(config.strategy, None);
        assert_eq!(config.verify_samples, 0);
        assert!(matches!(
            config.resolve_strategy(),
            Strategy::Native | Strategy::Asm
        ));
    }

    #[test]
    fn test_builder() {
        let config = MulConfig::default()
            .with_strategy(Strategy::SplitLimb)
            .with_verify_samples(500);
        assert_eq!(config.resolve_strategy(), Strategy::SplitLimb);
        assert_eq!(config.verify_samples, 500);
    }
}
