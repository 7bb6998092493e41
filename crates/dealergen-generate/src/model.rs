use dealergen_core::ViewKind;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

/// Default bound on unique-sampling attempts, as a multiple of the request.
pub const DEFAULT_RETRY_MULTIPLIER: usize = 10;

/// Inclusive integer range used for random cardinalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

impl CountRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn validate(&self, name: &str) -> Result<(), GenerationError> {
        if self.min > self.max {
            return Err(GenerationError::InvalidConfig(format!(
                "{name} min ({}) must be <= max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Uniform pick in `[min, max]`. The range must be valid.
    pub fn sample(&self, rng: &mut dyn RngCore) -> usize {
        rng.random_range(self.min..=self.max)
    }
}

/// Scope over which vehicle VINs are kept distinct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VinScope {
    /// Each dealer samples its VINs independently; cross-dealer repeats are possible.
    Dealer,
    /// VINs are distinct across the whole network.
    #[default]
    Network,
}

/// Options for dataset generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Number of dealers per network.
    pub dealers: CountRange,
    /// Number of vehicles per dealer.
    pub vehicles: CountRange,
    /// Unique sampling gets `retry_multiplier` attempts per accepted value.
    pub retry_multiplier: usize,
    /// Catalog partition dealer inventories are drawn from.
    pub view: ViewKind,
    pub vin_scope: VinScope,
    /// Fixed seed; every dataset is identical when set.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            dealers: CountRange::new(3, 7),
            vehicles: CountRange::new(3, 14),
            retry_multiplier: DEFAULT_RETRY_MULTIPLIER,
            view: ViewKind::Standard,
            vin_scope: VinScope::Network,
            seed: None,
        }
    }
}

impl GenerateOptions {
    pub fn validate(&self) -> Result<(), GenerationError> {
        self.dealers.validate("dealers")?;
        self.vehicles.validate("vehicles")?;
        if self.retry_multiplier == 0 {
            return Err(GenerationError::InvalidConfig(
                "retry_multiplier must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_historical_ranges() {
        let options = GenerateOptions::default();
        assert_eq!(options.dealers, CountRange::new(3, 7));
        assert_eq!(options.vehicles, CountRange::new(3, 14));
        assert_eq!(options.view, ViewKind::Standard);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_range_and_zero_multiplier() {
        let options = GenerateOptions {
            vehicles: CountRange::new(9, 2),
            ..GenerateOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(GenerationError::InvalidConfig(_))
        ));

        let options = GenerateOptions {
            retry_multiplier: 0,
            ..GenerateOptions::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let options: GenerateOptions =
            serde_json::from_str(r#"{"view":"exotic","vin_scope":"dealer"}"#)
                .expect("parse options");
        assert_eq!(options.view, ViewKind::Exotic);
        assert_eq!(options.vin_scope, VinScope::Dealer);
        assert_eq!(options.retry_multiplier, DEFAULT_RETRY_MULTIPLIER);
    }
}
