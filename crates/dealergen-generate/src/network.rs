use std::collections::HashSet;

use dealergen_core::{CatalogView, Classifier, DealerNetwork};
use rand::RngCore;
use tracing::debug;

use crate::dealer::DealerGenerator;
use crate::errors::GenerationError;
use crate::generators::{DealerIdFormat, generate_dealer_id};
use crate::model::{CountRange, GenerateOptions, VinScope};
use crate::palette::Palette;
use crate::sampler::UniqueSampler;

/// Builds a dealer network: a random number of dealers with distinct ids.
#[derive(Debug, Clone)]
pub struct NetworkGenerator<'a> {
    dealer: DealerGenerator<'a>,
    dealers: CountRange,
    vin_scope: VinScope,
    sampler: UniqueSampler,
}

impl<'a> NetworkGenerator<'a> {
    pub fn new(view: &'a CatalogView, palette: &'a Palette) -> Self {
        Self::from_options(view, palette, &GenerateOptions::default())
    }

    pub fn from_options(
        view: &'a CatalogView,
        palette: &'a Palette,
        options: &GenerateOptions,
    ) -> Self {
        let sampler = UniqueSampler::new(options.retry_multiplier);
        Self {
            dealer: DealerGenerator::new(view, palette)
                .with_vehicles(options.vehicles)
                .with_sampler(sampler),
            dealers: options.dealers,
            vin_scope: options.vin_scope,
            sampler,
        }
    }

    /// Classifier used to tag vehicles drawn from the combined view.
    pub fn with_classifier(mut self, classifier: &'a Classifier) -> Self {
        self.dealer = self.dealer.with_classifier(classifier);
        self
    }

    pub fn generate(&self, rng: &mut dyn RngCore) -> Result<DealerNetwork, GenerationError> {
        self.dealers.validate("dealers")?;

        let count = self.dealers.sample(rng);
        // Ids are drawn up front so they are distinct across the network.
        let ids = self
            .sampler
            .sample_with(count, &DealerIdFormat::PLAIN, |format| {
                generate_dealer_id(rng, format)
            })?;

        let mut network_vins = HashSet::new();
        let mut dealers = Vec::with_capacity(ids.len());
        for id in ids {
            let mut dealer = match self.vin_scope {
                VinScope::Network => self.dealer.generate_with_vins(rng, &mut network_vins)?,
                VinScope::Dealer => self.dealer.generate(rng)?,
            };
            dealer.dealer_id = id;
            dealers.push(dealer);
        }

        let network = DealerNetwork::new(dealers);
        debug!(
            view = %self.dealer.view().kind,
            dealers = network.dealers.len(),
            vehicles = network.vehicle_count(),
            "dealer network generated"
        );
        Ok(network)
    }
}

/// Generate a network from `view` with default options and palette.
pub fn generate_network(
    view: &CatalogView,
    rng: &mut dyn RngCore,
) -> Result<DealerNetwork, GenerationError> {
    let palette = Palette::default();
    NetworkGenerator::new(view, &palette).generate(rng)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use dealergen_core::{Catalog, CatalogEntry, ViewKind, validate_network};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogEntry {
                year: 2017,
                make: "Subaru".to_string(),
                model: "BRZ S".to_string(),
                group: "N200".to_string(),
            },
            CatalogEntry {
                year: 2016,
                make: "Ford".to_string(),
                model: "Focus RS".to_string(),
                group: "N300".to_string(),
            },
        ])
    }

    #[test]
    fn network_respects_cardinalities_and_unique_ids() {
        let view = catalog().view(ViewKind::Standard);
        let mut rng = ChaCha8Rng::seed_from_u64(31);

        for _ in 0..50 {
            let network = generate_network(&view, &mut rng).expect("network");
            assert!((3..=7).contains(&network.dealers.len()));
            let ids: HashSet<_> = network.dealers.iter().map(|d| &d.dealer_id).collect();
            assert_eq!(ids.len(), network.dealers.len());
            assert!(validate_network(&network).is_ok());
        }
    }

    #[test]
    fn dealer_scope_still_keeps_vins_distinct_per_dealer() {
        let view = catalog().view(ViewKind::Standard);
        let palette = Palette::default();
        let options = GenerateOptions {
            vin_scope: VinScope::Dealer,
            ..GenerateOptions::default()
        };
        let network = NetworkGenerator::from_options(&view, &palette, &options)
            .generate(&mut ChaCha8Rng::seed_from_u64(32))
            .expect("network");

        for dealer in &network.dealers {
            let vins: HashSet<_> = dealer.vehicles.iter().map(|v| &v.vin).collect();
            assert_eq!(vins.len(), dealer.vehicles.len());
        }
    }

    #[test]
    fn fixed_ranges_are_honoured() {
        let view = catalog().view(ViewKind::Standard);
        let palette = Palette::default();
        let options = GenerateOptions {
            dealers: CountRange::new(2, 2),
            vehicles: CountRange::new(1, 1),
            ..GenerateOptions::default()
        };
        let network = NetworkGenerator::from_options(&view, &palette, &options)
            .generate(&mut ChaCha8Rng::seed_from_u64(33))
            .expect("network");

        assert_eq!(network.dealers.len(), 2);
        assert_eq!(network.vehicle_count(), 2);
    }
}
