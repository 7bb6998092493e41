use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Instant;

use dealergen_core::{
    Catalog, CatalogView, Dataset, DatasetData, DealerNetwork, InventoryStats, ViewKind,
    inventory_stats, summarize, summarize_inventory,
};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::assets::default_catalog;
use crate::errors::GenerationError;
use crate::model::GenerateOptions;
use crate::network::NetworkGenerator;
use crate::palette::Palette;

/// Entry point for producing datasets from a shared, read-only catalog.
///
/// Every call allocates its own random source and uniqueness sets; the only
/// state kept between calls is the last issued id.
#[derive(Debug)]
pub struct DatasetEngine {
    catalog: Arc<Catalog>,
    options: GenerateOptions,
    palette: Palette,
    last_id: AtomicI64,
}

impl DatasetEngine {
    pub fn new(catalog: Arc<Catalog>, options: GenerateOptions) -> Result<Self, GenerationError> {
        options.validate()?;
        Ok(Self {
            catalog,
            options,
            palette: Palette::default(),
            last_id: AtomicI64::new(i64::MIN),
        })
    }

    pub fn with_palette(mut self, palette: Palette) -> Result<Self, GenerationError> {
        palette.validate()?;
        self.palette = palette;
        Ok(self)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The catalog partition dealer inventories are drawn from.
    pub fn view(&self) -> CatalogView {
        self.catalog.view(self.options.view)
    }

    /// Build a dataset stamped with the current time.
    ///
    /// Uses `options.seed` when set, otherwise a fresh OS-seeded source.
    pub fn build_dataset(&self) -> Result<Dataset, GenerationError> {
        let mut rng = match self.options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        let id = self.next_id(chrono::Utc::now().timestamp_millis());
        self.build_dataset_with(&mut rng, id)
    }

    /// Build a dataset from an injected random source and id.
    pub fn build_dataset_with(
        &self,
        rng: &mut dyn RngCore,
        id: i64,
    ) -> Result<Dataset, GenerationError> {
        let start = Instant::now();
        let view = self.view();
        let network = self.generate_network(&view, rng)?;
        let summary = summarize(&network);

        info!(
            id,
            view = %view.kind,
            dealers = summary.counts.dealers,
            vehicles = summary.counts.vehicles,
            duration_ms = start.elapsed().as_millis() as u64,
            "dataset generated"
        );

        Ok(Dataset {
            id,
            data: DatasetData {
                dealers: network.dealers,
            },
            summary,
        })
    }

    /// Generate a network from any view with this engine's options.
    pub fn generate_network(
        &self,
        view: &CatalogView,
        rng: &mut dyn RngCore,
    ) -> Result<DealerNetwork, GenerationError> {
        NetworkGenerator::from_options(view, &self.palette, &self.options)
            .with_classifier(self.catalog.classifier())
            .generate(rng)
    }

    /// Exotic/standard split over the vehicles of a fresh network stocked from
    /// the combined view. The classifier is applied to the flattened vehicles.
    pub fn network_stats(
        &self,
        rng: &mut dyn RngCore,
    ) -> Result<InventoryStats, GenerationError> {
        let view = self.catalog.view(ViewKind::All);
        let network = self.generate_network(&view, rng)?;
        let stats = summarize_inventory(&network, self.catalog.classifier());
        debug!(
            total = stats.total,
            exotics = stats.exotics,
            normal = stats.normal,
            "network stats computed"
        );
        Ok(stats)
    }

    /// Exotic/standard split of the raw catalog entries.
    pub fn catalog_stats(&self) -> InventoryStats {
        inventory_stats(self.catalog.entries(), self.catalog.classifier())
    }

    // Clock readings can repeat or step back; ids never do the latter.
    fn next_id(&self, now: i64) -> i64 {
        let previous = self.last_id.fetch_max(now, Ordering::SeqCst);
        previous.max(now)
    }
}

/// Build a dataset from the embedded catalog with default options.
pub fn build_dataset() -> Result<Dataset, GenerationError> {
    DatasetEngine::new(default_catalog()?, GenerateOptions::default())?.build_dataset()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_never_decrease() {
        let engine = DatasetEngine::new(Arc::new(Catalog::default()), GenerateOptions::default())
            .expect("engine");
        assert_eq!(engine.next_id(100), 100);
        assert_eq!(engine.next_id(90), 100);
        assert_eq!(engine.next_id(101), 101);
    }

    #[test]
    fn invalid_options_are_rejected_up_front() {
        let options = GenerateOptions {
            retry_multiplier: 0,
            ..GenerateOptions::default()
        };
        let result = DatasetEngine::new(Arc::new(Catalog::default()), options);
        assert!(matches!(result, Err(GenerationError::InvalidConfig(_))));
    }

    #[test]
    fn network_stats_count_generated_vehicles() {
        let catalog = default_catalog().expect("catalog");
        let engine = DatasetEngine::new(catalog, GenerateOptions::default()).expect("engine");
        let stats = engine
            .network_stats(&mut ChaCha8Rng::seed_from_u64(77))
            .expect("stats");

        let view = engine.catalog().view(ViewKind::All);
        let network = engine
            .generate_network(&view, &mut ChaCha8Rng::seed_from_u64(77))
            .expect("network");
        assert_eq!(stats.total, network.vehicle_count());
        assert_eq!(stats.exotics + stats.normal, stats.total);
        assert!((9..=98).contains(&stats.total));
    }

    #[test]
    fn seeded_engine_is_reproducible() {
        let options = GenerateOptions {
            seed: Some(99),
            ..GenerateOptions::default()
        };
        let engine =
            DatasetEngine::new(default_catalog().expect("catalog"), options).expect("engine");
        let first = engine.build_dataset().expect("first");
        let second = engine.build_dataset().expect("second");
        assert_eq!(first.data, second.data);
        assert!(second.id >= first.id);
    }
}
