use std::collections::HashSet;

use dealergen_core::{CatalogView, Classifier, Dealer, Vehicle, ViewKind};
use rand::{Rng, RngCore};

use crate::errors::GenerationError;
use crate::generators::{DealerIdFormat, dealer_name, generate_dealer_id, generate_vin, pick};
use crate::model::{CountRange, GenerateOptions};
use crate::palette::Palette;
use crate::sampler::UniqueSampler;

/// Builds one randomized dealer from a catalog view.
#[derive(Debug, Clone)]
pub struct DealerGenerator<'a> {
    view: &'a CatalogView,
    palette: &'a Palette,
    vehicles: CountRange,
    sampler: UniqueSampler,
    classifier: Option<&'a Classifier>,
}

impl<'a> DealerGenerator<'a> {
    pub fn new(view: &'a CatalogView, palette: &'a Palette) -> Self {
        let defaults = GenerateOptions::default();
        Self {
            view,
            palette,
            vehicles: defaults.vehicles,
            sampler: UniqueSampler::new(defaults.retry_multiplier),
            classifier: None,
        }
    }

    pub fn with_vehicles(mut self, vehicles: CountRange) -> Self {
        self.vehicles = vehicles;
        self
    }

    pub fn with_sampler(mut self, sampler: UniqueSampler) -> Self {
        self.sampler = sampler;
        self
    }

    /// Tag vehicles drawn from the combined view with their exotic class.
    pub fn with_classifier(mut self, classifier: &'a Classifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn view(&self) -> &CatalogView {
        self.view
    }

    /// Generate a dealer whose VINs are distinct among themselves.
    pub fn generate(&self, rng: &mut dyn RngCore) -> Result<Dealer, GenerationError> {
        let mut vins = HashSet::new();
        self.generate_with_vins(rng, &mut vins)
    }

    /// Generate a dealer whose VINs are also absent from `taken_vins`.
    ///
    /// New VINs are added to `taken_vins`.
    pub fn generate_with_vins(
        &self,
        rng: &mut dyn RngCore,
        taken_vins: &mut HashSet<String>,
    ) -> Result<Dealer, GenerationError> {
        if self.view.cars.is_empty() {
            return Err(GenerationError::EmptyCatalog(format!(
                "{} view has no cars to stock",
                self.view.kind
            )));
        }
        self.vehicles.validate("vehicles")?;
        self.palette.validate()?;

        let count = self.vehicles.sample(rng);
        let vins = self
            .sampler
            .sample_into(count, taken_vins, || generate_vin(rng))?;

        let mut vehicles = Vec::with_capacity(vins.len());
        for vin in vins {
            let index = rng.random_range(0..self.view.cars.len());
            let entry = &self.view.cars[index];
            let color = pick(&self.palette.colors, rng)
                .cloned()
                .ok_or_else(|| GenerationError::InvalidConfig("palette has no colors".into()))?;

            let mut vehicle = Vehicle::from_entry(entry, vin, color);
            if self.view.kind == ViewKind::All
                && let Some(classifier) = self.classifier
            {
                vehicle.exotic = Some(classifier.is_exotic(entry));
            }
            vehicles.push(vehicle);
        }

        Ok(Dealer {
            dealer_id: generate_dealer_id(rng, &DealerIdFormat::PLAIN),
            name: dealer_name(rng, &self.palette.suffixes),
            vehicles,
        })
    }
}
