use std::collections::HashSet;
use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use dealergen_core::{Catalog, CatalogEntry, DealerNetwork, ViewKind, summarize, validate_dataset};
use dealergen_generate::errors::GenerationError;
use dealergen_generate::{
    DatasetEngine, GenerateOptions, NetworkGenerator, Palette, UniqueSampler, VinScope,
    build_dataset, default_catalog, generate_network,
};

fn fixed_catalog() -> Catalog {
    Catalog::new(vec![
        CatalogEntry {
            year: 2020,
            make: "Toyota".to_string(),
            model: "Supra".to_string(),
            group: "N300".to_string(),
        },
        CatalogEntry {
            year: 2021,
            make: "Mazda".to_string(),
            model: "MX-5".to_string(),
            group: "N400".to_string(),
        },
    ])
}

fn assert_sorted_distinct(values: &[String]) {
    for pair in values.windows(2) {
        assert!(pair[0] < pair[1], "not sorted/distinct: {values:?}");
    }
}

#[test]
fn generated_networks_hold_their_invariants() {
    let catalog = default_catalog().expect("catalog");
    let view = catalog.view(ViewKind::Standard);
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for _ in 0..100 {
        let network = generate_network(&view, &mut rng).expect("network");
        assert!((3..=7).contains(&network.dealers.len()));

        let ids: HashSet<_> = network.dealers.iter().map(|d| d.dealer_id.as_str()).collect();
        assert_eq!(ids.len(), network.dealers.len());

        let mut vins = HashSet::new();
        for dealer in &network.dealers {
            assert!((3..=14).contains(&dealer.vehicles.len()));
            for vehicle in &dealer.vehicles {
                assert!(
                    view.cars.iter().any(|entry| vehicle.matches_entry(entry)),
                    "vehicle {} {} not in view",
                    vehicle.make,
                    vehicle.model
                );
                assert!(vins.insert(vehicle.vin.clone()), "duplicate vin");
            }
        }

        let summary = summarize(&network);
        let total: usize = network.dealers.iter().map(|d| d.vehicles.len()).sum();
        assert_eq!(summary.counts.vehicles, summary.vins.len());
        assert_eq!(summary.counts.vehicles, total);
        assert_eq!(summary.counts.dealers, network.dealers.len());
        assert_sorted_distinct(&summary.groups);
        assert_sorted_distinct(&summary.makes);
    }
}

#[test]
fn empty_network_summary_is_empty() {
    let summary = summarize(&DealerNetwork::default());
    assert!(summary.groups.is_empty());
    assert!(summary.makes.is_empty());
    assert!(summary.vins.is_empty());
    assert_eq!(summary.counts.vehicles, 0);
}

#[test]
fn fixed_catalog_and_single_color_palette() {
    let catalog = fixed_catalog();
    let view = catalog.view(ViewKind::Standard);
    assert_eq!(view.count, 2);

    let palette = Palette::with_colors(["red"]);
    let generator = NetworkGenerator::from_options(&view, &palette, &GenerateOptions::default());
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    for _ in 0..25 {
        let network = generator.generate(&mut rng).expect("network");
        for vehicle in network.dealers.iter().flat_map(|d| d.vehicles.iter()) {
            assert_eq!(vehicle.color, "red");
            assert!(catalog.entries().iter().any(|entry| vehicle.matches_entry(entry)));
        }
    }
}

#[test]
fn exotic_view_only_stocks_exotics() {
    let catalog = default_catalog().expect("catalog");
    let options = GenerateOptions {
        view: ViewKind::Exotic,
        ..GenerateOptions::default()
    };
    let engine = DatasetEngine::new(Arc::clone(&catalog), options).expect("engine");
    let dataset = engine
        .build_dataset_with(&mut ChaCha8Rng::seed_from_u64(41), 1)
        .expect("dataset");

    for dealer in &dataset.data.dealers {
        for vehicle in &dealer.vehicles {
            assert!(catalog.classifier().is_exotic(vehicle));
            assert_eq!(vehicle.exotic, None);
        }
    }
}

#[test]
fn combined_view_tags_every_vehicle() {
    let options = GenerateOptions {
        view: ViewKind::All,
        ..GenerateOptions::default()
    };
    let engine = DatasetEngine::new(default_catalog().expect("catalog"), options).expect("engine");
    let dataset = engine
        .build_dataset_with(&mut ChaCha8Rng::seed_from_u64(42), 2)
        .expect("dataset");

    for vehicle in dataset.data.dealers.iter().flat_map(|d| d.vehicles.iter()) {
        assert_eq!(
            vehicle.exotic,
            Some(engine.catalog().classifier().is_exotic(vehicle))
        );
    }
}

#[test]
fn datasets_validate_and_differ_between_calls() {
    let first = build_dataset().expect("first dataset");
    let second = build_dataset().expect("second dataset");

    assert!(validate_dataset(&first).is_ok());
    assert!(validate_dataset(&second).is_ok());
    assert!(second.id >= first.id);
    assert_ne!(first.summary.vins, second.summary.vins);
}

#[test]
fn engine_ids_are_monotonic_across_calls() {
    let catalog = default_catalog().expect("catalog");
    let engine = DatasetEngine::new(catalog, GenerateOptions::default()).expect("engine");
    let mut previous = i64::MIN;
    for _ in 0..5 {
        let dataset = engine.build_dataset().expect("dataset");
        assert!(dataset.id >= previous);
        previous = dataset.id;
    }
}

#[test]
fn constant_generator_exhausts_without_hanging() {
    let sampler = UniqueSampler::new(10);
    let result = sampler.sample(5, || 1_u8);
    assert!(matches!(
        result,
        Err(GenerationError::ExhaustedDomain { requested: 5, .. })
    ));
}

#[test]
fn network_scope_is_the_default_vin_scope() {
    assert_eq!(GenerateOptions::default().vin_scope, VinScope::Network);
}
