use crate::catalog::{CatalogItem, Classifier, groups, makes};
use crate::model::{DealerNetwork, GroupSummary, InventoryStats, SummaryCounts, Vehicle};

/// All vehicles of a network, in dealer order then vehicle order.
pub fn flatten_vehicles(network: &DealerNetwork) -> Vec<&Vehicle> {
    network
        .dealers
        .iter()
        .flat_map(|dealer| dealer.vehicles.iter())
        .collect()
}

/// Derive the group/make/VIN summary of a network.
///
/// VINs are reported as-is: duplicates produced upstream stay visible.
pub fn summarize(network: &DealerNetwork) -> GroupSummary {
    let vehicles = flatten_vehicles(network);
    let groups = groups(&vehicles);
    let makes = makes(&vehicles);
    let vins: Vec<String> = vehicles.iter().map(|vehicle| vehicle.vin.clone()).collect();

    let counts = SummaryCounts {
        dealers: network.dealers.len(),
        groups: groups.len(),
        makes: makes.len(),
        vehicles: vins.len(),
    };

    GroupSummary {
        groups,
        makes,
        vins,
        counts,
    }
}

/// Exotic/standard split of a list of items under `classifier`.
pub fn inventory_stats<T: CatalogItem>(items: &[T], classifier: &Classifier) -> InventoryStats {
    let exotics = items
        .iter()
        .filter(|item| classifier.is_exotic(*item))
        .count();
    InventoryStats {
        exotics,
        groups: groups(items).len(),
        makes: makes(items).len(),
        normal: items.len() - exotics,
        total: items.len(),
    }
}

/// [`inventory_stats`] over the flattened vehicles of a network.
pub fn summarize_inventory(network: &DealerNetwork, classifier: &Classifier) -> InventoryStats {
    inventory_stats(&flatten_vehicles(network), classifier)
}
