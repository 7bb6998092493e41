use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One year/make/model/group combination of the static vehicle catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct CatalogEntry {
    pub year: i32,
    pub make: String,
    pub model: String,
    /// Performance category (ex.: `N300`, `Gr.3`).
    pub group: String,
}

/// A vehicle held by a dealer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Vehicle {
    /// 17-character VIN; identifies the vehicle within its network.
    pub vin: String,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub group: String,
    pub color: String,
    /// Present only when the vehicle was drawn from the combined catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exotic: Option<bool>,
}

impl Vehicle {
    /// Build a vehicle from a catalog entry, a VIN and a color.
    pub fn from_entry(entry: &CatalogEntry, vin: String, color: String) -> Self {
        Self {
            vin,
            year: entry.year,
            make: entry.make.clone(),
            model: entry.model.clone(),
            group: entry.group.clone(),
            color,
            exotic: None,
        }
    }

    /// True when the vehicle's make/model/group match `entry`.
    pub fn matches_entry(&self, entry: &CatalogEntry) -> bool {
        self.make == entry.make && self.model == entry.model && self.group == entry.group
    }
}

/// A dealer and its inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dealer {
    /// 9-digit numeric identifier, unique within the network.
    pub dealer_id: String,
    pub name: String,
    pub vehicles: Vec<Vehicle>,
}

/// The full synthetic dataset of dealers produced by one generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DealerNetwork {
    pub dealers: Vec<Dealer>,
}

impl DealerNetwork {
    pub fn new(dealers: Vec<Dealer>) -> Self {
        Self { dealers }
    }

    pub fn vehicle_count(&self) -> usize {
        self.dealers.iter().map(|dealer| dealer.vehicles.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.dealers.is_empty()
    }
}

/// Count statistics attached to a [`GroupSummary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SummaryCounts {
    pub dealers: usize,
    pub groups: usize,
    pub makes: usize,
    pub vehicles: usize,
}

/// Aggregates derived from a dealer network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GroupSummary {
    /// Distinct vehicle groups, sorted ascending.
    pub groups: Vec<String>,
    /// Distinct vehicle makes, sorted ascending.
    pub makes: Vec<String>,
    /// One VIN per vehicle, in dealer then vehicle order.
    pub vins: Vec<String>,
    pub counts: SummaryCounts,
}

/// Payload wrapper for the dealers of a [`Dataset`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DatasetData {
    pub dealers: Vec<Dealer>,
}

/// Final result of a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Dataset {
    /// Creation timestamp in milliseconds since the Unix epoch.
    pub id: i64,
    pub data: DatasetData,
    pub summary: GroupSummary,
}

impl Dataset {
    /// View the dealers of this dataset as a network.
    pub fn network(&self) -> DealerNetwork {
        DealerNetwork::new(self.data.dealers.clone())
    }
}

/// Exotic/standard split over a list of catalog-shaped items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InventoryStats {
    pub exotics: usize,
    pub groups: usize,
    pub makes: usize,
    pub normal: usize,
    pub total: usize,
}
