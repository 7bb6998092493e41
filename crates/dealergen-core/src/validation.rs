use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::model::{Dataset, DealerNetwork};
use crate::summary::summarize;
use crate::vin::is_valid_vin;

const DEALER_ID_LEN: usize = 9;

/// Validate internal consistency of a dealer network.
///
/// This checks:
/// - dealer ids are 9 ASCII digits and pairwise distinct
/// - every VIN is well formed and unique across the network
pub fn validate_network(network: &DealerNetwork) -> Result<()> {
    let mut dealer_ids = BTreeSet::new();
    let mut vins = BTreeSet::new();

    for dealer in &network.dealers {
        let id = &dealer.dealer_id;
        if id.len() != DEALER_ID_LEN || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidDataset(format!("malformed dealer id: {id}")));
        }
        if !dealer_ids.insert(id.as_str()) {
            return Err(Error::InvalidDataset(format!("duplicate dealer id: {id}")));
        }

        for vehicle in &dealer.vehicles {
            if !is_valid_vin(&vehicle.vin) {
                return Err(Error::InvalidDataset(format!(
                    "invalid vin {} at dealer {id}",
                    vehicle.vin
                )));
            }
            if !vins.insert(vehicle.vin.as_str()) {
                return Err(Error::InvalidDataset(format!(
                    "duplicate vin {} at dealer {id}",
                    vehicle.vin
                )));
            }
        }
    }

    Ok(())
}

/// Validate a dataset: its network plus agreement with its summary.
pub fn validate_dataset(dataset: &Dataset) -> Result<()> {
    let network = dataset.network();
    validate_network(&network)?;

    let expected = summarize(&network);
    if dataset.summary != expected {
        return Err(Error::InvalidDataset(format!(
            "summary does not match dealers (expected {} vehicles in {} dealers, found {} in {})",
            expected.counts.vehicles,
            expected.counts.dealers,
            dataset.summary.counts.vehicles,
            dataset.summary.counts.dealers
        )));
    }

    Ok(())
}
