use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{CatalogEntry, Vehicle};

/// Racing categories treated as exotic by the default classifier.
pub const EXOTIC_GROUPS: &[&str] = &["Gr.1", "Gr.2", "Gr.3", "Gr.4", "Gr.B", "Gr.X"];

/// Hypercar makes treated as exotic regardless of group.
pub const EXOTIC_MAKES: &[&str] = &["Bugatti", "Pagani"];

/// Anything carrying a make and a group can be filtered and classified.
pub trait CatalogItem {
    fn make(&self) -> &str;
    fn group(&self) -> &str;
}

impl CatalogItem for CatalogEntry {
    fn make(&self) -> &str {
        &self.make
    }

    fn group(&self) -> &str {
        &self.group
    }
}

impl CatalogItem for Vehicle {
    fn make(&self) -> &str {
        &self.make
    }

    fn group(&self) -> &str {
        &self.group
    }
}

impl<T: CatalogItem + ?Sized> CatalogItem for &T {
    fn make(&self) -> &str {
        (**self).make()
    }

    fn group(&self) -> &str {
        (**self).group()
    }
}

/// Exotic/standard predicate over the group and make of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classifier {
    pub exotic_groups: Vec<String>,
    pub exotic_makes: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            exotic_groups: EXOTIC_GROUPS.iter().map(|s| s.to_string()).collect(),
            exotic_makes: EXOTIC_MAKES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Classifier {
    pub fn is_exotic(&self, item: &impl CatalogItem) -> bool {
        self.exotic_groups.iter().any(|group| group == item.group())
            || self.exotic_makes.iter().any(|make| make == item.make())
    }
}

/// Entries classified as exotic, in catalog order.
pub fn exotics(catalog: &[CatalogEntry], classifier: &Classifier) -> Vec<CatalogEntry> {
    catalog
        .iter()
        .filter(|entry| classifier.is_exotic(*entry))
        .cloned()
        .collect()
}

/// Entries not classified as exotic, in catalog order.
pub fn non_exotics(catalog: &[CatalogEntry], classifier: &Classifier) -> Vec<CatalogEntry> {
    catalog
        .iter()
        .filter(|entry| !classifier.is_exotic(*entry))
        .cloned()
        .collect()
}

/// Distinct makes of `items`, sorted ascending.
pub fn makes<T: CatalogItem>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.make())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct groups of `items`, sorted ascending.
pub fn groups<T: CatalogItem>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.group())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Catalog partition a view is built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    /// Non-exotic entries; historically used for dealer inventories.
    #[default]
    Standard,
    Exotic,
    All,
}

impl ViewKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Exotic => "exotic",
            Self::All => "all",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "standard" => Ok(Self::Standard),
            "exotic" => Ok(Self::Exotic),
            "all" => Ok(Self::All),
            other => Err(Error::Catalog(format!("unknown catalog view '{other}'"))),
        }
    }
}

/// One partition of the catalog with its derived makes and groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub kind: ViewKind,
    pub cars: Vec<CatalogEntry>,
    pub count: usize,
    pub makes: Vec<String>,
    pub groups: Vec<String>,
}

impl CatalogView {
    pub fn new(kind: ViewKind, cars: Vec<CatalogEntry>) -> Self {
        let makes = makes(&cars);
        let groups = groups(&cars);
        Self {
            kind,
            count: cars.len(),
            cars,
            makes,
            groups,
        }
    }

    /// Cars whose group contains `fragment`; every car when it is empty.
    pub fn in_group(&self, fragment: &str) -> Vec<&CatalogEntry> {
        self.cars
            .iter()
            .filter(|car| fragment.is_empty() || car.group.contains(fragment))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

/// The static vehicle catalog and the classifier used to partition it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    classifier: Classifier,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries,
            classifier: Classifier::default(),
        }
    }

    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the requested partition. Recomputed on every call.
    pub fn view(&self, kind: ViewKind) -> CatalogView {
        let cars = match kind {
            ViewKind::Standard => non_exotics(&self.entries, &self.classifier),
            ViewKind::Exotic => exotics(&self.entries, &self.classifier),
            ViewKind::All => self.entries.clone(),
        };
        CatalogView::new(kind, cars)
    }

    /// Reject entries with blank text fields.
    pub fn validate(&self) -> Result<()> {
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.make.trim().is_empty()
                || entry.model.trim().is_empty()
                || entry.group.trim().is_empty()
            {
                return Err(Error::Catalog(format!(
                    "entry {index} has an empty make, model or group"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(year: i32, make: &str, model: &str, group: &str) -> CatalogEntry {
        CatalogEntry {
            year,
            make: make.to_string(),
            model: model.to_string(),
            group: group.to_string(),
        }
    }

    fn sample() -> Vec<CatalogEntry> {
        vec![
            entry(2017, "Mazda", "RX-VISION GT3 Concept", "Gr.3"),
            entry(2015, "Mazda", "Roadster S", "N200"),
            entry(2013, "Bugatti", "Veyron 16.4", "N1000"),
            entry(2018, "Honda", "Civic Type R", "N300"),
            entry(2016, "Audi", "R8 LMS", "Gr.3"),
        ]
    }

    #[test]
    fn partitions_are_complementary_and_ordered() {
        let classifier = Classifier::default();
        let catalog = sample();
        let exotic = exotics(&catalog, &classifier);
        let standard = non_exotics(&catalog, &classifier);

        assert_eq!(exotic.len() + standard.len(), catalog.len());
        assert_eq!(
            exotic.iter().map(|e| e.model.as_str()).collect::<Vec<_>>(),
            vec!["RX-VISION GT3 Concept", "Veyron 16.4", "R8 LMS"]
        );
        assert_eq!(
            standard.iter().map(|e| e.model.as_str()).collect::<Vec<_>>(),
            vec!["Roadster S", "Civic Type R"]
        );
    }

    #[test]
    fn makes_and_groups_are_sorted_and_distinct() {
        let catalog = sample();
        assert_eq!(makes(&catalog), vec!["Audi", "Bugatti", "Honda", "Mazda"]);
        assert_eq!(groups(&catalog), vec!["Gr.3", "N1000", "N200", "N300"]);
    }

    #[test]
    fn empty_catalog_yields_empty_views() {
        let classifier = Classifier::default();
        let empty: Vec<CatalogEntry> = Vec::new();
        assert!(exotics(&empty, &classifier).is_empty());
        assert!(non_exotics(&empty, &classifier).is_empty());
        assert!(makes(&empty).is_empty());
        assert!(groups(&empty).is_empty());

        let view = Catalog::default().view(ViewKind::All);
        assert_eq!(view.count, 0);
        assert!(view.is_empty());
    }

    #[test]
    fn view_filters_by_group_fragment() {
        let view = Catalog::new(sample()).view(ViewKind::Exotic);
        assert_eq!(view.in_group("Gr.3").len(), 2);
        assert_eq!(view.in_group("").len(), view.count);
        assert!(view.in_group("N500").is_empty());
    }

    #[test]
    fn view_kind_parses_known_names() {
        assert_eq!("exotic".parse::<ViewKind>().ok(), Some(ViewKind::Exotic));
        assert!("luxury".parse::<ViewKind>().is_err());
    }

    #[test]
    fn validate_rejects_blank_fields() {
        let catalog = Catalog::new(vec![entry(2020, "Toyota", " ", "N300")]);
        assert!(matches!(catalog.validate(), Err(Error::Catalog(_))));
    }
}
