use std::collections::BTreeMap;

use rand::RngCore;
use rand::seq::IndexedRandom;

use crate::errors::GenerationError;
use crate::palette::Palette;

pub mod identity;
pub mod text;
pub mod vin;

pub use identity::{DealerIdFormat, generate_dealer_id, generate_hash, generate_uuid};
pub use text::{DEFAULT_SLUG_WORDS, SlugGenerator, dealer_name, lorem_word, person_name, slug};
pub use vin::generate_vin;

/// A named source of string values.
pub trait Generator: Send + Sync {
    fn id(&self) -> &'static str;

    fn generate(&self, rng: &mut dyn RngCore) -> Result<String, GenerationError>;
}

/// Lookup table of value generators by id.
pub struct GeneratorRegistry {
    generators: BTreeMap<&'static str, Box<dyn Generator>>,
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorRegistry {
    /// Registry with every built-in generator and the default palette.
    pub fn new() -> Self {
        Self::with_palette(&Palette::default())
    }

    pub fn with_palette(palette: &Palette) -> Self {
        let mut registry = Self {
            generators: BTreeMap::new(),
        };
        identity::register(&mut registry);
        text::register(&mut registry);
        vin::register(&mut registry);
        registry.register_generator(Box::new(ColorGenerator {
            colors: palette.colors.clone(),
        }));
        registry
    }

    /// Add a generator, replacing any previous one with the same id.
    pub fn register_generator(&mut self, generator: Box<dyn Generator>) {
        self.generators.insert(generator.id(), generator);
    }

    pub fn generator(&self, id: &str) -> Option<&dyn Generator> {
        self.generators.get(id).map(|generator| generator.as_ref())
    }

    /// Like [`generator`](Self::generator), failing on unknown ids.
    pub fn require(&self, id: &str) -> Result<&dyn Generator, GenerationError> {
        self.generator(id)
            .ok_or_else(|| GenerationError::UnknownGenerator(id.to_string()))
    }

    /// Registered ids, sorted.
    pub fn generator_ids(&self) -> Vec<&'static str> {
        self.generators.keys().copied().collect()
    }
}

/// Uniform pick from `values`; `None` when empty.
pub fn pick<'a, T>(values: &'a [T], rng: &mut dyn RngCore) -> Option<&'a T> {
    values.choose(rng)
}

struct ColorGenerator {
    colors: Vec<String>,
}

impl Generator for ColorGenerator {
    fn id(&self) -> &'static str {
        "color"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<String, GenerationError> {
        pick(&self.colors, rng)
            .cloned()
            .ok_or_else(|| GenerationError::InvalidConfig("palette has no colors".to_string()))
    }
}
