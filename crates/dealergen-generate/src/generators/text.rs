use fake::Fake;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::Name;
use rand::RngCore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorRegistry, pick};
use crate::sampler::UniqueSampler;

/// Words in a slug when the caller does not ask for a length.
pub const DEFAULT_SLUG_WORDS: usize = 3;

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(LipsumGenerator));
    registry.register_generator(Box::new(NameGenerator));
    registry.register_generator(Box::new(SlugGenerator::new(DEFAULT_SLUG_WORDS)));
}

// fake drives its own rng type; reseed one from the caller's source.
fn fake_rng(rng: &mut dyn RngCore) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(rng.next_u64())
}

/// A single lorem ipsum word.
pub fn lorem_word(rng: &mut dyn RngCore) -> String {
    Word().fake_with_rng(&mut fake_rng(rng))
}

/// Full person name (first and last).
pub fn person_name(rng: &mut dyn RngCore) -> String {
    Name().fake_with_rng(&mut fake_rng(rng))
}

/// `"<person name> <suffix>"`, or just the person name without suffixes.
pub fn dealer_name(rng: &mut dyn RngCore, suffixes: &[String]) -> String {
    let name = person_name(rng);
    match pick(suffixes, rng) {
        Some(suffix) => format!("{name} {suffix}"),
        None => name,
    }
}

/// `words` distinct lorem words joined with `-`.
pub fn slug(
    rng: &mut dyn RngCore,
    words: usize,
    sampler: &UniqueSampler,
) -> Result<String, GenerationError> {
    let words = sampler.sample(words, || lorem_word(rng))?;
    Ok(words.join("-"))
}

struct LipsumGenerator;

impl Generator for LipsumGenerator {
    fn id(&self) -> &'static str {
        "lipsum"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<String, GenerationError> {
        Ok(lorem_word(rng))
    }
}

struct NameGenerator;

impl Generator for NameGenerator {
    fn id(&self) -> &'static str {
        "name"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<String, GenerationError> {
        Ok(person_name(rng))
    }
}

/// Hyphen-joined slugs of `words` distinct lorem words.
pub struct SlugGenerator {
    words: usize,
    sampler: UniqueSampler,
}

impl SlugGenerator {
    pub fn new(words: usize) -> Self {
        Self {
            words,
            sampler: UniqueSampler::default(),
        }
    }
}

impl Generator for SlugGenerator {
    fn id(&self) -> &'static str {
        "slug"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<String, GenerationError> {
        slug(rng, self.words, &self.sampler)
    }
}
