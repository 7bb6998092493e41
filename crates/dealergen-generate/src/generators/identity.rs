use rand::{Rng, RngCore};

use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorRegistry};

const HASH_BYTES: usize = 20;

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(DealerIdGenerator));
    registry.register_generator(Box::new(HashGenerator));
    registry.register_generator(Box::new(UuidGenerator));
}

/// Formatting option for SSN-shaped dealer identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DealerIdFormat {
    /// Render as `AAA-GG-SSSS` instead of nine bare digits.
    pub dashes: bool,
}

impl DealerIdFormat {
    pub const PLAIN: Self = Self { dashes: false };
}

/// SSN-shaped identifier: area 001-899 (never 666), group 01-99, serial 0001-9999.
pub fn generate_dealer_id(rng: &mut dyn RngCore, format: &DealerIdFormat) -> String {
    let mut area: u16 = rng.random_range(1..=898);
    if area >= 666 {
        area += 1;
    }
    let group: u8 = rng.random_range(1..=99);
    let serial: u16 = rng.random_range(1..=9999);
    if format.dashes {
        format!("{area:03}-{group:02}-{serial:04}")
    } else {
        format!("{area:03}{group:02}{serial:04}")
    }
}

/// 40 lowercase hex characters.
pub fn generate_hash(rng: &mut dyn RngCore) -> String {
    let mut bytes = [0_u8; HASH_BYTES];
    rng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Random (version 4) UUID in hyphenated form.
pub fn generate_uuid(rng: &mut dyn RngCore) -> String {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .to_string()
}

struct DealerIdGenerator;

impl Generator for DealerIdGenerator {
    fn id(&self) -> &'static str {
        "dealer_id"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<String, GenerationError> {
        Ok(generate_dealer_id(rng, &DealerIdFormat::PLAIN))
    }
}

struct HashGenerator;

impl Generator for HashGenerator {
    fn id(&self) -> &'static str {
        "hash"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<String, GenerationError> {
        Ok(generate_hash(rng))
    }
}

struct UuidGenerator;

impl Generator for UuidGenerator {
    fn id(&self) -> &'static str {
        "uuid"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<String, GenerationError> {
        Ok(generate_uuid(rng))
    }
}
