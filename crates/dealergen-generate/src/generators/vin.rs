use dealergen_core::{CHECK_DIGIT_INDEX, VIN_ALPHABET, VIN_LEN, vin_check_digit};
use rand::{Rng, RngCore};

use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorRegistry};

/// Model-year codes allowed at position 10 (no `U`, `Z` or `0`).
const MODEL_YEAR_CODES: &[u8] = b"123456789ABCDEFGHJKLMNPRSTVWXY";
const MODEL_YEAR_INDEX: usize = 9;

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(VinGenerator));
}

/// Random 17-character VIN with a correct check digit.
pub fn generate_vin(rng: &mut dyn RngCore) -> String {
    let mut bytes = [b'0'; VIN_LEN];
    for (index, byte) in bytes.iter_mut().enumerate() {
        let alphabet = if index == MODEL_YEAR_INDEX {
            MODEL_YEAR_CODES
        } else {
            VIN_ALPHABET
        };
        *byte = alphabet[rng.random_range(0..alphabet.len())];
    }
    if let Some(check) = vin_check_digit(&bytes) {
        bytes[CHECK_DIGIT_INDEX] = check;
    }
    bytes.iter().map(|byte| *byte as char).collect()
}

struct VinGenerator;

impl Generator for VinGenerator {
    fn id(&self) -> &'static str {
        "vin"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<String, GenerationError> {
        Ok(generate_vin(rng))
    }
}

#[cfg(test)]
mod tests {
    use dealergen_core::is_valid_vin;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn generated_vins_carry_valid_check_digits() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let vin = generate_vin(&mut rng);
            assert_eq!(vin.len(), VIN_LEN);
            assert!(is_valid_vin(&vin), "invalid vin {vin}");
            assert!(!vin.contains(['I', 'O', 'Q']));
        }
    }
}
