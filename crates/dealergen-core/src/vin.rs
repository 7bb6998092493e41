//! VIN structure checks (ISO 3779 / North American check digit).

/// Length of a vehicle identification number.
pub const VIN_LEN: usize = 17;

/// Characters allowed in a VIN (`I`, `O` and `Q` are excluded).
pub const VIN_ALPHABET: &[u8] = b"0123456789ABCDEFGHJKLMNPRSTUVWXYZ";

/// Position of the check digit (0-based).
pub const CHECK_DIGIT_INDEX: usize = 8;

const WEIGHTS: [u32; VIN_LEN] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

fn transliterate(byte: u8) -> Option<u32> {
    let value = match byte {
        b'0'..=b'9' => (byte - b'0') as u32,
        b'A' | b'J' => 1,
        b'B' | b'K' | b'S' => 2,
        b'C' | b'L' | b'T' => 3,
        b'D' | b'M' | b'U' => 4,
        b'E' | b'N' | b'V' => 5,
        b'F' | b'W' => 6,
        b'G' | b'P' | b'X' => 7,
        b'H' | b'Y' => 8,
        b'R' | b'Z' => 9,
        _ => return None,
    };
    Some(value)
}

/// Compute the check digit for a 17-byte VIN body.
///
/// The byte at the check position is ignored. Returns `None` when the input
/// has the wrong length or contains a character outside [`VIN_ALPHABET`].
pub fn vin_check_digit(vin: &[u8]) -> Option<u8> {
    if vin.len() != VIN_LEN {
        return None;
    }
    let mut sum = 0_u32;
    for (index, byte) in vin.iter().enumerate() {
        if index == CHECK_DIGIT_INDEX {
            continue;
        }
        sum += transliterate(*byte)? * WEIGHTS[index];
    }
    match sum % 11 {
        10 => Some(b'X'),
        digit => Some(b'0' + digit as u8),
    }
}

/// True when `vin` has 17 valid characters and a matching check digit.
pub fn is_valid_vin(vin: &str) -> bool {
    let bytes = vin.as_bytes();
    match vin_check_digit(bytes) {
        Some(check) => bytes[CHECK_DIGIT_INDEX] == check,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_valid_vins() {
        assert!(is_valid_vin("1M8GDM9AXKP042788"));
        assert!(is_valid_vin("11111111111111111"));
    }

    #[test]
    fn rejects_bad_check_digit_and_alphabet() {
        assert!(!is_valid_vin("1M8GDM9A1KP042788"));
        assert!(!is_valid_vin("1M8GDM9AXKP04278"));
        assert!(!is_valid_vin("IM8GDM9AXKP042788"));
        assert!(!is_valid_vin("1m8gdm9axkp042788"));
    }
}
