//! Phoneme Names
//!
//! Pronounceable display names for parties and legislators, built from
//! alternating vowels and consonants.

use rand::Rng;

const VOWELS: &[u8] = b"aeiou";
const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";

/// Shortest generated name.
pub const MIN_NAME_LENGTH: usize = 3;

/// Default exclusive upper bound on generated name length.
pub const DEFAULT_NAME_MAX_LENGTH: usize = 20;

/// Generate a name with a length in `[3, max_length)`.
///
/// Even positions are vowels and odd positions consonants; the first letter
/// is capitalized. `max_length` values of 3 or less produce 3-letter names.
pub fn generate_name<R: Rng + ?Sized>(
    rng: &mut R,
    max_length: usize,
    prefix: &str,
    suffix: &str,
) -> String {
    let length = if max_length > MIN_NAME_LENGTH {
        rng.gen_range(MIN_NAME_LENGTH..max_length)
    } else {
        MIN_NAME_LENGTH
    };

    let mut name = String::with_capacity(prefix.len() + length + suffix.len());
    name.push_str(prefix);

    for index in 0..length {
        let pool = if index % 2 == 0 { VOWELS } else { CONSONANTS };
        let letter = pool[rng.gen_range(0..pool.len())] as char;
        if index == 0 {
            name.push(letter.to_ascii_uppercase());
        } else {
            name.push(letter);
        }
    }

    name.push_str(suffix);
    name
}

/// "<Name> Party"
pub fn party_name<R: Rng + ?Sized>(rng: &mut R, max_length: usize) -> String {
    generate_name(rng, max_length, "", " Party")
}

/// "Legislator <Given> <Family>"
pub fn legislator_name<R: Rng + ?Sized>(rng: &mut R, max_length: usize) -> String {
    let given = generate_name(rng, max_length, "Legislator ", "");
    let family = generate_name(rng, max_length, " ", "");
    given + &family
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn is_vowel(c: char) -> bool {
        VOWELS.contains(&(c.to_ascii_lowercase() as u8))
    }

    #[test]
    fn test_name_shape() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..500 {
            let name = generate_name(&mut rng, DEFAULT_NAME_MAX_LENGTH, "", "");
            assert!(name.len() >= MIN_NAME_LENGTH && name.len() < DEFAULT_NAME_MAX_LENGTH);

            for (index, c) in name.chars().enumerate() {
                assert_eq!(is_vowel(c), index % 2 == 0, "bad letter in {}", name);
                assert_eq!(c.is_ascii_uppercase(), index == 0);
            }
        }
    }

    #[test]
    fn test_prefix_and_suffix() {
        let mut rng = SmallRng::seed_from_u64(1);
        let party = party_name(&mut rng, DEFAULT_NAME_MAX_LENGTH);
        assert!(party.ends_with(" Party"));

        let legislator = legislator_name(&mut rng, DEFAULT_NAME_MAX_LENGTH);
        assert!(legislator.starts_with("Legislator "));
        assert_eq!(legislator.split(' ').count(), 3);
    }

    #[test]
    fn test_tiny_max_length() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(generate_name(&mut rng, 2, "", "").len(), MIN_NAME_LENGTH);
    }
}
