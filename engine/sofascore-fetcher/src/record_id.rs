use rand::Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";

/// Generate a record identifier: four lowercase letters followed by six digits.
///
/// The RNG is injected so callers can seed it deterministically.
pub fn generate<R: Rng>(rng: &mut R) -> String {
    let mut id = String::with_capacity(10);
    for _ in 0..4 {
        id.push(LETTERS[rng.gen_range(0..LETTERS.len())] as char);
    }
    for _ in 0..6 {
        id.push(DIGITS[rng.gen_range(0..DIGITS.len())] as char);
    }
    id
}
