use crate::charset::CharacterClassSelection;
use log::debug;
use rand::Rng;

/// Generates a password of `length` characters using the thread-local RNG.
///
/// Returns an empty string when no class is selected; refusing that case is
/// up to the caller.
pub fn generate_password(length: usize, selection: CharacterClassSelection) -> String {
    generate_password_with(&mut rand::thread_rng(), length, selection)
}

/// Generates a password drawing every character independently and uniformly
/// from the selection's alphabet, with replacement.
///
/// # Arguments
/// * `rng` - The source of randomness.
/// * `length` - Number of characters to draw.
/// * `selection` - Enabled character classes.
pub fn generate_password_with<R>(
    rng: &mut R,
    length: usize,
    selection: CharacterClassSelection,
) -> String
where
    R: Rng + ?Sized,
{
    let alphabet = selection.alphabet();
    if alphabet.is_empty() {
        debug!("empty alphabet, returning an empty password");
        return String::new();
    }

    debug!(
        "generating {} characters from an alphabet of {}",
        length,
        alphabet.len()
    );

    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}
