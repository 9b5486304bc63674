use crate::charset::GenerationOptions;
use crate::source::{UniformSource, shuffle};
use zeroize::Zeroizing;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 64;
pub const DEFAULT_LENGTH: usize = 16;

/// Clamps a requested length into `MIN_LENGTH..=MAX_LENGTH`.
pub fn clamp_length(requested: i64) -> usize {
    requested.clamp(MIN_LENGTH as i64, MAX_LENGTH as i64) as usize
}

/// Generates a password of `length` characters drawn from the classes in
/// `options`.
///
/// Every enabled class contributes at least one character. When no class is
/// enabled the password is made of lowercase letters only. Lengths outside
/// `MIN_LENGTH..=MAX_LENGTH` are clamped.
pub fn generate<S: UniformSource>(
    length: usize,
    options: &GenerationOptions,
    source: &mut S,
) -> Zeroizing<String> {
    let length = length.clamp(MIN_LENGTH, MAX_LENGTH);
    let options = options.effective();
    let available = options.pool();

    let mut password_bytes = Zeroizing::new(Vec::with_capacity(length));

    for class in options.enabled() {
        password_bytes.push(source.pick(class.alphabet()));
    }

    let remaining = length.saturating_sub(password_bytes.len());
    for _ in 0..remaining {
        password_bytes.push(source.pick(available.as_slice()));
    }

    shuffle(password_bytes.as_mut_slice(), source);

    log::debug!(
        "generated {} chars from a pool of {} ({} required)",
        password_bytes.len(),
        available.len(),
        length - remaining
    );

    Zeroizing::new(password_bytes.iter().map(|&b| char::from(b)).collect())
}

/// Number of distinct characters a password with these options is drawn from.
pub fn pool_size(options: &GenerationOptions) -> usize {
    options
        .effective()
        .enabled()
        .map(|c| c.alphabet().len())
        .sum()
}

/// Upper bound on entropy in bits, treating every position as a uniform draw
/// from the whole pool.
pub fn entropy_bits(length: usize, options: &GenerationOptions) -> f64 {
    length as f64 * (pool_size(options) as f64).log2()
}
