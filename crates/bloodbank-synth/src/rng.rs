use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Random source used for a generation run.
///
/// With a seed, runs are reproducible. Without one, a fresh seed is drawn
/// from the thread RNG and returned so it can be logged and replayed.
pub fn make_rng(seed: Option<u64>) -> (ChaCha8Rng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    (ChaCha8Rng::seed_from_u64(seed), seed)
}
