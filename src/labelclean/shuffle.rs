use crate::model::Corpus;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Where the shuffle draws its randomness from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Randomness {
    /// The thread-local generator, seeded from OS entropy.
    Entropy,
    /// A reproducible generator built from a fixed seed.
    Seeded(u64),
}

impl Randomness {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Randomness::Seeded(seed),
            None => Randomness::Entropy,
        }
    }
}

/// Uniformly permute the corpus in place.
pub fn shuffle_corpus(corpus: &mut Corpus, randomness: Randomness) {
    match randomness {
        Randomness::Entropy => shuffle_with(corpus, &mut rand::thread_rng()),
        Randomness::Seeded(seed) => shuffle_with(corpus, &mut StdRng::seed_from_u64(seed)),
    }
}

pub fn shuffle_with<R: Rng + ?Sized>(corpus: &mut Corpus, rng: &mut R) {
    corpus.lines_mut().shuffle(rng);
}
