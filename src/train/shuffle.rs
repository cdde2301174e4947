use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Supplies the sample visiting order for each epoch.
///
/// The trainer calls `shuffle` once per epoch with its index buffer; on return
/// the buffer must hold a permutation of `0..indices.len()`. The buffer keeps
/// whatever order the previous epoch left in it.
pub trait Shuffler {
    fn shuffle(&mut self, indices: &mut [usize]);
}

impl<F: FnMut(&mut [usize])> Shuffler for F {
    fn shuffle(&mut self, indices: &mut [usize]) {
        self(indices)
    }
}

/// Uniform random permutations from a seeded PRNG; reproducible per seed.
#[derive(Debug, Clone)]
pub struct SeededShuffler {
    rng: StdRng,
}

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        SeededShuffler { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle(&mut self, indices: &mut [usize]) {
        SliceRandom::shuffle(indices, &mut self.rng);
    }
}

/// Visits samples in index order every epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityOrder;

impl Shuffler for IdentityOrder {
    fn shuffle(&mut self, indices: &mut [usize]) {
        for (i, idx) in indices.iter_mut().enumerate() {
            *idx = i;
        }
    }
}

/// Visits samples in the same caller-chosen order every epoch.
#[derive(Debug, Clone)]
pub struct FixedOrder(pub Vec<usize>);

impl Shuffler for FixedOrder {
    /// # Panics
    /// Panics if the stored order has a different length than `indices`.
    fn shuffle(&mut self, indices: &mut [usize]) {
        indices.copy_from_slice(&self.0);
    }
}
