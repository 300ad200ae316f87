//! Per-worker random streams.
//!
//! Every worker owns one `ChaCha8Rng` seeded from the run seed and its worker
//! index. No stream is shared, so no locking is needed and a run is
//! reproducible for a fixed seed, worker count and event order.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Mix a run seed and a worker index into a well-spread 64-bit worker seed.
pub fn worker_seed(run_seed: u64, worker_index: usize) -> u64 {
    let mut state = run_seed
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add((worker_index as u64).wrapping_mul(0x517C_C1B7_2722_0A95))
        .wrapping_add(0x2545_F491_4F6C_DD1D);

    // splitmix-style finaliser
    state ^= state >> 30;
    state = state.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    state ^= state >> 27;
    state = state.wrapping_mul(0x94D0_49BB_1331_11EB);
    state ^= state >> 31;

    state
}

/// The random stream owned by one worker.
pub fn worker_rng(run_seed: u64, worker_index: usize) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(worker_seed(run_seed, worker_index))
}
