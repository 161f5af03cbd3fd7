use std::num::NonZeroUsize;

/// Rows handed to each worker per block; blocks are the cancellation granularity.
pub const ROWS_PER_BLOCK_PER_THREAD: usize = 4;

pub fn calculate_rows_per_block(threads: NonZeroUsize, height: u32) -> usize {
    let wanted = threads.get().saturating_mul(ROWS_PER_BLOCK_PER_THREAD);

    wanted.min(height as usize).max(1)
}
