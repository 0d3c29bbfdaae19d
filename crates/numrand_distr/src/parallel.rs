//! Parallel bulk fills.
//!
//! The buffer is split into chunks of [`CHUNK_SIZE`] values. Chunk `k`
//! draws from a copy of the caller's engine advanced by `k` jumps, so
//! streams never overlap and the output depends only on the caller's state,
//! not on the number of worker threads. Afterwards the caller's engine sits
//! one jump past the last chunk's stream.

use numrand_core::{JumpableEngine, RandomSource};
use rayon::prelude::*;

use crate::error::{check_gaussian, check_range, Result};
use crate::gaussian::ziggurat;
use crate::uniform::scale_into_range;

/// Values per chunk.
pub const CHUNK_SIZE: usize = 8192;

/// One independent engine per chunk; advances `rng` past all of them.
fn split_streams<E: JumpableEngine>(rng: &mut RandomSource<E>, len: usize) -> Vec<E> {
    let chunks = len.div_ceil(CHUNK_SIZE);
    let mut cursor = rng.engine().clone();
    let mut streams = Vec::with_capacity(chunks);
    for _ in 0..chunks {
        streams.push(cursor.clone());
        cursor.jump();
    }
    *rng.engine_mut() = cursor;
    tracing::debug!(len, chunks, "split parallel streams");
    streams
}

/// Fills `buffer` with normal samples (Ziggurat) across the rayon pool.
///
/// # Errors
///
/// `InvalidArgument` if `mean` is not finite or `stddev` is negative or not
/// finite. Neither the buffer nor `rng` is touched on error.
///
/// # Examples
///
/// ```rust
/// use numrand_core::RandomSource;
/// use numrand_distr::parallel;
///
/// let mut rng = RandomSource::from_seed(42);
/// let mut buffer = vec![0.0; 100_000];
/// parallel::fill_gaussian_par(&mut rng, 0.0, 1.0, &mut buffer).unwrap();
/// ```
pub fn fill_gaussian_par<E: JumpableEngine>(
    rng: &mut RandomSource<E>,
    mean: f64,
    stddev: f64,
    buffer: &mut [f64],
) -> Result<()> {
    check_gaussian(mean, stddev)?;
    let streams = split_streams(rng, buffer.len());
    buffer
        .par_chunks_mut(CHUNK_SIZE)
        .zip(streams)
        .for_each(|(chunk, engine)| {
            let mut source = RandomSource::new(engine);
            for value in chunk.iter_mut() {
                *value = mean + stddev * ziggurat::sample(&mut source);
            }
        });
    Ok(())
}

/// Fills `buffer` with uniform samples from [`min`, `max`) across the rayon
/// pool.
///
/// # Errors
///
/// `InvalidArgument` if either bound is not finite, `max < min`, or
/// `max - min` overflows.
pub fn fill_uniform_par<E: JumpableEngine>(
    rng: &mut RandomSource<E>,
    min: f64,
    max: f64,
    buffer: &mut [f64],
) -> Result<()> {
    check_range(min, max)?;
    let width = max - min;
    let streams = split_streams(rng, buffer.len());
    buffer
        .par_chunks_mut(CHUNK_SIZE)
        .zip(streams)
        .for_each(|(chunk, engine)| {
            let mut source = RandomSource::new(engine);
            for value in chunk.iter_mut() {
                *value = scale_into_range(source.next_double(), min, max, width);
            }
        });
    Ok(())
}
