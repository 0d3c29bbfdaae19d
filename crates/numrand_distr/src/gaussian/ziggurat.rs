//! Ziggurat Gaussian sampling.
//!
//! The half-normal density `exp(-x²/2)` is covered by 128 horizontal blocks
//! of equal area `A`: a base block of width `A / y[0]` whose right part is the
//! infinite tail beyond `R`, plus 127 rectangles stacked above it. A sample
//! picks a block and a point inside it with one 64-bit draw:
//!
//! | Bits | Use |
//! |------|-----|
//! | 0..3 | discarded |
//! | 3..10 | block index |
//! | 10 | sign |
//! | 11..64 | 53-bit position within the block |
//!
//! Most points fall inside the part of the block that lies wholly under the
//! curve and are accepted with a single integer comparison. Points in the
//! wedge are tested against the density; a rejection restarts the whole
//! loop with a fresh draw and a fresh block.

use std::sync::OnceLock;

use numrand_core::source::DOUBLE_UNIT;
use numrand_core::{RandomEngine, RandomSource};

use crate::error::{check_gaussian, Result};

/// Number of blocks.
pub const BLOCK_COUNT: usize = 128;

/// Right-hand edge of the base block's rectangle.
pub const R: f64 = 3.442619855899;

/// Area of each block.
pub const A: f64 = 9.91256303526217e-3;

const INV_R: f64 = 1.0 / R;

/// Largest 53-bit value.
const MAX_53: u64 = (1u64 << 53) - 1;

/// Denormalised Gaussian density.
#[inline]
fn pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp()
}

#[inline]
fn pdf_inverse(y: f64) -> f64 {
    (-2.0 * y.ln()).sqrt()
}

/// Precomputed block boundaries.
pub(crate) struct Tables {
    /// Right edge of each block; `x[BLOCK_COUNT]` is 0.
    pub(crate) x: [f64; BLOCK_COUNT + 1],
    /// Top edge of each block.
    pub(crate) y: [f64; BLOCK_COUNT],
    /// 53-bit fixed-point fraction of each block lying wholly under the curve.
    pub(crate) x_comp: [u64; BLOCK_COUNT],
    /// Width of the base block's rectangle.
    pub(crate) a_div_y0: f64,
}

impl Tables {
    fn build() -> Self {
        let mut x = [0.0; BLOCK_COUNT + 1];
        let mut y = [0.0; BLOCK_COUNT];

        x[0] = R;
        y[0] = pdf(R);
        x[1] = R;
        y[1] = y[0] + A / x[1];
        for i in 2..BLOCK_COUNT {
            x[i] = pdf_inverse(y[i - 1]);
            y[i] = y[i - 1] + A / x[i];
        }
        x[BLOCK_COUNT] = 0.0;

        let scale = MAX_53 as f64;
        let mut x_comp = [0u64; BLOCK_COUNT];
        x_comp[0] = ((R * y[0]) / A * scale) as u64;
        for i in 1..BLOCK_COUNT - 1 {
            x_comp[i] = (x[i + 1] / x[i] * scale) as u64;
        }
        x_comp[BLOCK_COUNT - 1] = 0;

        let closure_error = (1.0 - y[BLOCK_COUNT - 1]).abs();
        debug_assert!(
            closure_error < 1e-10,
            "ziggurat tables do not close: |1 - y[127]| = {}",
            closure_error
        );
        tracing::debug!(blocks = BLOCK_COUNT, closure_error, "built ziggurat tables");

        Tables {
            x,
            y,
            x_comp,
            a_div_y0: A / y[0],
        }
    }
}

static TABLES: OnceLock<Tables> = OnceLock::new();

#[inline]
pub(crate) fn tables() -> &'static Tables {
    TABLES.get_or_init(Tables::build)
}

/// Samples the tail beyond `R` (Marsaglia).
#[cold]
fn sample_tail<E: RandomEngine>(rng: &mut RandomSource<E>) -> f64 {
    loop {
        let x = -rng.next_double_nonzero().ln() * INV_R;
        let y = -rng.next_double_nonzero().ln();
        if y + y >= x * x {
            return R + x;
        }
    }
}

/// Returns a standard normal sample.
///
/// # Examples
///
/// ```rust
/// use numrand_core::RandomSource;
/// use numrand_distr::gaussian::ziggurat;
///
/// let mut rng = RandomSource::from_seed(42);
/// let z = ziggurat::sample(&mut rng);
/// assert!(z.is_finite());
/// ```
pub fn sample<E: RandomEngine>(rng: &mut RandomSource<E>) -> f64 {
    let t = tables();
    loop {
        let u = rng.next_u64();
        let s = ((u >> 3) & 0x7f) as usize;
        let sign = if u & 0x400 == 0 { 1.0 } else { -1.0 };
        let u2 = u >> 11;

        if s == 0 {
            if u2 < t.x_comp[0] {
                return u2 as f64 * DOUBLE_UNIT * t.a_div_y0 * sign;
            }
            return sample_tail(rng) * sign;
        }

        if u2 < t.x_comp[s] {
            return u2 as f64 * DOUBLE_UNIT * t.x[s] * sign;
        }

        // Wedge: uniform height within the block, then test the density.
        let x = u2 as f64 * DOUBLE_UNIT * t.x[s];
        let y = t.y[s - 1] + (t.y[s] - t.y[s - 1]) * rng.next_double();
        if y < pdf(x) {
            return x * sign;
        }
    }
}

/// Returns a normal sample with the given `mean` and `stddev`.
///
/// # Errors
///
/// `InvalidArgument` if `mean` is not finite or `stddev` is negative or not
/// finite.
pub fn sample_with<E: RandomEngine>(
    rng: &mut RandomSource<E>,
    mean: f64,
    stddev: f64,
) -> Result<f64> {
    check_gaussian(mean, stddev)?;
    Ok(mean + stddev * sample(rng))
}

/// Returns a standard normal sample in single precision.
#[inline]
pub fn sample_f32<E: RandomEngine>(rng: &mut RandomSource<E>) -> f32 {
    sample(rng) as f32
}

/// Fills `buffer` with standard normal samples.
pub fn fill<E: RandomEngine>(rng: &mut RandomSource<E>, buffer: &mut [f64]) {
    for value in buffer.iter_mut() {
        *value = sample(rng);
    }
}

/// Fills `buffer` with normal samples of the given `mean` and `stddev`.
///
/// # Errors
///
/// As [`sample_with`]; the buffer is left untouched on error.
pub fn fill_with<E: RandomEngine>(
    rng: &mut RandomSource<E>,
    mean: f64,
    stddev: f64,
    buffer: &mut [f64],
) -> Result<()> {
    check_gaussian(mean, stddev)?;
    for value in buffer.iter_mut() {
        *value = mean + stddev * sample(rng);
    }
    Ok(())
}
