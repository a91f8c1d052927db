use crate::multipliers::{check_lengths, mul_scalar, LaneKind, Multiply, MultiplyError};

const PORTABLE_WIDTH: usize = 8;

/// Lane-parallel multiplier. Each full chunk of `lanes().width()` elements
/// goes through one vector multiply and the tail through the scalar loop.
#[derive(Debug, Clone, Copy)]
pub struct Vectorized {
    lanes: LaneKind,
}

impl Vectorized {
    pub fn new() -> Self {
        Self {
            lanes: LaneKind::detect(),
        }
    }

    /// `None` when the running CPU lacks `lanes`.
    pub fn with_lanes(lanes: LaneKind) -> Option<Self> {
        if lanes.is_supported() {
            Some(Self { lanes })
        } else {
            None
        }
    }

    pub fn lanes(&self) -> LaneKind {
        self.lanes
    }
}

impl Default for Vectorized {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiply for Vectorized {
    fn name(&self) -> &'static str {
        "vectorized"
    }

    fn multiply(&self, a: &[f32], b: &[f32], out: &mut [f32]) -> Result<(), MultiplyError> {
        check_lengths(a, b, out)?;
        match self.lanes {
            // SAFETY: `with_lanes` only hands out Avx after runtime detection
            #[cfg(target_arch = "x86_64")]
            LaneKind::Avx => unsafe { mul_avx(a, b, out) },
            // SAFETY: SSE is part of the x86_64 baseline
            #[cfg(target_arch = "x86_64")]
            LaneKind::Sse => unsafe { mul_sse(a, b, out) },
            // SAFETY: aarch64 always has NEON
            #[cfg(target_arch = "aarch64")]
            LaneKind::Neon => unsafe { mul_neon(a, b, out) },
            _ => mul_portable(a, b, out),
        }
        Ok(())
    }
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx")]
unsafe fn mul_avx(a: &[f32], b: &[f32], out: &mut [f32]) {
    use std::arch::x86_64::*;

    const WIDTH: usize = 8;
    let chunks = out.len() / WIDTH;
    for i in 0..chunks {
        let offset = i * WIDTH;
        let va = _mm256_loadu_ps(a.as_ptr().add(offset));
        let vb = _mm256_loadu_ps(b.as_ptr().add(offset));
        _mm256_storeu_ps(out.as_mut_ptr().add(offset), _mm256_mul_ps(va, vb));
    }

    let start = chunks * WIDTH;
    mul_scalar(&a[start..], &b[start..], &mut out[start..]);
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse")]
unsafe fn mul_sse(a: &[f32], b: &[f32], out: &mut [f32]) {
    use std::arch::x86_64::*;

    const WIDTH: usize = 4;
    let chunks = out.len() / WIDTH;
    for i in 0..chunks {
        let offset = i * WIDTH;
        let va = _mm_loadu_ps(a.as_ptr().add(offset));
        let vb = _mm_loadu_ps(b.as_ptr().add(offset));
        _mm_storeu_ps(out.as_mut_ptr().add(offset), _mm_mul_ps(va, vb));
    }

    let start = chunks * WIDTH;
    mul_scalar(&a[start..], &b[start..], &mut out[start..]);
}

#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
unsafe fn mul_neon(a: &[f32], b: &[f32], out: &mut [f32]) {
    use std::arch::aarch64::*;

    const WIDTH: usize = 4;
    let chunks = out.len() / WIDTH;
    for i in 0..chunks {
        let offset = i * WIDTH;
        let va = vld1q_f32(a.as_ptr().add(offset));
        let vb = vld1q_f32(b.as_ptr().add(offset));
        vst1q_f32(out.as_mut_ptr().add(offset), vmulq_f32(va, vb));
    }

    let start = chunks * WIDTH;
    mul_scalar(&a[start..], &b[start..], &mut out[start..]);
}

fn mul_portable(a: &[f32], b: &[f32], out: &mut [f32]) {
    let start = out.len() - out.len() % PORTABLE_WIDTH;
    let (body, tail) = out.split_at_mut(start);
    for ((o, x), y) in body
        .chunks_exact_mut(PORTABLE_WIDTH)
        .zip(a.chunks_exact(PORTABLE_WIDTH))
        .zip(b.chunks_exact(PORTABLE_WIDTH))
    {
        mul_block(o, x, y);
    }
    mul_scalar(&a[start..], &b[start..], tail);
}

// Fixed trip count, the compiler lowers this to a single vector multiply.
#[inline(always)]
fn mul_block(out: &mut [f32], a: &[f32], b: &[f32]) {
    for ((o, x), y) in out.iter_mut().zip(a).zip(b) {
        *o = x * y;
    }
}
