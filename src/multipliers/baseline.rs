use crate::multipliers::{check_lengths, Multiply, MultiplyError};

/// Scalar reference multiplier. Its output is the oracle every other
/// multiplier is checked against.
#[derive(Debug, Default, Clone, Copy)]
pub struct Baseline;

impl Multiply for Baseline {
    fn name(&self) -> &'static str {
        "baseline"
    }

    fn multiply(&self, a: &[f32], b: &[f32], out: &mut [f32]) -> Result<(), MultiplyError> {
        check_lengths(a, b, out)?;
        mul_scalar(a, b, out);
        Ok(())
    }
}

/// Callers guarantee equal lengths.
#[inline(always)]
pub(crate) fn mul_scalar(a: &[f32], b: &[f32], out: &mut [f32]) {
    for i in 0..out.len() {
        out[i] = a[i] * b[i];
    }
}
