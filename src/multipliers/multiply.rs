use crate::multipliers::MultiplyError;

/// Element-wise `out[i] = a[i] * b[i]` over three equally sized buffers.
///
/// Implementations must leave `out` untouched when the lengths disagree and
/// must perform exactly one single-precision multiply per element, so that
/// any two implementations agree bit for bit.
pub trait Multiply {
    fn name(&self) -> &'static str;

    fn multiply(&self, a: &[f32], b: &[f32], out: &mut [f32]) -> Result<(), MultiplyError>;
}

pub(crate) fn check_lengths(a: &[f32], b: &[f32], out: &[f32]) -> Result<(), MultiplyError> {
    if a.len() == out.len() && b.len() == out.len() {
        Ok(())
    } else {
        Err(MultiplyError::LengthMismatch {
            a: a.len(),
            b: b.len(),
            out: out.len(),
        })
    }
}
