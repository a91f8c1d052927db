/// First index at which two result buffers disagree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    pub index: usize,
    pub baseline: f32,
    pub vectorized: f32,
}

/// Exact float comparison: `-0.0` equals `0.0` and NaN never equals anything.
/// Compares up to the shorter length.
pub fn find_mismatch(baseline: &[f32], vectorized: &[f32]) -> Option<Mismatch> {
    baseline
        .iter()
        .zip(vectorized)
        .position(|(b, v)| b != v)
        .map(|index| Mismatch {
            index,
            baseline: baseline[index],
            vectorized: vectorized[index],
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equal() {
        assert_eq!(None, find_mismatch(&[1., 2., 3.], &[1., 2., 3.]));
        assert_eq!(None, find_mismatch(&[], &[]));
        assert_eq!(None, find_mismatch(&[0.], &[-0.]));
    }

    #[test]
    fn test_first_mismatch_wins() {
        let m = find_mismatch(&[1., 2., 3., 4.], &[1., 2.5, 3., 5.]).unwrap();
        assert_eq!(
            Mismatch {
                index: 1,
                baseline: 2.,
                vectorized: 2.5
            },
            m
        );
    }

    #[test]
    fn test_nan_is_mismatch() {
        let m = find_mismatch(&[f32::NAN], &[f32::NAN]).unwrap();
        assert_eq!(0, m.index);
        assert!(m.baseline.is_nan() && m.vectorized.is_nan());
    }
}
