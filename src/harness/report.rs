use crate::harness::Mismatch;
use std::time::Duration;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub baseline: Duration,
    pub vectorized: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Match,
    Mismatch(Mismatch),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub timings: Timings,
    pub outcome: Outcome,
}

impl Report {
    pub fn is_match(&self) -> bool {
        self.outcome == Outcome::Match
    }

    /// Process exit status: 0 when every element matched, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.is_match() {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status() {
        let ok = Report {
            timings: Timings::default(),
            outcome: Outcome::Match,
        };
        let bad = Report {
            timings: Timings::default(),
            outcome: Outcome::Mismatch(Mismatch {
                index: 0,
                baseline: 1.,
                vectorized: 2.,
            }),
        };
        assert!(ok.is_match());
        assert_eq!(0, ok.exit_status());
        assert!(!bad.is_match());
        assert_eq!(1, bad.exit_status());
    }
}
