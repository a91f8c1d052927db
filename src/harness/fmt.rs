use crate::harness::{Mismatch, Outcome, Report};
use std::fmt;

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Mismatch at index {}: baseline = {:.6}, vectorized = {:.6}",
            self.index, self.baseline, self.vectorized
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Match => write!(f, "Results match for all elements."),
            Outcome::Mismatch(m) => write!(f, "{}", m),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Baseline multiplication time: {} ns",
            self.timings.baseline.as_nanos()
        )?;
        writeln!(
            f,
            "Vectorized multiplication time: {} ns",
            self.timings.vectorized.as_nanos()
        )?;
        write!(f, "{}", self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::Timings;
    use std::time::Duration;

    #[test]
    fn test_mismatch_line() {
        let m = Mismatch {
            index: 17,
            baseline: 306.,
            vectorized: 307.5,
        };
        assert_eq!(
            "Mismatch at index 17: baseline = 306.000000, vectorized = 307.500000",
            m.to_string()
        );
    }

    #[test]
    fn test_report_lines() {
        let report = Report {
            timings: Timings {
                baseline: Duration::from_nanos(1500),
                vectorized: Duration::from_nanos(300),
            },
            outcome: Outcome::Match,
        };
        assert_eq!(
            "Baseline multiplication time: 1500 ns
Vectorized multiplication time: 300 ns
Results match for all elements.",
            report.to_string()
        );
    }
}
