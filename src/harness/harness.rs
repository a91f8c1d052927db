use log::{debug, info, warn};

use crate::harness::{find_mismatch, Outcome, Report, Stopwatch, Timings};
use crate::multipliers::{Baseline, Multiply, MultiplyError, Vectorized};
use crate::vectors::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessState {
    Init,
    PopulateInputs,
    RunBaseline,
    RunVectorized,
    Verify,
    Success,
    MismatchReported,
}

impl HarnessState {
    pub fn is_terminal(self) -> bool {
        matches!(self, HarnessState::Success | HarnessState::MismatchReported)
    }
}

/// One-shot comparison of `Baseline` against a candidate multiplier over
/// `A[i] = i`, `B[i] = i + 1`.
pub struct Harness<M: Multiply = Vectorized> {
    len: usize,
    candidate: M,
    state: HarnessState,
}

impl Harness {
    pub fn new(len: usize) -> Self {
        Self::with_multiplier(len, Vectorized::new())
    }
}

impl<M: Multiply> Harness<M> {
    pub fn with_multiplier(len: usize, candidate: M) -> Self {
        Self {
            len,
            candidate,
            state: HarnessState::Init,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn candidate(&self) -> &M {
        &self.candidate
    }

    pub fn state(&self) -> HarnessState {
        self.state
    }

    fn enter(&mut self, next: HarnessState) {
        debug!("harness: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Runs every step once. The harness owns all four buffers for the
    /// duration of the call; only the timed multiply calls are measured.
    pub fn run(&mut self) -> Result<Report, MultiplyError> {
        self.state = HarnessState::Init;
        let mut a = Vector::zeros(self.len);
        let mut b = Vector::zeros(self.len);
        let mut result_baseline = Vector::zeros(self.len);
        let mut result_vectorized = Vector::zeros(self.len);

        self.enter(HarnessState::PopulateInputs);
        a.fill_ramp(0);
        b.fill_ramp(1);
        debug!("inputs: a = {:?}, b = {:?}", a, b);

        let mut timings = Timings::default();

        self.enter(HarnessState::RunBaseline);
        {
            let _watch = Stopwatch::start(&mut timings.baseline);
            Baseline.multiply(a.as_slice(), b.as_slice(), result_baseline.as_mut_slice())?;
        }

        self.enter(HarnessState::RunVectorized);
        {
            let _watch = Stopwatch::start(&mut timings.vectorized);
            self.candidate.multiply(
                a.as_slice(),
                b.as_slice(),
                result_vectorized.as_mut_slice(),
            )?;
        }
        info!(
            "{} elements: baseline {:?}, {} {:?}",
            self.len(),
            timings.baseline,
            self.candidate.name(),
            timings.vectorized
        );

        Ok(self.verify(
            result_baseline.as_slice(),
            result_vectorized.as_slice(),
            timings,
        ))
    }

    /// Compares two finished result buffers and moves to a terminal state.
    pub fn verify(&mut self, baseline: &[f32], vectorized: &[f32], timings: Timings) -> Report {
        self.enter(HarnessState::Verify);
        let outcome = match find_mismatch(baseline, vectorized) {
            Some(mismatch) => {
                warn!("{} disagrees with baseline: {}", self.candidate.name(), mismatch);
                self.enter(HarnessState::MismatchReported);
                Outcome::Mismatch(mismatch)
            }
            None => {
                self.enter(HarnessState::Success);
                Outcome::Match
            }
        };
        Report { timings, outcome }
    }
}
