mod fmt;
mod harness;
mod report;
mod timing;
mod verify;

pub use harness::{Harness, HarnessState};
pub use report::{Outcome, Report, Timings};
pub use timing::Stopwatch;
pub use verify::{find_mismatch, Mismatch};
