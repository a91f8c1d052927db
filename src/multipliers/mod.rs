mod baseline;
mod error;
mod lanes;
mod multiply;
mod vectorized;

pub use baseline::Baseline;
pub use error::MultiplyError;
pub use lanes::LaneKind;
pub use multiply::Multiply;
pub use vectorized::Vectorized;

pub(crate) use baseline::mul_scalar;
pub(crate) use multiply::check_lengths;
