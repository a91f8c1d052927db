mod fmt;
mod new;
mod vector;

pub use vector::Vector;
