pub mod sampling;
pub mod vector;

pub use sampling::RandomSampler;
pub use vector::{ModularVector, Reduction, VectorError};
