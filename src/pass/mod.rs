//! Password generation: character classes and sampling.

pub mod charset;
mod generate;

pub use charset::ClassSet;
pub use generate::{EmptyAlphabet, generate};
