//! Password generation.

pub mod charset;
mod generate;

pub use charset::{CharacterClass, OptionSet};
pub use generate::{Password, entropy_bits, generate, strength};
