#![forbid(unsafe_code)]

pub mod bundle;
pub mod model;
pub mod random;
pub mod time;

pub use random::{IdentityRandom, RandomSource, SeededRandom, ThreadRandom, shuffle};
pub use time::Clock;
