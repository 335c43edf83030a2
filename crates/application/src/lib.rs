//! Dnsprobe Application Layer
pub mod ports;
pub mod use_cases;

pub use ports::RecordResolver;
pub use use_cases::{LookupOutcome, LookupUseCase};
