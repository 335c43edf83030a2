//! Dnsprobe Infrastructure Layer
pub mod dns;

pub use dns::HickoryRecordResolver;
