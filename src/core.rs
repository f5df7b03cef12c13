#[cfg(test)]
pub mod fixtures;
pub mod parser;
pub mod period;
pub mod snapshot;
pub mod tariff;
