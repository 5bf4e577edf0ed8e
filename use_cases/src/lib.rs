pub mod coordinator;
pub mod shifts;
pub mod shifts_api;

#[cfg(test)]
pub(crate) mod fixtures;
