pub mod errors;
pub mod shifts;
