pub mod athlete;
pub mod result;
pub mod sport;
