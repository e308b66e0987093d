pub mod aggregate;
pub mod athlete;
pub mod common;
pub mod result;
pub mod sport;
