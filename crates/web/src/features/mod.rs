pub mod athletes;
pub mod results;
pub mod sports;
