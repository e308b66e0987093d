mod athlete;
mod result;
mod sport;

pub use athlete::Athlete;
pub use result::CompetitionResult;
pub use sport::Sport;
