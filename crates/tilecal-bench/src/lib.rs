pub mod beams;
pub mod report;
pub mod runner;
