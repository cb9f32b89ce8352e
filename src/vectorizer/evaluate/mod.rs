pub mod query;
pub mod scoring;
pub mod similarity;
