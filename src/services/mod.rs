pub mod compose;
pub mod enrichment;
pub mod generation;
pub mod providers;
