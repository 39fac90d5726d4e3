pub mod answer;
pub mod prediction;
pub mod result;
pub mod severity;
