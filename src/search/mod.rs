pub mod executor;
pub mod results;
pub mod select;
pub mod similarity;
