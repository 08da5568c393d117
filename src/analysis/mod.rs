pub mod expander;
pub mod stage;
pub mod stages;
pub mod tokenizer;
