//! Decoding pipeline: document → usable lines → fields → rows

pub mod parser;
pub mod scanner;
pub mod tokenizer;
