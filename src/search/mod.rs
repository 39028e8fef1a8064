pub mod chain;
pub mod engine;
pub mod eval;
