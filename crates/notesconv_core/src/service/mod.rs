//! Pipeline services: model assembly and the parser facade.

pub mod builder;
pub mod parser;
