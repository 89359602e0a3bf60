//! # Sheet Text Processing
//!
//! Turns the raw export of a published spreadsheet into a grid of cells and provides
//! the keyword translation applied to the grid's headers and values.
pub mod keyword;
pub mod tokenizer;
