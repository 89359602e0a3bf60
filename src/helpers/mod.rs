pub mod reader;
pub mod string;
