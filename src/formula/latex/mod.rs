mod conv;
pub mod operators;
pub mod options;
mod symbols;
pub mod utils;

pub use conv::converter::{LatexConverter, convert};
pub use options::{InlineDelimiter, LatexOptions, MathMode};
pub use symbols::SymbolTable;
