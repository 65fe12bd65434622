// OMML (Office Math Markup Language) source
//
// Streams OMML XML into `MathNode` trees. `OmmlParser` handles a single math
// fragment; `OmmlDocument` scans a whole WordprocessingML part and collects
// every math region with its inline/display mode.
//
// Reference: ECMA-376 Part 1, §22.1 (Math)

mod document;
mod error;
mod lookup;
mod parser;
mod utils;

pub use document::OmmlDocument;
pub use error::OmmlError;
pub use parser::{MAX_DEPTH, OmmlParser};
