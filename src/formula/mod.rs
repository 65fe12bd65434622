// Formula Module - Math Tree to LaTeX Conversion
//
// This module converts structured math markup into LaTeX math fragments:
//
// - **ast**: the `MathNode` tree model shared by every source
// - **latex**: the recursive tree-to-LaTeX converter and its symbol tables
// - **omml**: Office Math Markup Language (the XML math format of .docx)
//   as a tree source
//
// # Example
//
// ```ignore
// use omml_latex::formula::{LatexConverter, OmmlParser};
//
// let root = OmmlParser::new().parse("<m:oMath><m:r><m:t>x</m:t></m:r></m:oMath>")?;
// let latex = LatexConverter::new().convert_node(&root);
// ```

/// Math tree model
///
/// A `MathNode` carries a closed `NodeKind`, ordered attributes and ordered
/// children. Trees are built once by a source and only read afterwards.
pub mod ast;
/// LaTeX Converter
///
/// Converts math trees to LaTeX strings. Conversion is a pure function of
/// the tree and never fails; malformed structure degrades the output
/// instead of aborting it.
pub mod latex;
/// OMML (Office Math Markup Language) Parser
///
/// Streams OMML XML into math trees and collects the math regions of a
/// WordprocessingML document part.
#[cfg(feature = "omml")]
mod omml;
/// Math region sources
mod source;

// Re-export public API
pub use ast::{MathNode, NodeKind, attr};
pub use latex::{InlineDelimiter, LatexConverter, LatexOptions, MathMode, SymbolTable};
#[cfg(feature = "omml")]
pub use omml::{MAX_DEPTH, OmmlDocument, OmmlError, OmmlParser};
pub use source::{DocumentTreeSource, MathRegion};

/// Conversion error that wraps all possible formula errors
///
/// Only reading a source can fail; converting a tree cannot.
#[cfg(feature = "omml")]
#[derive(thiserror::Error, Debug)]
pub enum FormulaError {
    #[error("OMML error: {0}")]
    Omml(#[from] OmmlError),
}

/// Convert an OMML fragment to an unwrapped LaTeX math fragment
///
/// # Example
/// ```
/// use omml_latex::formula::omml_to_latex;
///
/// let latex = omml_to_latex(
///     "<m:oMath><m:f><m:num><m:r><m:t>a</m:t></m:r></m:num>\
///      <m:den><m:r><m:t>b</m:t></m:r></m:den></m:f></m:oMath>",
/// )
/// .unwrap();
/// assert_eq!(latex, "\\frac{a}{b}");
/// ```
#[cfg(feature = "omml")]
pub fn omml_to_latex(omml: &str) -> Result<String, FormulaError> {
    let root = OmmlParser::new().parse(omml)?;
    Ok(LatexConverter::new().convert_node(&root))
}

/// Convert every math region of a WordprocessingML part, wrapped in inline
/// or display delimiters, in document order
///
/// # Example
/// ```
/// use omml_latex::formula::{LatexOptions, document_to_latex};
///
/// let xml = "<w:p><m:oMathPara><m:oMath><m:r><m:t>E=m</m:t></m:r></m:oMath></m:oMathPara></w:p>";
/// let regions = document_to_latex(xml, &LatexOptions::default()).unwrap();
/// assert_eq!(regions, vec!["\\[E=m\\]"]);
/// ```
#[cfg(feature = "omml")]
pub fn document_to_latex(xml: &str, options: &LatexOptions) -> Result<Vec<String>, FormulaError> {
    let document = OmmlDocument::parse(xml)?;
    Ok(LatexConverter::with_options(options.clone()).convert_regions(&document))
}
