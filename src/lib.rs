//! omml-latex - Convert Office math markup to LaTeX
//!
//! This library converts the structured math found in Office documents
//! (OMML, the `m:` elements inside `word/document.xml`) into LaTeX math
//! fragments.
//!
//! # Features
//!
//! - **Math tree model**: a small, owned `MathNode` tree with a closed set of
//!   node kinds and an explicit catch-all for anything unrecognized
//! - **Best-effort conversion**: missing children, odd attributes and unknown
//!   elements degrade the output, never abort it
//! - **Symbol handling**: Greek letters, operators and LaTeX-reserved
//!   characters are substituted character by character
//! - **OMML source** (`omml` feature, on by default): streaming XML parsing of
//!   single formulas or whole document parts
//!
//! # Example - Converting a formula
//!
//! ```
//! use omml_latex::formula::omml_to_latex;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let omml = r#"<m:oMath>
//!     <m:rad>
//!         <m:radPr><m:degHide m:val="1"/></m:radPr>
//!         <m:deg/>
//!         <m:e><m:r><m:t>x</m:t></m:r></m:e>
//!     </m:rad>
//! </m:oMath>"#;
//! assert_eq!(omml_to_latex(omml)?, "\\sqrt{x}");
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Building a tree by hand
//!
//! ```
//! use omml_latex::formula::LatexConverter;
//! use omml_latex::formula::ast::builder::{fraction, run, superscript};
//!
//! let tree = superscript(fraction(run("a"), run("b")), run("2"));
//! assert_eq!(LatexConverter::new().convert_node(&tree), "\\frac{a}{b}^{2}");
//! ```

/// Math formula parsing and conversion
///
/// Contains the math tree model, the LaTeX converter and the OMML source.
pub mod formula;

// Re-export commonly used types for convenience
pub use formula::{LatexConverter, MathNode, NodeKind};
#[cfg(feature = "omml")]
pub use formula::{OmmlParser, omml_to_latex};
