//! Configuration types for LaTeX conversion.
//!
//! The converter itself only needs a recursion cap; the delimiter settings
//! are used when a converted fragment is embedded back into document text.

/// Configuration options for LaTeX conversion.
///
/// # Examples
///
/// ```rust
/// use omml_latex::formula::{InlineDelimiter, LatexOptions};
///
/// let options = LatexOptions::new()
///     .with_max_depth(256)
///     .with_inline_delimiter(InlineDelimiter::Paren);
/// assert_eq!(options.max_depth, 256);
/// ```
#[derive(Debug, Clone)]
pub struct LatexOptions {
    /// Deepest tree level that is still converted; anything below renders
    /// as the empty string
    pub max_depth: usize,
    /// Delimiters used for inline math
    pub inline_delimiter: InlineDelimiter,
}

/// Default depth cap, matching the OMML parser's nesting limit
pub const DEFAULT_MAX_DEPTH: usize = 1000;

impl Default for LatexOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            inline_delimiter: InlineDelimiter::Dollar,
        }
    }
}

impl LatexOptions {
    /// Create a new `LatexOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum tree depth that is converted.
    #[inline]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the inline math delimiter style.
    #[inline]
    pub fn with_inline_delimiter(mut self, delimiter: InlineDelimiter) -> Self {
        self.inline_delimiter = delimiter;
        self
    }

    /// Wrap a converted fragment in math delimiters for the given mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use omml_latex::formula::{LatexOptions, MathMode};
    ///
    /// let options = LatexOptions::default();
    /// assert_eq!(options.wrap("x^{2}", MathMode::Inline), "$x^{2}$");
    /// assert_eq!(options.wrap("x^{2}", MathMode::Display), "\\[x^{2}\\]");
    /// ```
    pub fn wrap(&self, latex: &str, mode: MathMode) -> String {
        let (open, close) = match mode {
            MathMode::Display => ("\\[", "\\]"),
            MathMode::Inline => match self.inline_delimiter {
                InlineDelimiter::Dollar => ("$", "$"),
                InlineDelimiter::Paren => ("\\(", "\\)"),
            },
        };
        let mut out = String::with_capacity(latex.len() + open.len() + close.len());
        out.push_str(open);
        out.push_str(latex);
        out.push_str(close);
        out
    }
}

/// Whether a math region sits inside a line of text or on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathMode {
    /// Inline math (`m:oMath` inside a paragraph)
    Inline,
    /// Display math (`m:oMathPara`)
    Display,
}

/// Inline math delimiter style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InlineDelimiter {
    /// `$ ... $`
    #[default]
    Dollar,
    /// `\( ... \)`
    Paren,
}
