// Operator, delimiter and accent tables
//
// Attribute-driven lookups used by the structural handlers. Every lookup has
// a fixed fallback so an unexpected character never aborts a conversion.

use phf::{phf_map, phf_set};

/// Default n-ary operator character (integral)
pub const DEFAULT_NARY_CHAR: &str = "∫";
/// Default accent character (hat)
pub const DEFAULT_ACCENT_CHAR: &str = "^";
/// Default group character (bottom curly bracket)
pub const DEFAULT_GROUP_CHAR: &str = "⏟";
/// Default delimiter characters
pub const DEFAULT_BEGIN_CHAR: &str = "(";
pub const DEFAULT_END_CHAR: &str = ")";
/// Default delimiter separator
pub const DEFAULT_SEPARATOR_CHAR: &str = "|";

static NARY_OPERATORS: phf::Map<&'static str, &'static str> = phf_map! {
    "∑" => "\\sum",
    "∏" => "\\prod",
    "∫" => "\\int",
    "∬" => "\\iint",
    "∭" => "\\iiint",
    "∮" => "\\oint",
    "⋃" => "\\bigcup",
    "⋂" => "\\bigcap",
    "⋁" => "\\bigvee",
    "⋀" => "\\bigwedge",
    "⨁" => "\\bigoplus",
    "⨂" => "\\bigotimes",
};

/// Paired `\left`/`\right` forms for each delimiter character
static DELIMITERS: phf::Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "(" => ("\\left(", "\\right)"),
    ")" => ("\\left)", "\\right)"),
    "[" => ("\\left[", "\\right]"),
    "]" => ("\\left]", "\\right]"),
    "{" => ("\\left\\{", "\\right\\}"),
    "}" => ("\\left\\}", "\\right\\}"),
    "|" => ("\\left|", "\\right|"),
    "‖" => ("\\left\\|", "\\right\\|"),
    "⟨" => ("\\left\\langle", "\\right\\rangle"),
    "⟩" => ("\\left\\rangle", "\\right\\rangle"),
    "⌈" => ("\\left\\lceil", "\\right\\rceil"),
    "⌉" => ("\\left\\rceil", "\\right\\rceil"),
    "⌊" => ("\\left\\lfloor", "\\right\\rfloor"),
    "⌋" => ("\\left\\rfloor", "\\right\\rfloor"),
};

/// Accent characters, spacing and combining forms alike
static ACCENTS: phf::Map<&'static str, &'static str> = phf_map! {
    "^" => "\\hat",
    "\u{0302}" => "\\hat",
    "¯" => "\\bar",
    "\u{0304}" => "\\bar",
    "→" => "\\vec",
    "\u{20D7}" => "\\vec",
    "˙" => "\\dot",
    "\u{0307}" => "\\dot",
    "¨" => "\\ddot",
    "\u{0308}" => "\\ddot",
    "˜" => "\\tilde",
    "\u{0303}" => "\\tilde",
    "˘" => "\\breve",
    "\u{0306}" => "\\breve",
    "ˇ" => "\\check",
    "\u{030C}" => "\\check",
};

/// Function names LaTeX provides as operator commands
static STANDARD_FUNCTIONS: phf::Set<&'static str> = phf_set! {
    "sin", "cos", "tan", "cot", "sec", "csc",
    "sinh", "cosh", "tanh", "coth",
    "arcsin", "arccos", "arctan",
    "log", "ln", "exp", "lim", "max", "min",
    "sup", "inf", "det", "dim", "ker", "deg",
    "gcd", "lcm", "arg", "mod",
};

/// LaTeX command for an n-ary operator character.
///
/// Unrecognized characters fall back to `\int`, the OMML default operator.
#[inline]
pub fn nary_to_latex(chr: &str) -> &'static str {
    NARY_OPERATORS.get(chr).copied().unwrap_or("\\int")
}

/// `\left` command for an opening delimiter character.
///
/// An empty character produces the invisible `\left.`; characters outside
/// the table are emitted verbatim after `\left`.
pub fn left_delimiter(chr: &str) -> String {
    if chr.is_empty() {
        return "\\left.".to_string();
    }
    match DELIMITERS.get(chr) {
        Some((left, _)) => (*left).to_string(),
        None => format!("\\left{chr}"),
    }
}

/// `\right` command for a closing delimiter character.
///
/// Mirrors [`left_delimiter`]: empty gives `\right.`.
pub fn right_delimiter(chr: &str) -> String {
    if chr.is_empty() {
        return "\\right.".to_string();
    }
    match DELIMITERS.get(chr) {
        Some((_, right)) => (*right).to_string(),
        None => format!("\\right{chr}"),
    }
}

/// Accent command for an accent character; unknown characters give `\hat`
#[inline]
pub fn accent_to_latex(chr: &str) -> &'static str {
    ACCENTS.get(chr).copied().unwrap_or("\\hat")
}

/// Brace command for a group character, if it is a horizontal brace
pub fn group_char_to_latex(chr: &str) -> Option<&'static str> {
    match chr {
        "⏟" | "︸" => Some("\\underbrace"),
        "⏞" | "︷" => Some("\\overbrace"),
        _ => None,
    }
}

/// Whether `name` (already lowercased) is a standard LaTeX function
#[inline]
pub fn is_standard_function(name: &str) -> bool {
    STANDARD_FUNCTIONS.contains(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nary_fallback() {
        assert_eq!(nary_to_latex("∑"), "\\sum");
        assert_eq!(nary_to_latex("⨂"), "\\bigotimes");
        assert_eq!(nary_to_latex("?"), "\\int");
        assert_eq!(nary_to_latex(""), "\\int");
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(left_delimiter("("), "\\left(");
        assert_eq!(right_delimiter(")"), "\\right)");
        assert_eq!(left_delimiter("{"), "\\left\\{");
        assert_eq!(right_delimiter("⟩"), "\\right\\rangle");
        assert_eq!(left_delimiter(""), "\\left.");
        assert_eq!(right_delimiter(""), "\\right.");
        assert_eq!(left_delimiter("/"), "\\left/");
    }

    #[test]
    fn test_accents() {
        assert_eq!(accent_to_latex("^"), "\\hat");
        assert_eq!(accent_to_latex("\u{20D7}"), "\\vec");
        assert_eq!(accent_to_latex("\u{0308}"), "\\ddot");
        assert_eq!(accent_to_latex("x"), "\\hat");
    }

    #[test]
    fn test_group_chars() {
        assert_eq!(group_char_to_latex("⏟"), Some("\\underbrace"));
        assert_eq!(group_char_to_latex("︷"), Some("\\overbrace"));
        assert_eq!(group_char_to_latex("←"), None);
    }

    #[test]
    fn test_standard_functions() {
        assert!(is_standard_function("sin"));
        assert!(is_standard_function("gcd"));
        assert!(!is_standard_function("Sin"));
        assert!(!is_standard_function("myop"));
    }
}
