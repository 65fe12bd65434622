// Symbol conversion to LaTeX
//
// Character-level substitution for literal math text: Greek letters and
// mathematical alphanumerics, operators/relations/brackets, and the
// characters LaTeX reserves for its own syntax.

use memchr::memchr3;
use phf::phf_map;

/// Greek letters and their variant forms
static GREEK: phf::Map<char, &'static str> = phf_map! {
    // Lowercase Greek
    'α' => "\\alpha",
    'β' => "\\beta",
    'γ' => "\\gamma",
    'δ' => "\\delta",
    'ε' => "\\varepsilon",
    'ζ' => "\\zeta",
    'η' => "\\eta",
    'θ' => "\\theta",
    'ι' => "\\iota",
    'κ' => "\\kappa",
    'λ' => "\\lambda",
    'μ' => "\\mu",
    'ν' => "\\nu",
    'ξ' => "\\xi",
    'π' => "\\pi",
    'ρ' => "\\rho",
    'σ' => "\\sigma",
    'τ' => "\\tau",
    'υ' => "\\upsilon",
    'φ' => "\\varphi",
    'χ' => "\\chi",
    'ψ' => "\\psi",
    'ω' => "\\omega",

    // Uppercase Greek; letters identical to Latin ones render as Latin
    'Α' => "A",
    'Β' => "B",
    'Γ' => "\\Gamma",
    'Δ' => "\\Delta",
    'Ε' => "E",
    'Ζ' => "Z",
    'Η' => "H",
    'Θ' => "\\Theta",
    'Ι' => "I",
    'Κ' => "K",
    'Λ' => "\\Lambda",
    'Μ' => "M",
    'Ν' => "N",
    'Ξ' => "\\Xi",
    'Π' => "\\Pi",
    'Ρ' => "P",
    'Σ' => "\\Sigma",
    'Τ' => "T",
    'Υ' => "\\Upsilon",
    'Φ' => "\\Phi",
    'Χ' => "X",
    'Ψ' => "\\Psi",
    'Ω' => "\\Omega",

    // Variants
    'ϕ' => "\\phi",
    'ϵ' => "\\epsilon",
    'ϑ' => "\\vartheta",
    'ϖ' => "\\varpi",
    'ϱ' => "\\varrho",
    'ς' => "\\varsigma",
};

/// Operators, relations, arrows, brackets, ellipses and letter-like symbols
static SYMBOLS: phf::Map<char, &'static str> = phf_map! {
    // Calculus and large operators
    '∞' => "\\infty",
    '∂' => "\\partial",
    '∇' => "\\nabla",
    '∑' => "\\sum",
    '∏' => "\\prod",
    '∫' => "\\int",
    '∮' => "\\oint",
    '∬' => "\\iint",
    '∭' => "\\iiint",
    '√' => "\\sqrt",
    '∛' => "\\sqrt[3]",
    '∜' => "\\sqrt[4]",

    // Binary operators
    '±' => "\\pm",
    '∓' => "\\mp",
    '×' => "\\times",
    '÷' => "\\div",
    '·' => "\\cdot",
    '∘' => "\\circ",
    '⊗' => "\\otimes",
    '⊕' => "\\oplus",

    // Relations
    '≤' => "\\leq",
    '≥' => "\\geq",
    '≠' => "\\neq",
    '≈' => "\\approx",
    '≡' => "\\equiv",
    '∝' => "\\propto",
    '∼' => "\\sim",
    '≃' => "\\simeq",
    '≅' => "\\cong",
    '≪' => "\\ll",
    '≫' => "\\gg",

    // Sets and logic
    '∈' => "\\in",
    '∉' => "\\notin",
    '⊂' => "\\subset",
    '⊃' => "\\supset",
    '⊆' => "\\subseteq",
    '⊇' => "\\supseteq",
    '∪' => "\\cup",
    '∩' => "\\cap",
    '∅' => "\\emptyset",
    '∀' => "\\forall",
    '∃' => "\\exists",
    '¬' => "\\neg",
    '∧' => "\\land",
    '∨' => "\\lor",

    // Arrows
    '⇒' => "\\Rightarrow",
    '⇔' => "\\Leftrightarrow",
    '→' => "\\to",
    '←' => "\\leftarrow",
    '↔' => "\\leftrightarrow",
    '⇐' => "\\Leftarrow",
    '↑' => "\\uparrow",
    '↓' => "\\downarrow",

    // Primes and units
    '′' => "'",
    '″' => "''",
    '‴' => "'''",
    '°' => "^\\circ",
    '‰' => "\\permil",

    // Number sets
    'ℕ' => "\\mathbb{N}",
    'ℤ' => "\\mathbb{Z}",
    'ℚ' => "\\mathbb{Q}",
    'ℝ' => "\\mathbb{R}",
    'ℂ' => "\\mathbb{C}",

    // Brackets
    '⟨' => "\\langle",
    '⟩' => "\\rangle",
    '⌈' => "\\lceil",
    '⌉' => "\\rceil",
    '⌊' => "\\lfloor",
    '⌋' => "\\rfloor",
    '|' => "\\vert",
    '‖' => "\\Vert",

    // Ellipses
    '…' => "\\ldots",
    '⋯' => "\\cdots",
    '⋮' => "\\vdots",
    '⋱' => "\\ddots",

    // Letter-like symbols
    'ℓ' => "\\ell",
    'ℏ' => "\\hbar",
    '℘' => "\\wp",
    'ℑ' => "\\Im",
    'ℜ' => "\\Re",
};

/// Reserved characters and their escapes.
///
/// Backslash comes first: the other escapes insert backslashes, which must
/// never be escaped a second time.
const RESERVED: [(char, &str); 10] = [
    ('\\', "\\textbackslash{}"),
    ('&', "\\&"),
    ('%', "\\%"),
    ('$', "\\$"),
    ('#', "\\#"),
    ('_', "\\_"),
    ('{', "\\{"),
    ('}', "\\}"),
    ('~', "\\textasciitilde{}"),
    ('^', "\\textasciicircum{}"),
];

/// Static character substitution tables for literal math text
///
/// All lookups are exact single-character matches against immutable data,
/// so the table can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolTable;

impl SymbolTable {
    /// LaTeX for a Greek letter or Greek variant form
    #[inline]
    pub fn lookup_greek(ch: char) -> Option<&'static str> {
        GREEK.get(&ch).copied()
    }

    /// LaTeX for an operator, relation, bracket, ellipsis or letter-like symbol
    #[inline]
    pub fn lookup_symbol(ch: char) -> Option<&'static str> {
        SYMBOLS.get(&ch).copied()
    }

    /// Escape for a LaTeX-reserved character
    #[inline]
    pub fn lookup_reserved(ch: char) -> Option<&'static str> {
        RESERVED
            .iter()
            .find(|(reserved, _)| *reserved == ch)
            .map(|(_, escaped)| *escaped)
    }

    /// Escape every LaTeX-reserved character in `text`.
    ///
    /// Runs as a single pass over the input, so text produced by one escape
    /// is never fed back through another.
    pub fn escape_reserved(text: &str) -> String {
        if !contains_reserved(text) {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len() + 16);
        for ch in text.chars() {
            match Self::lookup_reserved(ch) {
                Some(escaped) => out.push_str(escaped),
                None => out.push(ch),
            }
        }
        out
    }

    /// Convert a literal text run to LaTeX.
    ///
    /// Each character is tried against the Greek table, then the symbol
    /// table, then the reserved list; anything else passes through. Table
    /// substitutions are followed by a space so a command name never runs
    /// into the next letter, and surrounding whitespace is trimmed from the
    /// result.
    pub fn convert_text(text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 8);
        for ch in text.chars() {
            if let Some(cmd) = Self::lookup_greek(ch).or_else(|| Self::lookup_symbol(ch)) {
                out.push_str(cmd);
                out.push(' ');
            } else if let Some(escaped) = Self::lookup_reserved(ch) {
                out.push_str(escaped);
            } else {
                out.push(ch);
            }
        }

        let trimmed = out.trim();
        if trimmed.len() == out.len() {
            out
        } else {
            trimmed.to_string()
        }
    }
}

/// Quick pre-check before escaping; most math text contains no reserved chars
#[inline]
fn contains_reserved(text: &str) -> bool {
    let bytes = text.as_bytes();
    memchr3(b'\\', b'&', b'%', bytes).is_some()
        || memchr3(b'$', b'#', b'_', bytes).is_some()
        || memchr3(b'{', b'}', b'~', bytes).is_some()
        || memchr::memchr(b'^', bytes).is_some()
}
