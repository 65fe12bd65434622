// Node kind definitions

use phf::phf_map;

/// Structural kind of a [`MathNode`](super::MathNode)
///
/// The set is closed: every element the converter knows how to render has its
/// own variant, and anything else is carried as [`NodeKind::Unknown`], which
/// behaves as a transparent group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Display math paragraph (`m:oMathPara`)
    MathParagraph,
    /// Math zone (`m:oMath`)
    MathBlock,
    /// Math run (`m:r`)
    Run,
    /// Literal text (`m:t`)
    Text,
    /// Fraction (`m:f`)
    Fraction,
    /// Fraction numerator slot (`m:num`)
    Numerator,
    /// Fraction denominator slot (`m:den`)
    Denominator,
    /// Radical (`m:rad`)
    Radical,
    /// Radical degree slot (`m:deg`)
    Degree,
    /// Superscript object (`m:sSup`)
    Superscript,
    /// Subscript object (`m:sSub`)
    Subscript,
    /// Combined sub/superscript object (`m:sSubSup`)
    SubSuperscript,
    /// Superscript slot (`m:sup`)
    SupSlot,
    /// Subscript slot (`m:sub`)
    SubSlot,
    /// N-ary operator such as a sum or an integral (`m:nary`)
    NaryOperator,
    /// Delimiter pair (`m:d`)
    Delimiter,
    /// Function application (`m:func`)
    Function,
    /// Function name slot (`m:fName`)
    FunctionName,
    /// Matrix (`m:m`)
    Matrix,
    /// Matrix row (`m:mr`)
    MatrixRow,
    /// Base/argument element (`m:e`)
    GenericElement,
    /// Limit slot (`m:lim`)
    LimitSlot,
    /// Accent (`m:acc`)
    Accent,
    /// Over/under bar (`m:bar`)
    Bar,
    /// Box (`m:box`)
    Box,
    /// Border box (`m:borderBox`)
    BorderBox,
    /// Phantom (`m:phant`)
    Phantom,
    /// Group character such as an underbrace (`m:groupChr`)
    GroupChar,
    /// Lower limit object (`m:limLow`)
    LimitLow,
    /// Upper limit object (`m:limUpp`)
    LimitHigh,
    /// Equation array (`m:eqArr`)
    EquationArray,
    /// Pre-sub-superscript (`m:sPre`)
    PreSubSup,
    /// Anything else
    Unknown,
}

/// OMML local element name to node kind
static OMML_KINDS: phf::Map<&'static str, NodeKind> = phf_map! {
    "oMathPara" => NodeKind::MathParagraph,
    "oMath" => NodeKind::MathBlock,
    "r" => NodeKind::Run,
    "t" => NodeKind::Text,
    "f" => NodeKind::Fraction,
    "num" => NodeKind::Numerator,
    "den" => NodeKind::Denominator,
    "rad" => NodeKind::Radical,
    "deg" => NodeKind::Degree,
    "sSup" => NodeKind::Superscript,
    "sSub" => NodeKind::Subscript,
    "sSubSup" => NodeKind::SubSuperscript,
    "sup" => NodeKind::SupSlot,
    "sub" => NodeKind::SubSlot,
    "nary" => NodeKind::NaryOperator,
    "d" => NodeKind::Delimiter,
    "func" => NodeKind::Function,
    "fName" => NodeKind::FunctionName,
    "m" => NodeKind::Matrix,
    "mr" => NodeKind::MatrixRow,
    "e" => NodeKind::GenericElement,
    "lim" => NodeKind::LimitSlot,
    "acc" => NodeKind::Accent,
    "bar" => NodeKind::Bar,
    "box" => NodeKind::Box,
    "borderBox" => NodeKind::BorderBox,
    "phant" => NodeKind::Phantom,
    "groupChr" => NodeKind::GroupChar,
    "limLow" => NodeKind::LimitLow,
    "limUpp" => NodeKind::LimitHigh,
    "eqArr" => NodeKind::EquationArray,
    "sPre" => NodeKind::PreSubSup,
};

impl NodeKind {
    /// Look up the kind for an OMML local element name (without prefix).
    ///
    /// Unrecognized names map to [`NodeKind::Unknown`].
    #[inline]
    pub fn from_omml_name(name: &str) -> Self {
        OMML_KINDS.get(name).copied().unwrap_or(NodeKind::Unknown)
    }

    /// Whether this kind only groups its children without adding structure.
    #[inline]
    pub fn is_container(self) -> bool {
        matches!(
            self,
            NodeKind::MathParagraph
                | NodeKind::MathBlock
                | NodeKind::Run
                | NodeKind::GenericElement
                | NodeKind::Numerator
                | NodeKind::Denominator
                | NodeKind::Degree
                | NodeKind::SupSlot
                | NodeKind::SubSlot
                | NodeKind::LimitSlot
                | NodeKind::FunctionName
                | NodeKind::Box
                | NodeKind::Unknown
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(NodeKind::from_omml_name("f"), NodeKind::Fraction);
        assert_eq!(NodeKind::from_omml_name("sSubSup"), NodeKind::SubSuperscript);
        assert_eq!(NodeKind::from_omml_name("m"), NodeKind::Matrix);
        assert_eq!(NodeKind::from_omml_name("e"), NodeKind::GenericElement);
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(NodeKind::from_omml_name("sPost"), NodeKind::Unknown);
        assert_eq!(NodeKind::from_omml_name(""), NodeKind::Unknown);
        // Names are matched exactly, prefixes must be stripped first
        assert_eq!(NodeKind::from_omml_name("m:f"), NodeKind::Unknown);
    }

    #[test]
    fn test_containers() {
        assert!(NodeKind::Run.is_container());
        assert!(NodeKind::Unknown.is_container());
        assert!(!NodeKind::Fraction.is_container());
        assert!(!NodeKind::Text.is_container());
    }
}
