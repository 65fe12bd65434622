use crate::formula::ast::NodeKind;
use crate::formula::latex::MathMode;
use crate::formula::omml::error::OmmlError;
use crate::formula::omml::parser::{MAX_DEPTH, scan};
use crate::formula::source::{DocumentTreeSource, MathRegion};

/// Math regions collected from a WordprocessingML part
///
/// Scans `word/document.xml` (or any part with embedded OMML) and keeps
/// every outermost `m:oMathPara` as display math and every outermost
/// `m:oMath` as inline math. Everything outside those elements is skipped.
///
/// # Example
/// ```
/// use omml_latex::formula::{DocumentTreeSource, MathMode, OmmlDocument};
///
/// let xml = r#"<w:body><w:p><w:r><w:t>Let </w:t></w:r>
///     <m:oMath><m:r><m:t>x</m:t></m:r></m:oMath></w:p></w:body>"#;
/// let doc = OmmlDocument::parse(xml).unwrap();
/// assert_eq!(doc.math_regions().len(), 1);
/// assert_eq!(doc.math_regions()[0].mode, MathMode::Inline);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OmmlDocument {
    regions: Vec<MathRegion>,
}

impl OmmlDocument {
    /// Collect the math regions of a document part
    pub fn parse(xml: &str) -> Result<Self, OmmlError> {
        let mut regions = Vec::new();
        scan(
            xml,
            MAX_DEPTH,
            |name| name == b"oMath" || name == b"oMathPara",
            |root| {
                let mode = if root.kind() == NodeKind::MathParagraph {
                    MathMode::Display
                } else {
                    MathMode::Inline
                };
                regions.push(MathRegion::new(root, mode));
            },
        )?;
        Ok(Self { regions })
    }

    /// Number of math regions found
    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Take ownership of the collected regions
    pub fn into_regions(self) -> Vec<MathRegion> {
        self.regions
    }
}

impl DocumentTreeSource for OmmlDocument {
    fn math_regions(&self) -> &[MathRegion] {
        &self.regions
    }
}
