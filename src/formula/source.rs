// Math region sources
//
// A document converter discovers math regions while walking its own
// document model and hands each region's tree to the LaTeX converter.
// `DocumentTreeSource` is the seam between the two.

use crate::formula::ast::MathNode;
use crate::formula::latex::{LatexConverter, MathMode};
use rayon::prelude::*;

/// One math region found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathRegion {
    /// Root of the region's math tree
    pub root: MathNode,
    /// Whether the region is inline or display math
    pub mode: MathMode,
}

impl MathRegion {
    pub fn new(root: MathNode, mode: MathMode) -> Self {
        Self { root, mode }
    }

    /// Convert the region and wrap it in its math delimiters
    pub fn to_latex(&self, converter: &LatexConverter) -> String {
        converter.convert_wrapped(&self.root, self.mode)
    }
}

/// Anything that exposes the math regions of a document, in document order
pub trait DocumentTreeSource {
    fn math_regions(&self) -> &[MathRegion];
}

impl DocumentTreeSource for [MathRegion] {
    fn math_regions(&self) -> &[MathRegion] {
        self
    }
}

impl DocumentTreeSource for Vec<MathRegion> {
    fn math_regions(&self) -> &[MathRegion] {
        self
    }
}

impl LatexConverter {
    /// Convert and wrap every region of a source, in parallel, keeping
    /// document order
    pub fn convert_regions<S>(&self, source: &S) -> Vec<String>
    where
        S: DocumentTreeSource + ?Sized,
    {
        source
            .math_regions()
            .par_iter()
            .map(|region| region.to_latex(self))
            .collect()
    }
}
