// Convenience constructors for common math structures
//
// These produce the same shapes the OMML parser emits, which keeps
// hand-built trees (tests, programmatic callers) interchangeable with
// parsed ones.

use super::kind::NodeKind;
use super::node::{MathNode, attr};

/// A run holding one text node
pub fn run(text: &str) -> MathNode {
    MathNode::new(NodeKind::Run).with_child(MathNode::text(text))
}

/// Wrap nodes in a slot of the given kind (`e`, `num`, `sub`, ...)
pub fn slot(kind: NodeKind, children: impl IntoIterator<Item = MathNode>) -> MathNode {
    MathNode::new(kind).with_children(children)
}

/// Base/argument element holding a single text run
pub fn element(text: &str) -> MathNode {
    slot(NodeKind::GenericElement, [run(text)])
}

/// Fraction with the given numerator and denominator content
pub fn fraction(numerator: MathNode, denominator: MathNode) -> MathNode {
    MathNode::new(NodeKind::Fraction)
        .with_child(slot(NodeKind::Numerator, [numerator]))
        .with_child(slot(NodeKind::Denominator, [denominator]))
}

/// Square root, or an nth root when `degree` is given
pub fn radical(base: MathNode, degree: Option<MathNode>) -> MathNode {
    let node = MathNode::new(NodeKind::Radical);
    let node = match degree {
        Some(degree) => node.with_child(slot(NodeKind::Degree, [degree])),
        None => node.with_attr(attr::DEGREE_HIDDEN, "1"),
    };
    node.with_child(slot(NodeKind::GenericElement, [base]))
}

/// Superscript `base^{sup}`
pub fn superscript(base: MathNode, sup: MathNode) -> MathNode {
    MathNode::new(NodeKind::Superscript)
        .with_child(slot(NodeKind::GenericElement, [base]))
        .with_child(slot(NodeKind::SupSlot, [sup]))
}

/// Subscript `base_{sub}`
pub fn subscript(base: MathNode, sub: MathNode) -> MathNode {
    MathNode::new(NodeKind::Subscript)
        .with_child(slot(NodeKind::GenericElement, [base]))
        .with_child(slot(NodeKind::SubSlot, [sub]))
}

/// Delimited content with explicit begin/end characters
pub fn delimited(begin: &str, end: &str, content: MathNode) -> MathNode {
    MathNode::new(NodeKind::Delimiter)
        .with_attr(attr::BEGIN_CHAR, begin)
        .with_attr(attr::END_CHAR, end)
        .with_child(slot(NodeKind::GenericElement, [content]))
}

/// Function application `name argument`
pub fn function(name: &str, argument: MathNode) -> MathNode {
    MathNode::new(NodeKind::Function)
        .with_child(slot(NodeKind::FunctionName, [run(name)]))
        .with_child(slot(NodeKind::GenericElement, [argument]))
}

/// Matrix from rows of cell texts
pub fn matrix<R, C>(rows: R) -> MathNode
where
    R: IntoIterator<Item = C>,
    C: IntoIterator<Item = &'static str>,
{
    MathNode::new(NodeKind::Matrix).with_children(rows.into_iter().map(|cells| {
        MathNode::new(NodeKind::MatrixRow).with_children(cells.into_iter().map(element))
    }))
}
