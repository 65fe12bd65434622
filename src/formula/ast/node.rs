// Math node definitions

use super::kind::NodeKind;
use smallvec::SmallVec;

/// Attribute names read by the converter.
///
/// These are the OMML property names (`m:degHide`, `m:begChr`, ...) as they
/// appear once folded onto the owning node.
pub mod attr {
    /// Radical degree is hidden (`"1"`)
    pub const DEGREE_HIDDEN: &str = "degHide";
    /// Opening delimiter character
    pub const BEGIN_CHAR: &str = "begChr";
    /// Closing delimiter character
    pub const END_CHAR: &str = "endChr";
    /// Delimiter separator character
    pub const SEPARATOR_CHAR: &str = "sepChr";
    /// Operator, accent or group character
    pub const CHAR: &str = "chr";
    /// N-ary lower limit is hidden (`"1"`)
    pub const SUB_HIDE: &str = "subHide";
    /// N-ary upper limit is hidden (`"1"`)
    pub const SUP_HIDE: &str = "supHide";
    /// Fraction type (`bar`, `skw`, `lin`, `noBar`)
    pub const FRACTION_TYPE: &str = "type";
    /// Bar or group character position (`top`, `bot`)
    pub const POSITION: &str = "pos";
    /// Phantom visibility (`"0"` hides the base)
    pub const SHOW: &str = "show";
}

/// Attribute storage; most nodes carry at most a couple of properties
pub type Attributes = SmallVec<[(String, String); 2]>;

/// One structural element of a math tree
///
/// A tree is built once by a source (usually the OMML parser) and then only
/// read. The converter never mutates nodes and keeps no reference to them
/// after a conversion returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathNode {
    kind: NodeKind,
    text: String,
    attributes: Attributes,
    children: Vec<MathNode>,
}

impl MathNode {
    /// Create an empty node of the given kind
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text: String::new(),
            attributes: SmallVec::new(),
            children: Vec::new(),
        }
    }

    /// Create a text node carrying a literal payload
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new(NodeKind::Text)
        }
    }

    /// Add an attribute (builder style)
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Append a child (builder style)
    #[must_use]
    pub fn with_child(mut self, child: MathNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children (builder style)
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = MathNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Node kind
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Literal payload; empty for everything except text nodes
    #[inline]
    pub fn text_content(&self) -> &str {
        &self.text
    }

    /// Value of the first attribute with the given name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes in insertion order
    #[inline]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Children in document order
    #[inline]
    pub fn children(&self) -> &[MathNode] {
        &self.children
    }

    /// First child of the given kind, wherever it sits among its siblings
    pub fn first_child(&self, kind: NodeKind) -> Option<&MathNode> {
        self.children.iter().find(|child| child.kind == kind)
    }

    /// All children of the given kind, in document order
    pub fn children_of(&self, kind: NodeKind) -> impl Iterator<Item = &MathNode> {
        self.children.iter().filter(move |child| child.kind == kind)
    }

    /// Append a child
    pub fn push_child(&mut self, child: MathNode) {
        self.children.push(child);
    }

    /// Append to the literal payload
    pub fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Record an attribute. Later duplicates are kept but never win a lookup.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((name.into(), value.into()));
    }

    /// Depth of the tree rooted at this node (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut pending: Vec<(&MathNode, usize)> = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            max = max.max(level);
            pending.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_child_ignores_position() {
        let frac = MathNode::new(NodeKind::Fraction)
            .with_child(MathNode::new(NodeKind::Denominator).with_child(MathNode::text("b")))
            .with_child(MathNode::new(NodeKind::Numerator).with_child(MathNode::text("a")));

        let num = frac.first_child(NodeKind::Numerator).unwrap();
        assert_eq!(num.children()[0].text_content(), "a");
        assert!(frac.first_child(NodeKind::Degree).is_none());
    }

    #[test]
    fn test_attribute_first_wins() {
        let node = MathNode::new(NodeKind::Delimiter)
            .with_attr(attr::BEGIN_CHAR, "[")
            .with_attr(attr::BEGIN_CHAR, "{");
        assert_eq!(node.attribute(attr::BEGIN_CHAR), Some("["));
        assert_eq!(node.attribute(attr::END_CHAR), None);
        assert_eq!(node.attributes().len(), 2);
    }

    #[test]
    fn test_depth() {
        assert_eq!(MathNode::text("x").depth(), 1);
        let nested = MathNode::new(NodeKind::Run)
            .with_child(MathNode::new(NodeKind::GenericElement).with_child(MathNode::text("x")))
            .with_child(MathNode::text("y"));
        assert_eq!(nested.depth(), 3);
    }
}
