use crate::formula::ast::{MathNode, NodeKind};
use crate::formula::omml::error::OmmlError;
use crate::formula::omml::lookup::{is_property_container, normalize_property};
use crate::formula::omml::utils::{resolve_reference, unescape_text};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Maximum element nesting accepted from a document
pub const MAX_DEPTH: usize = 1000;

/// One open element while a tree is being built
#[derive(Debug)]
enum Frame {
    /// A math element
    Node(MathNode),
    /// A `*Pr` container; its direct children become attributes of the node below it
    Properties,
    /// A property element, e.g. `<m:begChr m:val="["/>`
    Property {
        name: String,
        value: Option<String>,
        text: String,
    },
    /// Anything nested inside a property element
    Ignored,
}

/// Incremental tree builder fed with start/end/text events
///
/// Uses an explicit stack, so arbitrarily deep input costs heap rather than
/// call stack; the depth limit only guards against hostile documents.
#[derive(Debug)]
pub(super) struct TreeBuilder {
    stack: Vec<Frame>,
    max_depth: usize,
}

impl TreeBuilder {
    pub(super) fn new(max_depth: usize) -> Self {
        Self {
            stack: Vec::with_capacity(64),
            max_depth,
        }
    }

    /// No element is open
    #[inline]
    pub(super) fn is_idle(&self) -> bool {
        self.stack.is_empty()
    }

    pub(super) fn start(&mut self, elem: &BytesStart) -> Result<(), OmmlError> {
        if self.stack.len() >= self.max_depth {
            return Err(OmmlError::DepthLimitExceeded(self.max_depth));
        }

        let local = elem.local_name();
        let name = std::str::from_utf8(local.as_ref())?;

        let frame = match self.stack.last() {
            Some(Frame::Properties) => Frame::Property {
                name: name.to_string(),
                value: val_attribute(elem),
                text: String::new(),
            },
            Some(Frame::Property { .. } | Frame::Ignored) => Frame::Ignored,
            Some(Frame::Node(_)) | None => {
                if is_property_container(name) {
                    Frame::Properties
                } else {
                    let kind = NodeKind::from_omml_name(name);
                    if kind == NodeKind::Unknown {
                        log::debug!("unrecognized OMML element <{name}>, treating as a group");
                    }
                    Frame::Node(MathNode::new(kind))
                }
            },
        };

        self.stack.push(frame);
        Ok(())
    }

    /// Close the innermost element; returns the tree once its root closes
    pub(super) fn end(&mut self) -> Option<MathNode> {
        match self.stack.pop()? {
            Frame::Node(node) => match self.stack.last_mut() {
                Some(Frame::Node(parent)) => {
                    parent.push_child(node);
                    None
                },
                Some(_) => None,
                None => Some(node),
            },
            Frame::Property { name, value, text } => {
                let value = value.or_else(|| {
                    let text = text.trim();
                    (!text.is_empty()).then(|| text.to_string())
                });
                // Stack is now [.., owner, Properties]
                let owner = self.stack.len().checked_sub(2).map(|i| &mut self.stack[i]);
                if let (Some(Frame::Node(owner)), Some(value)) =
                    (owner, normalize_property(&name, value.as_deref()))
                {
                    owner.set_attr(name, value);
                }
                None
            },
            Frame::Properties | Frame::Ignored => None,
        }
    }

    /// Character data; only text nodes and property elements keep it
    pub(super) fn text(&mut self, text: &str) {
        match self.stack.last_mut() {
            Some(Frame::Node(node)) if node.kind() == NodeKind::Text => node.push_text(text),
            Some(Frame::Property { text: buf, .. }) => buf.push_str(text),
            _ => {},
        }
    }

    /// An entity or character reference between text chunks
    pub(super) fn reference(&mut self, name: &str) {
        match resolve_reference(name) {
            Some(ch) => self.text(ch.encode_utf8(&mut [0; 4])),
            None => self.text(&format!("&{name};")),
        }
    }
}

/// Value of the `val` attribute, whatever its prefix
fn val_attribute(elem: &BytesStart) -> Option<String> {
    elem.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == b"val")
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}

/// Stream `xml` through a [`TreeBuilder`].
///
/// While no tree is open, elements are skipped unless `is_root` accepts
/// their local name; every completed tree is handed to `on_tree`.
pub(super) fn scan<F, G>(
    xml: &str,
    max_depth: usize,
    is_root: F,
    mut on_tree: G,
) -> Result<(), OmmlError>
where
    F: Fn(&[u8]) -> bool,
    G: FnMut(MathNode),
{
    let mut reader = Reader::from_str(xml);
    let mut builder = TreeBuilder::new(max_depth);
    let mut buf = Vec::with_capacity(1024);

    loop {
        match reader.read_event_into(&mut buf) {
            // Outside a tree, non-root elements are only checked by the reader
            Ok(Event::Start(ref e)) => {
                if !builder.is_idle() || is_root(e.local_name().as_ref()) {
                    builder.start(e)?;
                }
            },
            Ok(Event::Empty(ref e)) => {
                if !builder.is_idle() || is_root(e.local_name().as_ref()) {
                    builder.start(e)?;
                    if let Some(tree) = builder.end() {
                        on_tree(tree);
                    }
                }
            },
            Ok(Event::End(_)) => {
                if !builder.is_idle()
                    && let Some(tree) = builder.end()
                {
                    on_tree(tree);
                }
            },
            Ok(Event::Text(ref e)) => {
                if !builder.is_idle() {
                    let raw = std::str::from_utf8(e)?;
                    builder.text(&unescape_text(raw));
                }
            },
            Ok(Event::CData(ref e)) => {
                if !builder.is_idle() {
                    builder.text(std::str::from_utf8(e)?);
                }
            },
            Ok(Event::GeneralRef(ref e)) => {
                if !builder.is_idle() {
                    builder.reference(std::str::from_utf8(e)?);
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(OmmlError::Xml {
                    position: reader.buffer_position() as u64,
                    message: e.to_string(),
                });
            },
            _ => {}, // Skip other events (comments, processing instructions, etc.)
        }
        buf.clear();
    }

    if !builder.is_idle() {
        return Err(OmmlError::InvalidStructure(
            "unclosed elements at end of input".to_string(),
        ));
    }
    Ok(())
}

/// OMML parser that converts an OMML fragment to a math tree
///
/// Namespace prefixes are ignored, so `m:f` and a bare `f` both parse as a
/// fraction. Property containers (`m:radPr`, `m:dPr`, ...) are folded into
/// attributes of their owner: `<m:rad><m:radPr><m:degHide m:val="1"/>`
/// yields a radical with `degHide = "1"`.
#[derive(Debug, Clone)]
pub struct OmmlParser {
    max_depth: usize,
}

impl Default for OmmlParser {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }
}

impl OmmlParser {
    /// Create a parser with the default depth limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom depth limit
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Parse OMML from a string
    ///
    /// A single top-level element becomes the root. Several top-level
    /// elements are grouped under an [`NodeKind::Unknown`] root, which
    /// converts as their concatenation.
    ///
    /// # Example
    /// ```
    /// use omml_latex::formula::{NodeKind, OmmlParser};
    ///
    /// let root = OmmlParser::new()
    ///     .parse("<m:oMath><m:r><m:t>x</m:t></m:r></m:oMath>")
    ///     .unwrap();
    /// assert_eq!(root.kind(), NodeKind::MathBlock);
    /// ```
    pub fn parse(&self, xml: &str) -> Result<MathNode, OmmlError> {
        if xml.trim().is_empty() {
            return Err(OmmlError::InvalidStructure("Empty XML input".to_string()));
        }

        let mut roots = Vec::new();
        scan(xml, self.max_depth, |_| true, |tree| roots.push(tree))?;

        match roots.len() {
            0 => Err(OmmlError::InvalidStructure(
                "No mathematical content found in OMML".to_string(),
            )),
            1 => Ok(roots.remove(0)),
            _ => Ok(MathNode::new(NodeKind::Unknown).with_children(roots)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::ast::attr;
    use crate::formula::latex::convert;

    const NS: &str = r#"xmlns:m="http://schemas.openxmlformats.org/officeDocument/2006/math""#;

    fn parse(body: &str) -> MathNode {
        let xml = format!("<m:oMath {NS}>{body}</m:oMath>");
        OmmlParser::new().parse(&xml).unwrap()
    }

    #[test]
    fn test_parse_simple_text() {
        let root = parse("<m:r><m:t>x</m:t></m:r>");
        assert_eq!(root.kind(), NodeKind::MathBlock);
        let run = &root.children()[0];
        assert_eq!(run.kind(), NodeKind::Run);
        assert_eq!(run.children()[0].text_content(), "x");
    }

    #[test]
    fn test_parse_fraction() {
        let root = parse(
            r#"<m:f>
                <m:fPr><m:type m:val="lin"/></m:fPr>
                <m:num><m:r><m:t>1</m:t></m:r></m:num>
                <m:den><m:r><m:t>2</m:t></m:r></m:den>
            </m:f>"#,
        );
        let frac = &root.children()[0];
        assert_eq!(frac.kind(), NodeKind::Fraction);
        assert_eq!(frac.attribute(attr::FRACTION_TYPE), Some("lin"));
        // The property container is not a node
        assert_eq!(frac.children().len(), 2);
        assert_eq!(convert(&root), "{1}/{2}");
    }

    #[test]
    fn test_property_text_content() {
        let root = parse(
            r#"<m:f><m:fPr><m:type>noBar</m:type></m:fPr>
                <m:num><m:r><m:t>n</m:t></m:r></m:num>
                <m:den><m:r><m:t>k</m:t></m:r></m:den></m:f>"#,
        );
        assert_eq!(root.children()[0].attribute(attr::FRACTION_TYPE), Some("noBar"));
    }

    #[test]
    fn test_parse_radical_hidden_degree() {
        let root = parse(
            r#"<m:rad>
                <m:radPr><m:degHide m:val="1"/></m:radPr>
                <m:deg/>
                <m:e><m:r><m:t>x</m:t></m:r></m:e>
            </m:rad>"#,
        );
        assert_eq!(root.children()[0].attribute(attr::DEGREE_HIDDEN), Some("1"));
        assert_eq!(convert(&root), "\\sqrt{x}");
    }

    #[test]
    fn test_boolean_property_without_value() {
        let root = parse(
            r#"<m:rad><m:radPr><m:degHide/></m:radPr>
                <m:deg><m:r><m:t>3</m:t></m:r></m:deg>
                <m:e><m:r><m:t>x</m:t></m:r></m:e></m:rad>"#,
        );
        assert_eq!(convert(&root), "\\sqrt{x}");
    }

    #[test]
    fn test_parse_delimiter_properties() {
        let root = parse(
            r#"<m:d>
                <m:dPr><m:begChr m:val="["/><m:endChr m:val=""/></m:dPr>
                <m:e><m:r><m:t>x</m:t></m:r></m:e>
            </m:d>"#,
        );
        let d = &root.children()[0];
        assert_eq!(d.attribute(attr::BEGIN_CHAR), Some("["));
        assert_eq!(d.attribute(attr::END_CHAR), Some(""));
        assert_eq!(convert(&root), "\\left[ x \\right.");
    }

    #[test]
    fn test_run_properties_ignored() {
        let root = parse(
            r#"<m:r><m:rPr><m:sty m:val="p"/></m:rPr>
                <w:rPr xmlns:w="urn:w"><w:rFonts w:ascii="Cambria Math"/></w:rPr>
                <m:t>sin</m:t></m:r>"#,
        );
        let run = &root.children()[0];
        assert_eq!(run.children().len(), 1);
        assert_eq!(convert(&root), "sin");
    }

    #[test]
    fn test_entities_in_text() {
        let root = parse("<m:r><m:t>a&lt;b &amp; 50%</m:t></m:r>");
        assert_eq!(convert(&root), "a<b \\& 50\\%");

        let root = parse("<m:r><m:t>&#x3B1;</m:t></m:r>");
        assert_eq!(convert(&root), "\\alpha");
    }

    #[test]
    fn test_unknown_element_is_transparent() {
        let root = parse("<m:sPost><m:r><m:t>A</m:t></m:r><m:r><m:t>B</m:t></m:r></m:sPost>");
        assert_eq!(root.children()[0].kind(), NodeKind::Unknown);
        assert_eq!(convert(&root), "AB");
    }

    #[test]
    fn test_multiple_roots_grouped() {
        let xml = "<m:r><m:t>a</m:t></m:r><m:r><m:t>b</m:t></m:r>";
        let root = OmmlParser::new().parse(xml).unwrap();
        assert_eq!(root.kind(), NodeKind::Unknown);
        assert_eq!(root.children().len(), 2);
        assert_eq!(convert(&root), "ab");
    }

    #[test]
    fn test_parse_errors() {
        let parser = OmmlParser::new();
        assert!(matches!(parser.parse("   "), Err(OmmlError::InvalidStructure(_))));
        assert!(matches!(
            parser.parse("<m:oMath><m:r></m:oMath>"),
            Err(OmmlError::Xml { .. })
        ));
    }

    #[test]
    fn test_depth_limit() {
        let deep = format!("{}x{}", "<m:e>".repeat(20), "</m:e>".repeat(20));
        let parser = OmmlParser::with_max_depth(10);
        assert!(matches!(parser.parse(&deep), Err(OmmlError::DepthLimitExceeded(10))));
        assert!(OmmlParser::new().parse(&deep).is_ok());
    }

    #[test]
    fn test_full_equation() {
        // Quadratic formula as Word writes it, minus run properties
        let root = parse(
            r#"<m:r><m:t>x=</m:t></m:r>
            <m:f>
                <m:num>
                    <m:r><m:t>-b±</m:t></m:r>
                    <m:rad>
                        <m:radPr><m:degHide m:val="1"/></m:radPr>
                        <m:deg/>
                        <m:e>
                            <m:sSup>
                                <m:e><m:r><m:t>b</m:t></m:r></m:e>
                                <m:sup><m:r><m:t>2</m:t></m:r></m:sup>
                            </m:sSup>
                            <m:r><m:t>-4ac</m:t></m:r>
                        </m:e>
                    </m:rad>
                </m:num>
                <m:den><m:r><m:t>2a</m:t></m:r></m:den>
            </m:f>"#,
        );
        assert_eq!(convert(&root), "x=\\frac{-b\\pm\\sqrt{b^{2}-4ac}}{2a}");
    }
}
