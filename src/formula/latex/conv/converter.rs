// LaTeX Converter Implementation
//
// This module contains the LatexConverter struct and its entry points.
// Per-kind handlers live in `node` and `matrix`.

use crate::formula::ast::MathNode;
use crate::formula::latex::options::{LatexOptions, MathMode};
use rayon::prelude::*;

/// Converts math trees to LaTeX math fragments
///
/// The converter holds only its options; a conversion reads the tree and
/// returns a fresh string, so one converter can serve any number of
/// threads at once and converting the same tree twice gives the same
/// output.
///
/// Conversion is best-effort and never fails: missing children and
/// attributes render as empty strings and unknown node kinds are treated as
/// plain groups of their children.
#[derive(Debug, Clone, Default)]
pub struct LatexConverter {
    pub(super) options: LatexOptions,
}

impl LatexConverter {
    /// Create a converter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom options
    pub fn with_options(options: LatexOptions) -> Self {
        Self { options }
    }

    /// Options this converter was built with
    #[inline]
    pub fn options(&self) -> &LatexOptions {
        &self.options
    }

    /// Convert an optional tree; an absent node converts to the empty string.
    ///
    /// # Example
    /// ```
    /// use omml_latex::formula::LatexConverter;
    ///
    /// let converter = LatexConverter::new();
    /// assert_eq!(converter.convert(None), "");
    /// ```
    pub fn convert(&self, node: Option<&MathNode>) -> String {
        node.map(|node| self.convert_node(node)).unwrap_or_default()
    }

    /// Convert a tree to an unwrapped LaTeX math fragment
    ///
    /// # Example
    /// ```
    /// use omml_latex::formula::LatexConverter;
    /// use omml_latex::formula::ast::builder::{fraction, run};
    ///
    /// let latex = LatexConverter::new().convert_node(&fraction(run("a"), run("b")));
    /// assert_eq!(latex, "\\frac{a}{b}");
    /// ```
    pub fn convert_node(&self, node: &MathNode) -> String {
        self.node_to_latex(node, 1)
    }

    /// Convert a tree and wrap it in inline or display math delimiters
    pub fn convert_wrapped(&self, node: &MathNode, mode: MathMode) -> String {
        self.options.wrap(&self.convert_node(node), mode)
    }

    /// Convert independent trees in parallel, preserving input order
    pub fn convert_batch(&self, nodes: &[MathNode]) -> Vec<String> {
        nodes
            .par_iter()
            .map(|node| self.convert_node(node))
            .collect()
    }
}

/// Convert a tree with default options
///
/// # Example
/// ```
/// use omml_latex::formula::latex::convert;
/// use omml_latex::formula::ast::builder::run;
///
/// assert_eq!(convert(&run("50%")), "50\\%");
/// ```
pub fn convert(node: &MathNode) -> String {
    LatexConverter::new().convert_node(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::ast::builder::{element, fraction, run, slot, superscript};
    use crate::formula::ast::{MathNode, NodeKind};

    fn nested(depth: usize) -> MathNode {
        let mut node = run("x");
        for _ in 1..depth {
            node = MathNode::new(NodeKind::GenericElement).with_child(node);
        }
        node
    }

    #[test]
    fn test_convert_none() {
        assert_eq!(LatexConverter::new().convert(None), "");
    }

    #[test]
    fn test_convert_some() {
        let node = run("x");
        assert_eq!(LatexConverter::new().convert(Some(&node)), "x");
    }

    #[test]
    fn test_idempotent() {
        let tree = superscript(fraction(run("a"), run("b")), run("2"));
        let converter = LatexConverter::new();
        let first = converter.convert_node(&tree);
        let second = converter.convert_node(&tree);
        assert_eq!(first, second);
        assert_eq!(first, "\\frac{a}{b}^{2}");
    }

    #[test]
    fn test_convert_wrapped() {
        let converter = LatexConverter::new();
        let node = element("x");
        assert_eq!(converter.convert_wrapped(&node, MathMode::Inline), "$x$");
        assert_eq!(converter.convert_wrapped(&node, MathMode::Display), "\\[x\\]");
    }

    #[test]
    fn test_batch_preserves_order() {
        let nodes: Vec<MathNode> = (0..32).map(|i| run(&i.to_string())).collect();
        let out = LatexConverter::new().convert_batch(&nodes);
        assert_eq!(out.len(), 32);
        for (i, latex) in out.iter().enumerate() {
            assert_eq!(latex, &i.to_string());
        }
    }

    #[test]
    fn test_depth_cap_truncates() {
        let tree = nested(10);
        assert_eq!(tree.depth(), 11);

        let full = LatexConverter::new();
        assert_eq!(full.convert_node(&tree), "x");

        let capped = LatexConverter::with_options(LatexOptions::new().with_max_depth(5));
        assert_eq!(capped.convert_node(&tree), "");
    }

    #[test]
    fn test_depth_cap_keeps_shallow_siblings() {
        let tree = slot(NodeKind::Unknown, [run("a"), nested(8)]);
        let capped = LatexConverter::with_options(LatexOptions::new().with_max_depth(4));
        assert_eq!(capped.convert_node(&tree), "a");
    }

    #[test]
    fn test_converter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LatexConverter>();
        assert_send_sync::<MathNode>();
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        /// Strategy producing small random trees over a handful of kinds
        fn tree_strategy() -> impl Strategy<Value = MathNode> {
            let leaf = "[a-z0-9α∞%_]{0,4}".prop_map(|s| run(&s));
            leaf.prop_recursive(4, 32, 4, |inner| {
                prop_oneof![
                    (inner.clone(), inner.clone()).prop_map(|(a, b)| fraction(a, b)),
                    (inner.clone(), inner.clone()).prop_map(|(a, b)| superscript(a, b)),
                    prop::collection::vec(inner, 0..4)
                        .prop_map(|children| slot(NodeKind::Unknown, children)),
                ]
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn prop_conversion_is_deterministic(tree in tree_strategy()) {
                let converter = LatexConverter::new();
                prop_assert_eq!(converter.convert_node(&tree), converter.convert_node(&tree));
            }

            #[test]
            fn prop_braces_balance(tree in tree_strategy()) {
                let latex = LatexConverter::new().convert_node(&tree);
                // Escaped braces (`\{`, `\}`) are literal characters, not groups
                let mut depth = 0i64;
                let mut escaped = false;
                for ch in latex.chars() {
                    match ch {
                        '\\' => {
                            escaped = !escaped;
                            continue;
                        },
                        '{' if !escaped => depth += 1,
                        '}' if !escaped => depth -= 1,
                        _ => {},
                    }
                    escaped = false;
                    prop_assert!(depth >= 0, "unbalanced output {:?}", latex);
                }
                prop_assert_eq!(depth, 0, "unbalanced output {:?}", latex);
            }

            #[test]
            fn prop_unknown_group_is_transparent(a in "[a-z0-9+]{1,4}", b in "[0-9+=]{1,4}") {
                let group = slot(NodeKind::Unknown, [run(&a), run(&b)]);
                prop_assert_eq!(convert(&group), format!("{a}{b}"));
            }
        }
    }
}
