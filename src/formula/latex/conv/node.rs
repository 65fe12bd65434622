// Node conversion logic for LaTeX conversion
//
// Dispatch over `NodeKind` and the handlers for every structural kind
// except matrices and equation arrays (see `matrix`). Handlers pick their
// slots by kind, never by position, and substitute the empty string for any
// slot that is missing.

use super::converter::LatexConverter;
use crate::formula::ast::{MathNode, NodeKind, attr};
use crate::formula::latex::operators::{
    DEFAULT_ACCENT_CHAR, DEFAULT_BEGIN_CHAR, DEFAULT_END_CHAR, DEFAULT_GROUP_CHAR,
    DEFAULT_NARY_CHAR, DEFAULT_SEPARATOR_CHAR, accent_to_latex, group_char_to_latex,
    is_standard_function, left_delimiter, nary_to_latex, right_delimiter,
};
use crate::formula::latex::symbols::SymbolTable;
use crate::formula::latex::utils::{concat_fragments, join_fragments};

/// Whether an on/off attribute is switched on
#[inline]
fn flag(node: &MathNode, name: &str) -> bool {
    node.attribute(name) == Some("1")
}

impl LatexConverter {
    /// Convert one node at the given tree depth (the root is depth 1)
    pub(super) fn node_to_latex(&self, node: &MathNode, depth: usize) -> String {
        if depth > self.options.max_depth {
            log::warn!(
                "math tree deeper than {} levels, dropping {:?} subtree",
                self.options.max_depth,
                node.kind()
            );
            return String::new();
        }

        match node.kind() {
            NodeKind::Text => SymbolTable::convert_text(node.text_content()),
            NodeKind::Fraction => self.fraction(node, depth),
            NodeKind::Radical => self.radical(node, depth),
            NodeKind::Superscript => self.superscript(node, depth),
            NodeKind::Subscript => self.subscript(node, depth),
            NodeKind::SubSuperscript => self.sub_superscript(node, depth),
            NodeKind::NaryOperator => self.nary(node, depth),
            NodeKind::Delimiter => self.delimiter(node, depth),
            NodeKind::Function => self.function(node, depth),
            NodeKind::Matrix => self.matrix(node, depth),
            NodeKind::MatrixRow => self.matrix_row(node, depth),
            NodeKind::EquationArray => self.equation_array(node, depth),
            NodeKind::Accent => self.accent(node, depth),
            NodeKind::Bar => self.bar(node, depth),
            NodeKind::BorderBox => self.border_box(node, depth),
            NodeKind::Phantom => self.phantom(node, depth),
            NodeKind::GroupChar => self.group_char(node, depth),
            NodeKind::LimitLow => self.limit_low(node, depth),
            NodeKind::LimitHigh => self.limit_high(node, depth),
            NodeKind::PreSubSup => self.pre_sub_sup(node, depth),
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
            | NodeKind::Box => self.children_to_latex(node, depth),
            NodeKind::Unknown => self.children_to_latex(node, depth),
        }
    }

    /// Concatenate the conversions of all children in document order
    pub(super) fn children_to_latex(&self, node: &MathNode, depth: usize) -> String {
        concat_fragments(
            node.children()
                .iter()
                .map(|child| self.node_to_latex(child, depth + 1)),
        )
    }

    /// Conversion of the first child of `kind`, or empty if there is none
    pub(super) fn slot(&self, node: &MathNode, kind: NodeKind, depth: usize) -> String {
        node.first_child(kind)
            .map(|child| self.node_to_latex(child, depth + 1))
            .unwrap_or_default()
    }

    fn base(&self, node: &MathNode, depth: usize) -> String {
        self.slot(node, NodeKind::GenericElement, depth)
    }

    fn fraction(&self, node: &MathNode, depth: usize) -> String {
        let num = self.slot(node, NodeKind::Numerator, depth);
        let den = self.slot(node, NodeKind::Denominator, depth);

        match node.attribute(attr::FRACTION_TYPE) {
            Some("lin") => format!("{{{num}}}/{{{den}}}"),
            Some("noBar") => format!("\\genfrac{{}}{{}}{{0pt}}{{}}{{{num}}}{{{den}}}"),
            _ => format!("\\frac{{{num}}}{{{den}}}"),
        }
    }

    fn radical(&self, node: &MathNode, depth: usize) -> String {
        let base = self.base(node, depth);
        let degree = if flag(node, attr::DEGREE_HIDDEN) {
            None
        } else {
            node.first_child(NodeKind::Degree)
                .map(|deg| self.node_to_latex(deg, depth + 1))
        };

        match degree {
            Some(degree) if !degree.trim().is_empty() => format!("\\sqrt[{degree}]{{{base}}}"),
            _ => format!("\\sqrt{{{base}}}"),
        }
    }

    fn superscript(&self, node: &MathNode, depth: usize) -> String {
        let base = self.base(node, depth);
        let sup = self.slot(node, NodeKind::SupSlot, depth);
        format!("{base}^{{{sup}}}")
    }

    fn subscript(&self, node: &MathNode, depth: usize) -> String {
        let base = self.base(node, depth);
        let sub = self.slot(node, NodeKind::SubSlot, depth);
        format!("{base}_{{{sub}}}")
    }

    fn sub_superscript(&self, node: &MathNode, depth: usize) -> String {
        let base = self.base(node, depth);
        let sub = self.slot(node, NodeKind::SubSlot, depth);
        let sup = self.slot(node, NodeKind::SupSlot, depth);
        format!("{base}_{{{sub}}}^{{{sup}}}")
    }

    fn nary(&self, node: &MathNode, depth: usize) -> String {
        let chr = node.attribute(attr::CHAR).unwrap_or(DEFAULT_NARY_CHAR);
        let mut out = String::from(nary_to_latex(chr));

        if !flag(node, attr::SUB_HIDE) {
            let sub = self.slot(node, NodeKind::SubSlot, depth);
            if !sub.is_empty() {
                out.push_str("_{");
                out.push_str(&sub);
                out.push('}');
            }
        }
        if !flag(node, attr::SUP_HIDE) {
            let sup = self.slot(node, NodeKind::SupSlot, depth);
            if !sup.is_empty() {
                out.push_str("^{");
                out.push_str(&sup);
                out.push('}');
            }
        }

        out.push(' ');
        out.push_str(&self.base(node, depth));
        out
    }

    fn delimiter(&self, node: &MathNode, depth: usize) -> String {
        let begin = node.attribute(attr::BEGIN_CHAR).unwrap_or(DEFAULT_BEGIN_CHAR);
        let end = node.attribute(attr::END_CHAR).unwrap_or(DEFAULT_END_CHAR);

        let separator = SymbolTable::convert_text(
            node.attribute(attr::SEPARATOR_CHAR)
                .unwrap_or(DEFAULT_SEPARATOR_CHAR),
        );
        let separator = if separator.is_empty() {
            " ".to_string()
        } else {
            format!(" {separator} ")
        };

        let content = join_fragments(
            node.children_of(NodeKind::GenericElement)
                .map(|element| self.node_to_latex(element, depth + 1)),
            &separator,
        );

        format!("{} {} {}", left_delimiter(begin), content, right_delimiter(end))
    }

    fn function(&self, node: &MathNode, depth: usize) -> String {
        let name = self.slot(node, NodeKind::FunctionName, depth);
        let name = name.trim();
        let argument = self.base(node, depth);

        // A limit construct inside the name (`lim_{x\to 0}`) keeps its scripts
        let head_len = name.bytes().take_while(|b| b.is_ascii_alphabetic()).count();
        let (head, tail) = name.split_at(head_len);
        let head = head.to_ascii_lowercase();
        let scripted_tail = tail.is_empty() || tail.starts_with(['_', '^']);

        let mut out = if !head.is_empty() && scripted_tail && is_standard_function(&head) {
            format!("\\{head}{tail}")
        } else {
            format!("\\mathrm{{{name}}}")
        };

        if !argument.is_empty() {
            out.push(' ');
            out.push_str(&argument);
        }
        out
    }

    fn accent(&self, node: &MathNode, depth: usize) -> String {
        let chr = node.attribute(attr::CHAR).unwrap_or(DEFAULT_ACCENT_CHAR);
        format!("{}{{{}}}", accent_to_latex(chr), self.base(node, depth))
    }

    fn bar(&self, node: &MathNode, depth: usize) -> String {
        let base = self.base(node, depth);
        match node.attribute(attr::POSITION) {
            Some("bot") => format!("\\underline{{{base}}}"),
            _ => format!("\\overline{{{base}}}"),
        }
    }

    fn border_box(&self, node: &MathNode, depth: usize) -> String {
        format!("\\boxed{{{}}}", self.base(node, depth))
    }

    fn phantom(&self, node: &MathNode, depth: usize) -> String {
        let base = self.base(node, depth);
        match node.attribute(attr::SHOW) {
            Some("0") => format!("\\phantom{{{base}}}"),
            _ => base,
        }
    }

    fn group_char(&self, node: &MathNode, depth: usize) -> String {
        let chr = node.attribute(attr::CHAR).unwrap_or(DEFAULT_GROUP_CHAR);
        let base = self.base(node, depth);
        match group_char_to_latex(chr) {
            Some(cmd) => format!("{cmd}{{{base}}}"),
            None => base,
        }
    }

    fn limit_low(&self, node: &MathNode, depth: usize) -> String {
        let base = self.base(node, depth);
        let limit = self.slot(node, NodeKind::LimitSlot, depth);
        format!("{base}_{{{limit}}}")
    }

    fn limit_high(&self, node: &MathNode, depth: usize) -> String {
        let base = self.base(node, depth);
        let limit = self.slot(node, NodeKind::LimitSlot, depth);
        format!("{base}^{{{limit}}}")
    }

    fn pre_sub_sup(&self, node: &MathNode, depth: usize) -> String {
        let sub = self.slot(node, NodeKind::SubSlot, depth);
        let sup = self.slot(node, NodeKind::SupSlot, depth);
        let base = self.base(node, depth);
        format!("{{}}_{{{sub}}}^{{{sup}}}{base}")
    }
}
