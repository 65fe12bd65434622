// Matrix and equation array conversion
//
// Both are row-oriented layouts: rows are joined with `\\`, cells with `&`,
// and the whole is wrapped in an amsmath environment.

use super::converter::LatexConverter;
use crate::formula::ast::{MathNode, NodeKind};
use crate::formula::latex::utils::join_fragments;

const ROW_SEPARATOR: &str = " \\\\ ";
const CELL_SEPARATOR: &str = " & ";

impl LatexConverter {
    /// `\begin{pmatrix}...\end{pmatrix}` over the `matrix-row` children
    pub(super) fn matrix(&self, node: &MathNode, depth: usize) -> String {
        let rows = join_fragments(
            node.children_of(NodeKind::MatrixRow)
                .map(|row| self.node_to_latex(row, depth + 1)),
            ROW_SEPARATOR,
        );
        format!("\\begin{{pmatrix}}{rows}\\end{{pmatrix}}")
    }

    /// Cells of one matrix row joined with `&`
    pub(super) fn matrix_row(&self, node: &MathNode, depth: usize) -> String {
        join_fragments(
            node.children_of(NodeKind::GenericElement)
                .map(|cell| self.node_to_latex(cell, depth + 1)),
            CELL_SEPARATOR,
        )
    }

    /// `\begin{aligned}...\end{aligned}`, one line per element child
    pub(super) fn equation_array(&self, node: &MathNode, depth: usize) -> String {
        let lines = join_fragments(
            node.children_of(NodeKind::GenericElement)
                .map(|line| self.node_to_latex(line, depth + 1)),
            ROW_SEPARATOR,
        );
        format!("\\begin{{aligned}}{lines}\\end{{aligned}}")
    }
}
