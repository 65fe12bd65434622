// Conversion logic module
//
// This module contains the core conversion logic for LaTeX conversion,
// split into the converter entry points and the per-kind handlers.

pub mod converter;
mod matrix;
mod node;
