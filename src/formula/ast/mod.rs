// Math tree model
//
// A math expression is a tree of `MathNode` values. Each node has a
// `NodeKind`, an ordered attribute list and ordered children; text nodes
// additionally carry their literal payload.

pub mod builder;
mod kind;
mod node;

pub use kind::NodeKind;
pub use node::{Attributes, MathNode, attr};
