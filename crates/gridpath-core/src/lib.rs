//! **gridpath-core**: foundation types shared by the gridpath crates.
//!
//! This crate provides the geometry primitives used to address grid cells
//! and the opaque graph vocabulary ([`Node`], [`Edge`], [`Cost`]) that the
//! search engine is written against.

pub mod geom;
pub mod graph;

pub use geom::{Point, Range};
pub use graph::{Cost, Edge, Node};
