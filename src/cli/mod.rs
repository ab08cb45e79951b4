#![forbid(unsafe_code)]

//! File formats and external tooling used by the command-line front end.
//!
//! The recognition core never touches these; they only move graphs in and out
//! of text and hand descriptions to a renderer.

/// Adjacency-list text format: parsing, formatting and file helpers.
pub mod import_export;

/// Graphviz description of a graph.
pub mod dot;

/// External renderer abstraction.
pub mod render;
