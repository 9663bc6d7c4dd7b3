//! Etymograph Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Etymograph parser
//! and graph builder. It includes:
//!
//! - **Identifiers**: Content-addressed node and edge identifiers ([`identifier::NodeId`])
//! - **Content trees**: The parsed, not yet graphed, derivation tree ([`content::ContentNode`])
//! - **Graphs**: Positioned nodes and directed edges ([`graph::DerivationGraph`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])

pub mod color;
pub mod content;
pub mod geometry;
pub mod graph;
pub mod identifier;
