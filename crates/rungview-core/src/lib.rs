//! Rungview Core Types and Definitions
//!
//! This crate provides the foundational types for the rungview ladder-diagram
//! engine. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Model**: The semantic ladder-diagram model ([`model`] module)
//! - **Surface**: The abstract 2D drawing surface ([`surface`] module)

pub mod color;
pub mod geometry;
pub mod model;
pub mod surface;
