//! View models for the three screens (builder, library, data table) and
//! their plain-text rendering.

pub mod builder;
pub mod field;
pub mod library;
pub mod mvi;
pub mod notice;
pub mod render;
pub mod table;
