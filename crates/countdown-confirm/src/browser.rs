//! Browser platform layer: page scanning and the per-button interaction.

pub mod binder;
pub mod binding;
