//! Layout components for arranging controls

pub mod group;

pub use group::ControlGroup;
