//! Canonical asset model shared by the translator, reorganizer and enricher.

mod asset;
mod forest;
mod kind;
mod provenance;

pub use asset::Asset;
pub use forest::{Forest, NodeData, NodeId, PLACEHOLDER};
pub use kind::Kind;
pub use provenance::{Convention, Location};
