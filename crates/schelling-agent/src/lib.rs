//! `schelling-agent` — agent state and similarity policies.
//!
//! An [`Agent`] is pure data plus one pluggable comparison strategy
//! ([`SimilarityPolicy`]), chosen at construction and applied uniformly for
//! the agent's lifetime.  The board never inspects agent internals beyond
//! this crate's API, and agents never mutate their own position — the
//! board's relocation operation is the only writer.

pub mod agent;
pub mod policy;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use policy::SimilarityPolicy;
