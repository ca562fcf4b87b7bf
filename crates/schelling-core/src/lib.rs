//! `schelling-core` — foundational types for the schelling segregation
//! engine.
//!
//! This crate is a dependency of every other `schelling-*` crate.  It
//! intentionally has no `schelling-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`coord`]  | `Coord` — a grid cell coordinate                |
//! | [`ids`]    | `GroupId` — an agent's categorical group        |
//! | [`config`] | `GridConfig` — validated board parameters       |
//! | [`rng`]    | `SimRng` — owned, seedable random source        |
//! | [`error`]  | `ModelError`, `ModelResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::GridConfig;
pub use coord::Coord;
pub use error::{ModelError, ModelResult};
pub use ids::GroupId;
pub use rng::SimRng;
