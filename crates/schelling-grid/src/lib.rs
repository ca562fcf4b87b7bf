//! `schelling-grid` — board state for the schelling segregation engine.
//!
//! The [`Board`] owns everything spatial: cell occupancy, the free-cell
//! pool, neighbor lookup, random population, relocation, and the
//! single-pass sweep that the run loop in `schelling-sim` drives to
//! convergence.
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`board`]    | `Board` — occupancy, placement, relocation, sweep    |
//! | [`free`]     | `FreeCells` — O(1) swap-remove free-cell pool        |
//! | [`populate`] | `PopulateParams` — validated population inputs       |
//! | [`snapshot`] | `Snapshot` — renderer-facing group-id export         |
//! | [`stats`]    | happiness fraction, segregation index, group census  |
//!
//! # Invariants
//!
//! After construction and after every mutation:
//!
//! - `free.len() + occupied_count() == width * height`, and no coordinate
//!   is simultaneously free and occupied.
//! - Every stored agent's `position` equals the coordinate of its
//!   occupancy slot.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Statistics scans run on Rayon's thread pool.            |
//! | `serde`    | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod board;
pub mod free;
pub mod populate;
pub mod snapshot;
pub mod stats;


pub use board::Board;
pub use free::FreeCells;
pub use populate::PopulateParams;
pub use snapshot::Snapshot;
