//! Core model and logic for the EyeGuard monitoring console.
//!
//! Cameras, incidents, alerts, and operator accounts are generated in memory
//! from a seedable random source, summarized into dashboard statistics, and
//! served to each screen through listing controllers that filter a local copy.

pub mod aggregate;
pub mod controller;
pub mod domain;
pub mod generator;
pub mod prelude;
pub mod store;
pub mod telemetry;

pub use prelude::{CoreError, CoreResult, RecordFilter, SessionConfig};
pub use store::Store;
