//! tonos-core
//!
//! Pure domain types for glaucoma target-IOP decision support.
//! No I/O and no framework dependency; this is the shared vocabulary of
//! the tonos system: eyes, risk factors, baseline pressures, scoring
//! results, and the persisted target record.

pub mod error;
pub mod models;
