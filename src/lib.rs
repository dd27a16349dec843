//! # OpenGolfCoach
//!
//! Derived golf-shot value calculation engine. A caller supplies whichever
//! launch parameters its sensor captured (ball speed, launch angles, and
//! either a combined spin vector or its orthogonal components) and the
//! engine fills in every remaining derivable field: the canonical spin
//! decomposition, carry and offline distance, flight shape, club delivery
//! estimates and a shot classification.
//!
//! The core is a pure function over an in-memory shot record; JSON, C, WASM
//! and Python surfaces all wrap the same pipeline.

pub use bindings::calculate_derived_values;
pub use engine::calculate_shot;
pub use error::CoachError;
pub use shot::{DerivedValues, ShotInput, ShotResult, UsCustomaryUnits, Vec3Out};

pub mod bindings;
mod classify;
mod club;
pub mod constants;
mod engine;
mod error;
mod flight;
mod normalize;
pub mod shot;
mod spin;
mod units;

#[cfg(feature = "python")]
mod python;
#[cfg(target_arch = "wasm32")]
pub mod wasm;
