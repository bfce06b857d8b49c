#![cfg_attr(not(feature = "std"), no_std)]
//! izhi-core-plus: Quantized stepper and drivers atop izhi-core (keeps izhi-core unchanged)
//!
//! Additions:
//! - Q9.7 fixed-point arithmetic and a quantized stepper, kept apart from the
//!   floating-point kernel
//! - Cascade driver (one stepper's voltage feeding the next stepper's drive)
//! - Constant-current sweep driver
//! - Optional embedded/no_std trace buffer behind feature "embedded"
//!
//! This crate composes izhi-core's types and reuses its step semantics.

pub mod fixed;
pub mod quant;
#[cfg(feature = "std")]
pub mod cascade;
#[cfg(feature = "std")]
pub mod sweep;

// Embedded/no_std module (only compiled when feature = "embedded")
#[cfg(feature = "embedded")]
pub mod embedded_trace;

// Error module (no_std friendly)
pub mod error;

// Re-exports
pub use error::{ModelError, ModelResult};
pub use fixed::{from_fixed, saturate, to_fixed, wide_mul, Fixed, Wide, FRACTIONAL_BITS, SCALE};
pub use quant::{QuantNeuron, QuantParams};
#[cfg(feature = "std")]
pub use cascade::CascadeChain;
#[cfg(feature = "std")]
pub use sweep::{sweep_constant, SweepResult};
