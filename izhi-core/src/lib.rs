//! izhi-core: Zero-dependency Izhikevich neuron stepper (embeddable)

#![cfg_attr(not(feature = "std"), no_std)]

pub mod params;
pub mod neuron;
#[cfg(feature = "std")]
pub mod trace;

// Re-exports
pub use params::NeuronParams;
pub use neuron::{IzhikevichNeuron, REST_U, REST_V};
#[cfg(feature = "std")]
pub use trace::{record_constant, record_with, Trace};
