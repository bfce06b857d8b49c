//! Cascade driver: each stepper's membrane voltage drives the next stepper.
//!
//! Semantics match the classic two-neuron pairing: within one tick the head
//! stepper integrates the external drive first, and every later stepper is
//! fed the post-step voltage its predecessor just produced.

use izhi_core::{IzhikevichNeuron, NeuronParams};

use crate::error::{ModelError, ModelResult};

#[derive(Clone, Debug)]
pub struct CascadeChain {
    neurons: Vec<IzhikevichNeuron>,
}

impl CascadeChain {
    /// Build `len` identically parameterized steppers, each at rest.
    pub fn new(params: NeuronParams, len: usize) -> ModelResult<Self> {
        if len == 0 {
            return Err(ModelError::InvalidInput("cascade needs at least one stepper"));
        }
        if !params.is_finite() {
            return Err(ModelError::NonFinite("params"));
        }
        Ok(Self {
            neurons: (0..len).map(|_| IzhikevichNeuron::new(params)).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    pub fn neurons(&self) -> &[IzhikevichNeuron] {
        &self.neurons
    }

    /// Post-step voltages, head first.
    pub fn voltages(&self) -> Vec<f64> {
        self.neurons.iter().map(|n| n.v).collect()
    }

    /// Advance the whole chain one tick. The head receives `drive`; each
    /// later stepper receives the voltage of the one before it. Returns the
    /// per-position spike flags.
    pub fn step(&mut self, drive: f64) -> Vec<bool> {
        let mut spikes = Vec::with_capacity(self.neurons.len());
        let mut input = drive;
        for n in &mut self.neurons {
            spikes.push(n.step(input));
            input = n.v;
        }
        spikes
    }

    /// Return every stepper to the resting state.
    pub fn reset(&mut self) {
        for n in &mut self.neurons {
            n.reset();
        }
    }
}
