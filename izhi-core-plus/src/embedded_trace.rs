//! Fixed-capacity trace buffer for no_std targets (heapless-backed).
//!
//! Records Q9.7 samples from a quantized stepper without allocating; pushing
//! past capacity is a `Capacity` error rather than a reallocation.

use heapless::Vec;

use crate::error::{ModelError, ModelResult};
use crate::fixed::Fixed;

pub struct FixedTrace<const N: usize> {
    samples: Vec<Fixed, N>,
    spikes: usize,
}

impl<const N: usize> FixedTrace<N> {
    pub const fn new() -> Self {
        Self {
            samples: Vec::new(),
            spikes: 0,
        }
    }

    /// Append one post-step sample and its spike flag.
    pub fn push(&mut self, v: Fixed, spike: bool) -> ModelResult<()> {
        self.samples.push(v).map_err(|_| ModelError::Capacity)?;
        if spike {
            self.spikes += 1;
        }
        Ok(())
    }

    pub fn samples(&self) -> &[Fixed] {
        &self.samples
    }

    pub fn spike_count(&self) -> usize {
        self.spikes
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.spikes = 0;
    }
}

impl<const N: usize> Default for FixedTrace<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quant::{QuantNeuron, QuantParams};
    use izhi_core::NeuronParams;

    #[test]
    fn records_until_capacity() {
        let q = QuantParams::from_float(&NeuronParams::regular_spiking());
        let mut n = QuantNeuron::new(q);
        let mut trace: FixedTrace<16> = FixedTrace::new();

        for _ in 0..16 {
            let spike = n.step(0);
            trace.push(n.v, spike).unwrap();
        }
        assert_eq!(trace.len(), 16);
        assert_eq!(trace.push(n.v, false).unwrap_err(), ModelError::Capacity);

        trace.clear();
        assert!(trace.is_empty());
        assert_eq!(trace.spike_count(), 0);
    }
}
