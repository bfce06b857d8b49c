//! Constant-current sweep driver: one fresh stepper per drive level.
//!
//! Every current gets an independently constructed stepper so levels cannot
//! leak state into one another.

use izhi_core::{record_constant, IzhikevichNeuron, NeuronParams, Trace};

use crate::error::{ModelError, ModelResult};

#[derive(Clone, Debug)]
pub struct SweepResult {
    pub current: f64,
    pub trace: Trace,
}

/// Run `steps` ticks at each drive level in `currents`.
pub fn sweep_constant(
    params: NeuronParams,
    currents: &[f64],
    steps: usize,
) -> ModelResult<Vec<SweepResult>> {
    if currents.is_empty() {
        return Err(ModelError::InvalidInput("empty current list"));
    }
    if steps == 0 {
        return Err(ModelError::InvalidInput("zero steps"));
    }
    if !params.is_finite() {
        return Err(ModelError::NonFinite("params"));
    }
    if !currents.iter().all(|c| c.is_finite()) {
        return Err(ModelError::NonFinite("currents"));
    }

    let mut results = Vec::with_capacity(currents.len());
    for &current in currents {
        let mut neuron = IzhikevichNeuron::new(params);
        let trace = record_constant(&mut neuron, current, steps);
        results.push(SweepResult { current, trace });
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_inputs() {
        let p = NeuronParams::default();
        assert_eq!(
            sweep_constant(p, &[], 100).unwrap_err(),
            ModelError::InvalidInput("empty current list")
        );
        assert_eq!(
            sweep_constant(p, &[4.0], 0).unwrap_err(),
            ModelError::InvalidInput("zero steps")
        );
        assert_eq!(
            sweep_constant(p, &[f64::NAN], 100).unwrap_err(),
            ModelError::NonFinite("currents")
        );
    }

    #[test]
    fn one_trace_per_current_with_fresh_state() {
        let p = NeuronParams::default();
        let results = sweep_constant(p, &[4.0, 6.0, 8.0], 2_000).unwrap();
        assert_eq!(results.len(), 3);
        for r in &results {
            assert_eq!(r.trace.len(), 2_000);
            assert!(r.trace.all_finite());
        }

        // Each level starts from rest: a sweep of one current equals a
        // standalone run of that current.
        let mut standalone = IzhikevichNeuron::new(p);
        let lone = record_constant(&mut standalone, 6.0, 2_000);
        let swept = &results[1].trace;
        assert_eq!(swept.spike_ticks, lone.spike_ticks);
        for (a, b) in swept.samples.iter().zip(&lone.samples) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn repeated_sweeps_are_identical() {
        let p = NeuronParams::default();
        let first = sweep_constant(p, &[4.0, 8.0], 1_000).unwrap();
        let second = sweep_constant(p, &[4.0, 8.0], 1_000).unwrap();
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.trace.spike_ticks, b.trace.spike_ticks);
            assert_eq!(a.trace.samples, b.trace.samples);
        }
    }
}
