//! Trace recording: drive a stepper for N ticks and collect the voltage trail.

use crate::neuron::IzhikevichNeuron;

/// Voltage trail of one simulation run: the post-step membrane potential per
/// tick, plus the tick indices at which the stepper spiked.
#[derive(Clone, Debug)]
pub struct Trace {
    pub samples: Vec<f64>,
    pub spike_ticks: Vec<usize>,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn spike_count(&self) -> usize {
        self.spike_ticks.len()
    }

    /// True when no sample has diverged to inf/NaN. The stepper itself never
    /// guards against divergence, so callers check here before rendering.
    pub fn all_finite(&self) -> bool {
        self.samples.iter().all(|v| v.is_finite())
    }
}

/// Run `steps` ticks at a constant drive, recording the post-step voltage.
pub fn record_constant(neuron: &mut IzhikevichNeuron, current: f64, steps: usize) -> Trace {
    record_with(neuron, |_| current, steps)
}

/// Run `steps` ticks with a per-tick drive, recording the post-step voltage.
pub fn record_with<F>(neuron: &mut IzhikevichNeuron, mut drive: F, steps: usize) -> Trace
where
    F: FnMut(usize) -> f64,
{
    let mut samples = Vec::with_capacity(steps);
    let mut spike_ticks = Vec::new();
    for tick in 0..steps {
        if neuron.step(drive(tick)) {
            spike_ticks.push(tick);
        }
        samples.push(neuron.v);
    }
    Trace { samples, spike_ticks }
}
