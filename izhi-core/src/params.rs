//! Model constants for one stepper instance.

/// Immutable Izhikevich model parameters.
///
/// Passed into each stepper at construction so simulated neurons never share
/// hidden state. `a` is the recovery time scale, `b` the sensitivity of the
/// recovery variable to voltage, `c` the post-spike voltage reset, `d` the
/// post-spike recovery increment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeuronParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    /// Spike threshold (mV)
    pub threshold: f64,
    /// Forward-Euler step size (ms)
    pub dt: f64,
}

pub const DEFAULT_THRESHOLD: f64 = 30.0;
pub const DEFAULT_DT: f64 = 0.01;

impl NeuronParams {
    pub fn new(a: f64, b: f64, c: f64, d: f64, threshold: f64, dt: f64) -> Self {
        Self { a, b, c, d, threshold, dt }
    }

    fn preset(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::new(a, b, c, d, DEFAULT_THRESHOLD, DEFAULT_DT)
    }

    /// Regular spiking (the common excitatory regime)
    pub fn regular_spiking() -> Self {
        Self::preset(0.02, 0.2, -65.0, 8.0)
    }

    /// Fast spiking (inhibitory interneurons)
    pub fn fast_spiking() -> Self {
        Self::preset(0.1, 0.2, -65.0, 2.0)
    }

    /// Chattering (rhythmic bursting)
    pub fn chattering() -> Self {
        Self::preset(0.02, 0.2, -50.0, 2.0)
    }

    /// Low-threshold spiking
    pub fn low_threshold() -> Self {
        Self::preset(0.02, 0.25, -65.0, 2.0)
    }

    /// True when every constant is a finite real and `dt` is positive.
    pub fn is_finite(&self) -> bool {
        self.a.is_finite()
            && self.b.is_finite()
            && self.c.is_finite()
            && self.d.is_finite()
            && self.threshold.is_finite()
            && self.dt.is_finite()
            && self.dt > 0.0
    }
}

impl Default for NeuronParams {
    fn default() -> Self {
        Self::regular_spiking()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_regular_spiking() {
        let p = NeuronParams::default();
        assert_eq!(p, NeuronParams::new(0.02, 0.2, -65.0, 8.0, 30.0, 0.01));
    }

    #[test]
    fn finite_check_rejects_nan_and_zero_dt() {
        assert!(NeuronParams::default().is_finite());

        let mut p = NeuronParams::default();
        p.b = f64::NAN;
        assert!(!p.is_finite());

        let mut p = NeuronParams::default();
        p.dt = 0.0;
        assert!(!p.is_finite());
    }
}
