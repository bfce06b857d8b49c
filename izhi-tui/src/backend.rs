// Backend abstraction for the TUI so we can swap stepper engines.

use izhi_core::{IzhikevichNeuron, NeuronParams};
use izhi_core_plus::{from_fixed, to_fixed, CascadeChain, QuantNeuron, QuantParams};

/// One tick's worth of output: post-step voltage and spike flag per channel.
pub struct TickSample {
    pub voltages: Vec<f64>,
    pub spikes: Vec<bool>,
}

/// Common interface for any stepper engine that can drive the TUI.
pub trait TraceBackend {
    /// Advance the simulation by one tick and return per-channel samples.
    fn step(&mut self) -> TickSample;
    /// Number of voltage channels (rows in the display).
    fn channels(&self) -> usize;
    /// Short row label for a channel.
    fn label(&self, channel: usize) -> String;
    /// The constant drive current fed to the head stepper.
    fn drive(&self) -> f64;
}

impl TraceBackend for Box<dyn TraceBackend> {
    fn step(&mut self) -> TickSample {
        (**self).step()
    }

    fn channels(&self) -> usize {
        (**self).channels()
    }

    fn label(&self, channel: usize) -> String {
        (**self).label(channel)
    }

    fn drive(&self) -> f64 {
        (**self).drive()
    }
}

/// Two-stepper floating-point cascade: the head integrates a constant drive,
/// the second stepper is fed the head's voltage.
pub struct CascadeBackend {
    chain: CascadeChain,
    drive: f64,
}

impl CascadeBackend {
    pub fn new(drive: f64) -> anyhow::Result<Self> {
        let chain = CascadeChain::new(NeuronParams::default(), 2)?;
        Ok(Self { chain, drive })
    }
}

impl TraceBackend for CascadeBackend {
    fn step(&mut self) -> TickSample {
        let spikes = self.chain.step(self.drive);
        TickSample {
            voltages: self.chain.voltages(),
            spikes,
        }
    }

    fn channels(&self) -> usize {
        self.chain.len()
    }

    fn label(&self, channel: usize) -> String {
        format!("n{:02}", channel)
    }

    fn drive(&self) -> f64 {
        self.drive
    }
}

/// The float kernel next to its Q9.7 quantization under the same drive, for
/// eyeballing where the 16-bit datapath departs from double precision.
pub struct QuantCompareBackend {
    float: IzhikevichNeuron,
    quant: QuantNeuron,
    drive: f64,
}

impl QuantCompareBackend {
    pub fn new(drive: f64) -> Self {
        let params = NeuronParams::default();
        Self {
            float: IzhikevichNeuron::new(params),
            quant: QuantNeuron::new(QuantParams::from_float(&params)),
            drive,
        }
    }
}

impl TraceBackend for QuantCompareBackend {
    fn step(&mut self) -> TickSample {
        let s_float = self.float.step(self.drive);
        let s_quant = self.quant.step(to_fixed(self.drive));
        TickSample {
            voltages: vec![self.float.v, from_fixed(self.quant.v)],
            spikes: vec![s_float, s_quant],
        }
    }

    fn channels(&self) -> usize {
        2
    }

    fn label(&self, channel: usize) -> String {
        match channel {
            0 => "f64".to_string(),
            _ => "q97".to_string(),
        }
    }

    fn drive(&self) -> f64 {
        self.drive
    }
}
