// Application state for the TUI, including a circular voltage strip per channel.

use crate::backend::TraceBackend;

/// Display range for mapping voltages onto glyph levels (mV).
const V_FLOOR: f64 = -90.0;
const V_CEIL: f64 = 40.0;

/// Eight-level bar glyphs, lowest voltage first.
const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Kernel steps advanced per UI tick; at dt = 0.01 a single step barely moves
/// the trace, so each column aggregates a batch.
const STEPS_PER_TICK: usize = 25;

pub struct App<B: TraceBackend> {
    pub backend: B,
    pub tick: u64,
    pub width: usize,              // number of columns (time window)
    pub strips: Vec<Vec<char>>,    // [channel][col]
    pub spike_counts: Vec<u64>,
    pub running: bool,
}

/// Map a voltage onto a bar glyph; spikes override with a full-height mark.
pub fn glyph_for(v: f64, spike: bool) -> char {
    if spike {
        return '|';
    }
    if !v.is_finite() {
        return '?';
    }
    let clamped = v.clamp(V_FLOOR, V_CEIL);
    let level = ((clamped - V_FLOOR) / (V_CEIL - V_FLOOR) * (GLYPHS.len() as f64 - 1.0)).round();
    GLYPHS[level as usize]
}

impl<B: TraceBackend> App<B> {
    pub fn new(backend: B, width: usize) -> Self {
        let n = backend.channels();
        Self {
            backend,
            tick: 0,
            width,
            strips: vec![vec![' '; width]; n],
            spike_counts: vec![0; n],
            running: false,
        }
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Advance the simulation by one batch of kernel steps and write the
    /// resulting column into the circular strips. The column shows the last
    /// voltage of the batch; a spike anywhere in the batch marks the column.
    pub fn step(&mut self) {
        let n = self.backend.channels();
        let mut spiked = vec![false; n];
        let mut voltages = vec![f64::NAN; n];
        for _ in 0..STEPS_PER_TICK {
            let sample = self.backend.step();
            for ch in 0..n {
                if sample.spikes.get(ch).copied().unwrap_or(false) {
                    spiked[ch] = true;
                    self.spike_counts[ch] += 1;
                }
                voltages[ch] = sample.voltages.get(ch).copied().unwrap_or(f64::NAN);
            }
        }

        self.tick = self.tick.saturating_add(1);
        let col = (self.tick as usize) % self.width;

        for (ch, strip) in self.strips.iter_mut().enumerate() {
            strip[col] = glyph_for(voltages[ch], spiked[ch]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_cover_the_display_range() {
        assert_eq!(glyph_for(V_FLOOR, false), GLYPHS[0]);
        assert_eq!(glyph_for(V_CEIL, false), GLYPHS[7]);
        assert_eq!(glyph_for(-1000.0, false), GLYPHS[0]);
        assert_eq!(glyph_for(1000.0, false), GLYPHS[7]);
        assert_eq!(glyph_for(f64::NAN, false), '?');
        assert_eq!(glyph_for(0.0, true), '|');
    }
}
