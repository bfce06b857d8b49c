// TUI rendering: membrane-voltage strips (time on X, one row per stepper) + status panel.

use std::io::Stdout;

use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Text,
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use crate::app::App;
use crate::backend::TraceBackend;

/// Draws the UI each frame:
/// - Top: one scrolling voltage strip per stepper (circular columns).
/// - Bottom: status including tick, drive, spike totals, run state, controls.
pub fn draw<B: TraceBackend>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &App<B>,
) -> anyhow::Result<()> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Percentage(80), Constraint::Percentage(20)].as_ref())
            .split(f.size());

        // Build strip lines. Each row: "nXX |▁▁▂▅|▁..."
        let mut lines = Vec::with_capacity(app.strips.len());
        let mut buf = String::new();
        for (row_idx, strip) in app.strips.iter().enumerate() {
            buf.clear();
            buf.push_str(&format!("{:<4}|", app.backend.label(row_idx)));
            for &ch in strip.iter() {
                buf.push(ch);
            }
            lines.push(buf.clone());
        }

        let strip_text = Text::from(lines.join("\n"));
        let strip_widget = Paragraph::new(strip_text)
            .block(
                Block::default()
                    .title("Membrane Trace  (time →, | = spike)")
                    .borders(Borders::ALL),
            )
            .style(Style::default().fg(Color::White));
        f.render_widget(strip_widget, chunks[0]);

        // Status and controls
        let spikes: Vec<String> = app
            .spike_counts
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}={}", app.backend.label(i), c))
            .collect();
        let status = format!(
            "Tick: {} | Drive: {} | Spikes: {} | Running: {} | Controls: [s] Step  [r] Run/Pause  [q] Quit",
            app.tick,
            app.backend.drive(),
            spikes.join(" "),
            if app.running { "yes" } else { "no" }
        );
        let status_widget = Paragraph::new(status)
            .style(Style::default().fg(Color::Cyan))
            .block(Block::default().title("Status").borders(Borders::ALL));
        f.render_widget(status_widget, chunks[1]);
    })?;
    Ok(())
}
