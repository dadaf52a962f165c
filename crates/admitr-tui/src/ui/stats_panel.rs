/// Stat cards with the static placeholder bar charts. The bars are purely
/// decorative and never derived from state.
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Widget},
};

const ADMISSIONS_BARS: [u64; 5] = [40, 70, 50, 90, 60];
const TRANSACTIONS_BARS: [u64; 5] = [30, 50, 80, 40, 75];

pub struct StatsPanel;

impl StatsPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        render_card(chunks[0], buf, " Total Admissions ", &ADMISSIONS_BARS);
        render_card(chunks[1], buf, " Total Transactions ", &TRANSACTIONS_BARS);
    }
}

fn render_card(area: Rect, buf: &mut Buffer, title: &str, heights: &[u64]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(Style::default().fg(Color::White));

    // bars carry no value labels
    let bars: Vec<Bar> = heights
        .iter()
        .map(|h| Bar::default().value(*h).text_value(String::new()))
        .collect();

    BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Cyan))
        .max(100)
        .render(area, buf);
}
