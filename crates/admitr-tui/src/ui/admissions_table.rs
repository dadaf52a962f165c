/// Today's admissions as a sortable table. The display order is derived
/// from the ledger on every render; nothing here caches it.
use crate::stores::admissions_store::AdmissionsState;
use admitr_core::{Admission, SortConfig, SortKey};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState, Widget},
};

pub struct AdmissionsTable {
    rows: Vec<Admission>,
    sort: SortConfig,
    row_cursor: usize,
}

impl AdmissionsTable {
    pub fn from_state(state: &AdmissionsState) -> Self {
        Self {
            rows: state.ledger.sorted_view(),
            sort: state.ledger.sort(),
            row_cursor: state.row_cursor,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Today's Admissions ")
            .title(Line::from(" Add Regis [a] ").right_aligned())
            .border_style(Style::default().fg(Color::White));

        if self.rows.is_empty() {
            block.render(area, buf);
            return;
        }

        let header = Row::new(vec![
            self.header_cell("Patient Name", Some(SortKey::Patient)),
            self.header_cell("Age", Some(SortKey::Age)),
            self.header_cell("Doctor Name", None),
            self.header_cell("Time of Consultation", None),
        ])
        .height(1)
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|admission| {
                Row::new(vec![
                    Cell::from(admission.patient.clone()),
                    Cell::from(admission.age.to_string()),
                    Cell::from(admission.doctor.clone()),
                    Cell::from(admission.time.clone()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(35), // Patient Name
                Constraint::Percentage(10), // Age
                Constraint::Percentage(30), // Doctor Name
                Constraint::Percentage(25), // Time of Consultation
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

        let mut table_state = TableState::default();
        table_state.select(Some(self.row_cursor.min(self.rows.len() - 1)));

        StatefulWidget::render(table, area, buf, &mut table_state);
    }

    fn header_cell(&self, label: &str, key: Option<SortKey>) -> Cell<'static> {
        let text = match key.and_then(|k| self.sort.indicator(k)) {
            Some(indicator) => format!("{} {}", label, indicator),
            None => label.to_string(),
        };
        Cell::from(text).style(Style::default().fg(Color::Yellow))
    }
}
