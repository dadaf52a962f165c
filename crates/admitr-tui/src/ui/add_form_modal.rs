/// Add-registration modal overlay.
use crate::stores::admissions_store::AdmissionsState;
use crate::ui::centered_rect;
use admitr_core::DraftField;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const FIELD_ORDER: [DraftField; 4] = [
    DraftField::Patient,
    DraftField::Age,
    DraftField::Doctor,
    DraftField::Time,
];

pub struct AddFormModal {
    state: AdmissionsState,
}

impl AddFormModal {
    pub fn from_state(state: &AdmissionsState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if !self.state.is_add_form_open {
            return;
        }

        let modal_area = centered_rect(50, 80, area);

        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(" Add Registration ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Patient Name
                Constraint::Length(3), // Age
                Constraint::Length(3), // Doctor Name
                Constraint::Length(3), // Consultation Time
                Constraint::Length(1), // Hint
                Constraint::Length(1), // Help
                Constraint::Min(0),
            ])
            .split(inner_area);

        for (chunk, field) in chunks.iter().zip(FIELD_ORDER) {
            self.render_input(*chunk, buf, field);
        }

        if self.state.required_hint {
            Paragraph::new("All fields are required")
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .render(chunks[4], buf);
        }

        Paragraph::new("Enter:Submit | Tab:Next Field | Esc:Cancel")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[5], buf);
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer, field: DraftField) {
        let is_focused = self.state.focused_field == field;
        let value = self.state.draft.field(field);

        let border_style = if is_focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .title(field.label())
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner_area = block.inner(area);
        block.render(area, buf);

        // editing is append-only, so the cursor always sits at the end
        let text = if is_focused {
            format!("{}█", value)
        } else {
            value.to_string()
        };

        let text_style = if is_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        Paragraph::new(text).style(text_style).render(inner_area, buf);
    }
}
