/// Login screen: the session gate into the dashboard.
use crate::stores::session_store::{CredentialField, SessionState};
use crate::ui::centered_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

pub struct LoginPanel {
    state: SessionState,
}

impl LoginPanel {
    pub fn from_state(state: &SessionState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let panel_area = centered_rect(40, 60, area);

        Clear.render(panel_area, buf);

        let block = Block::default()
            .title(" Login ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner_area = block.inner(panel_area);
        block.render(panel_area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Username
                Constraint::Length(3), // Password
                Constraint::Length(1), // Hint
                Constraint::Length(1), // Help
                Constraint::Min(0),
            ])
            .split(inner_area);

        self.render_input(
            chunks[0],
            buf,
            "Username",
            &self.state.username,
            CredentialField::Username,
        );

        // echo the password masked
        let masked = "•".repeat(self.state.password.chars().count());
        self.render_input(chunks[1], buf, "Password", &masked, CredentialField::Password);

        let (hint, hint_style) = if self.state.required_hint {
            (
                "Username and password are required",
                Style::default().fg(Color::Red),
            )
        } else {
            (
                "Enter your credentials",
                Style::default().fg(Color::DarkGray),
            )
        };
        Paragraph::new(hint)
            .style(hint_style)
            .alignment(Alignment::Center)
            .render(chunks[2], buf);

        Paragraph::new("Enter:Login | Tab:Next Field | Esc:Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }

    fn render_input(
        &self,
        area: Rect,
        buf: &mut Buffer,
        label: &str,
        value: &str,
        field: CredentialField,
    ) {
        let is_focused = self.state.focused_field == field;

        let border_style = if is_focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .title(label.to_string())
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
