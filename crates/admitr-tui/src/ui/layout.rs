/// Layout manager for the TUI application
use crate::stores::session_store::Screen;
use crate::stores::ui_store::UIState;
use crate::stores::{AdmissionsStore, SessionStore, UIStore};
use crate::ui::{AddFormModal, AdmissionsTable, LoginPanel, StatsPanel};
use admitr_core::get_admitr_setting;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the complete application layout
pub fn render_layout(
    frame: &mut Frame,
    session_store: &SessionStore,
    admissions_store: &AdmissionsStore,
    ui_store: &UIStore,
) {
    let area = frame.area();
    let session_state = session_store.get_state();

    if session_state.screen == Screen::Login {
        let login = LoginPanel::from_state(&session_state);
        login.render(area, frame.buffer_mut());
        return;
    }

    let admissions_state = admissions_store.get_state();
    let ui_state = ui_store.get_state();

    // Main layout: Header | Stats | Table | Footer
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(10), // Stat cards
            Constraint::Min(5),     // Admissions table
            Constraint::Length(3),  // Footer
        ])
        .split(area);

    render_header(frame, vertical_chunks[0], admissions_state.ledger.len());

    let stats = StatsPanel::new();
    stats.render(vertical_chunks[1], frame.buffer_mut());

    let table = AdmissionsTable::from_state(&admissions_state);
    table.render(vertical_chunks[2], frame.buffer_mut());

    render_footer(frame, vertical_chunks[3], &ui_state);

    // Render the add-registration modal on top if open
    if admissions_state.is_add_form_open {
        let modal = AddFormModal::from_state(&admissions_state);
        modal.render(area, frame.buffer_mut());
    }
}

fn render_header(frame: &mut Frame, area: Rect, admission_count: usize) {
    let facility = get_admitr_setting!(ADMITR_FACILITY_NAME);

    let header_text = Line::from(vec![
        Span::styled(
            format!(" {} ", facility),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Admissions today: "),
        Span::styled(
            admission_count.to_string(),
            Style::default().fg(Color::Green),
        ),
        Span::raw(" | "),
        Span::styled("l:Logout", Style::default().fg(Color::DarkGray)),
    ]);

    Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL))
        .render(area, frame.buffer_mut());
}

fn render_footer(frame: &mut Frame, area: Rect, ui_state: &UIState) {
    let help_text = if ui_state.show_help {
        "q:Quit | 1:Sort Patient | 2:Sort Age | a:Add Regis | j/k:Move | l:Logout | ?:Hide Help"
    } else {
        "q:Quit | a:Add Regis | ?:Help"
    };

    let footer_text = Line::from(vec![
        Span::raw(" "),
        Span::raw(help_text),
        Span::raw("  |  "),
        Span::raw(get_admitr_setting!(ADMITR_FOOTER_TEXT)),
    ]);

    Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL))
        .render(area, frame.buffer_mut());
}
