use crossterm::event::KeyCode;

/// Events that can occur in the dashboard TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Quit the application
    Quit,
    /// Toggle help overlay
    ToggleHelp,
    /// Reload the log immediately instead of waiting for the next tick
    Reload,
    /// Write the full log to the export file
    Export,
    /// No action
    None,
}

impl DashboardEvent {
    pub fn from_key(code: KeyCode) -> Self {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => DashboardEvent::Quit,
            KeyCode::Char('?') | KeyCode::Char('h') => DashboardEvent::ToggleHelp,
            KeyCode::Char('r') | KeyCode::F(5) => DashboardEvent::Reload,
            KeyCode::Char('e') => DashboardEvent::Export,
            _ => DashboardEvent::None,
        }
    }
}
