use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::config::DEFAULT_REFRESH_MS;
use crate::core::log_view::{export_to, Dashboard, LogView, EXPORT_FILE_NAME};
use crate::core::sample::LogTable;

use super::event_handler::DashboardEvent;
use super::render::render_ui;

/// Outcome of the most recent load pass
#[derive(Debug, Clone)]
pub enum LoadState {
    /// Source missing or unreadable
    Absent,
    Loaded {
        table: LogTable,
        dashboard: Dashboard,
    },
    /// Source exists but did not parse
    Failed(String),
}

/// Dashboard application state
pub struct DashboardApp {
    pub view: LogView,
    pub state: LoadState,
    pub should_quit: bool,
    pub show_help: bool,
    pub interval_ms: u64,
    pub export_dir: PathBuf,
    pub export_file_name: String,
    pub status: Option<String>,
}

impl DashboardApp {
    pub fn new(config: DashboardAppConfig) -> Self {
        Self {
            view: LogView::new(config.source),
            state: LoadState::Absent,
            should_quit: false,
            show_help: false,
            interval_ms: config.interval_ms,
            export_dir: config.export_dir,
            export_file_name: config.export_file_name,
            status: None,
        }
    }

    /// Run one pass: reload the source from scratch and re-derive every view.
    pub fn reload(&mut self) {
        self.state = match self.view.load_dashboard() {
            Ok(Some((table, dashboard))) => LoadState::Loaded { table, dashboard },
            Ok(None) => LoadState::Absent,
            Err(e) => {
                log::debug!("Failed to load {:?}: {}", self.view.source(), e);
                LoadState::Failed(e.to_string())
            }
        };
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match &self.state {
            LoadState::Loaded { dashboard, .. } => Some(dashboard),
            _ => None,
        }
    }

    /// Write the currently loaded table to the export file.
    pub fn export(&mut self) -> Option<PathBuf> {
        let table = match &self.state {
            LoadState::Loaded { table, .. } => table,
            _ => {
                self.status = Some("Nothing to export: no log loaded".to_string());
                return None;
            }
        };

        match export_to(table, &self.export_dir, &self.export_file_name) {
            Ok(path) => {
                self.status = Some(format!("⬇️ Exported {} records to {}", table.len(), path.display()));
                Some(path)
            }
            Err(e) => {
                self.status = Some(format!("Export failed: {}", e));
                None
            }
        }
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: DashboardEvent) {
        // Any key other than quit closes the help overlay
        if self.show_help && event != DashboardEvent::Quit {
            self.show_help = false;
            return;
        }

        match event {
            DashboardEvent::Quit => self.should_quit = true,
            DashboardEvent::ToggleHelp => self.show_help = !self.show_help,
            DashboardEvent::Reload => {
                self.reload();
                self.status = Some("Reloaded".to_string());
            }
            DashboardEvent::Export => {
                self.export();
            }
            DashboardEvent::None => {}
        }
    }
}

/// Configuration for the dashboard app
#[derive(Debug, Clone)]
pub struct DashboardAppConfig {
    pub source: PathBuf,
    pub interval_ms: u64,
    pub export_dir: PathBuf,
    pub export_file_name: String,
}

impl Default for DashboardAppConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("log.csv"),
            interval_ms: DEFAULT_REFRESH_MS,
            export_dir: PathBuf::from("."),
            export_file_name: EXPORT_FILE_NAME.to_string(),
        }
    }
}

/// Run the dashboard TUI application
pub fn run_dashboard_app(config: DashboardAppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = DashboardApp::new(config);
    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal even when the loop failed
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut DashboardApp,
) -> Result<()> {
    let tick_rate = Duration::from_millis(app.interval_ms);

    app.reload();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| render_ui(frame, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout).context("Event poll failed")? {
            if let Event::Key(key) = event::read().context("Event read failed")? {
                if key.kind == KeyEventKind::Press {
                    app.handle_event(DashboardEvent::from_key(key.code));
                }
            }
        }

        if app.should_quit {
            break;
        }

        if last_tick.elapsed() >= tick_rate {
            app.reload();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const LOG: &str = "Timestamp,CPU,Memory,Disk,Ping_Status,Ping_ms\n\
                       2025-10-01 12:00:00,15.2,40.1,58.9,UP,22.5\n";

    fn app_in(dir: &TempDir) -> DashboardApp {
        DashboardApp::new(DashboardAppConfig {
            source: dir.path().join("log.csv"),
            interval_ms: 1000,
            export_dir: dir.path().to_path_buf(),
            export_file_name: EXPORT_FILE_NAME.to_string(),
        })
    }

    #[test]
    fn test_reload_absent_then_loaded() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        app.reload();
        assert!(matches!(app.state, LoadState::Absent));

        fs::write(dir.path().join("log.csv"), LOG).unwrap();
        app.reload();
        assert_eq!(app.dashboard().unwrap().total_records, 1);
    }

    #[test]
    fn test_reload_unreadable_source_is_absent() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("log.csv")).unwrap();
        let mut app = app_in(&dir);

        app.reload();
        assert!(matches!(app.state, LoadState::Absent));
        assert!(app.status.is_none());
    }

    #[test]
    fn test_reload_parse_failure_keeps_running() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("log.csv"), "Timestamp,CPU\n1,2\n").unwrap();
        let mut app = app_in(&dir);

        app.reload();
        match &app.state {
            LoadState::Failed(msg) => assert!(msg.contains("Memory")),
            other => panic!("unexpected state: {other:?}"),
        }
        assert!(!app.should_quit);
    }

    #[test]
    fn test_export_writes_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("log.csv"), LOG).unwrap();
        let mut app = app_in(&dir);
        app.reload();

        app.handle_event(DashboardEvent::Export);
        let written = fs::read_to_string(dir.path().join(EXPORT_FILE_NAME)).unwrap();
        assert_eq!(written, LOG);
        assert!(app.status.as_deref().unwrap().contains("Exported 1 records"));
    }

    #[test]
    fn test_export_without_log() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.reload();

        assert!(app.export().is_none());
        assert!(!dir.path().join(EXPORT_FILE_NAME).exists());
    }

    #[test]
    fn test_help_and_quit() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        app.handle_event(DashboardEvent::ToggleHelp);
        assert!(app.show_help);
        app.handle_event(DashboardEvent::Reload);
        assert!(!app.show_help);

        app.handle_event(DashboardEvent::Quit);
        assert!(app.should_quit);
    }
}
