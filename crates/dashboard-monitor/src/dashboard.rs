//! TUI Dashboard using ratatui.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dashboard_config::SymbolEntry;
use dashboard_core::{ChartRange, DataError, DataSource, PriceSeries};
use dashboard_data::export_to_dir;
use dashboard_metrics::{MetricSummary, PercentChange};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use crate::candles::CandleChart;

/// What the main panel currently shows.
#[derive(Debug, Clone)]
pub enum View {
    /// Nothing fetched yet
    Idle,
    Loaded {
        series: PriceSeries,
        summary: MetricSummary,
    },
    /// Inline error for the current selection
    Failed(String),
}

/// Dashboard state.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub symbols: Vec<SymbolEntry>,
    pub selected: usize,
    pub view: View,
    pub status: String,
    pub tail_rows: usize,
}

impl DashboardState {
    pub fn new(symbols: Vec<SymbolEntry>, selected: usize, tail_rows: usize) -> Self {
        let selected = selected.min(symbols.len().saturating_sub(1));
        Self {
            symbols,
            selected,
            view: View::Idle,
            status: String::new(),
            tail_rows,
        }
    }

    pub fn selected_entry(&self) -> Option<&SymbolEntry> {
        self.symbols.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.symbols.is_empty() {
            self.selected = (self.selected + 1) % self.symbols.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.symbols.is_empty() {
            self.selected = (self.selected + self.symbols.len() - 1) % self.symbols.len();
        }
    }

    /// Replace the view with the outcome of a fetch.
    ///
    /// Metrics are only derived from a successful fetch.
    pub fn apply_fetch(&mut self, result: Result<PriceSeries, DataError>) {
        match result {
            Ok(series) => {
                let summary = MetricSummary::compute(&series);
                self.status = format!(
                    "Loaded {} bars for {} through {}",
                    series.len(),
                    series.symbol(),
                    summary.as_of
                );
                self.view = View::Loaded { series, summary };
            }
            Err(e) => {
                self.status = if e.is_provider_error() {
                    "Provider rejected the request".to_string()
                } else {
                    "Request failed".to_string()
                };
                self.view = View::Failed(e.to_string());
            }
        }
    }

    /// Series currently on screen, if any.
    pub fn series(&self) -> Option<&PriceSeries> {
        match &self.view {
            View::Loaded { series, .. } => Some(series),
            _ => None,
        }
    }
}

/// TUI Dashboard.
pub struct Dashboard {
    refresh_ms: u64,
    range: ChartRange,
    export_dir: PathBuf,
}

impl Dashboard {
    /// Create a new dashboard.
    pub fn new(refresh_ms: u64, range: ChartRange, export_dir: PathBuf) -> Self {
        Self {
            refresh_ms,
            range,
            export_dir,
        }
    }

    /// Run the dashboard until the user quits.
    pub async fn run(&self, source: &dyn DataSource, mut state: DashboardState) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal, source, &mut state).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    async fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        source: &dyn DataSource,
        state: &mut DashboardState,
    ) -> io::Result<()> {
        self.load_selected(terminal, source, state).await?;

        loop {
            terminal.draw(|f| self.ui(f, state))?;

            if !event::poll(Duration::from_millis(self.refresh_ms))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up | KeyCode::Char('k') => state.select_previous(),
                KeyCode::Down | KeyCode::Char('j') => state.select_next(),
                KeyCode::Enter => self.load_selected(terminal, source, state).await?,
                KeyCode::Char('d') => self.export(state),
                _ => {}
            }
        }
    }

    /// Fetch the selected symbol, blocking the interaction until it returns.
    async fn load_selected(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        source: &dyn DataSource,
        state: &mut DashboardState,
    ) -> io::Result<()> {
        let Some(entry) = state.selected_entry().cloned() else {
            return Ok(());
        };

        state.status = format!("Fetching {} ({})...", entry.symbol, self.range);
        terminal.draw(|f| self.ui(f, state))?;

        let result = source.fetch_daily_bars(&entry.symbol, self.range).await;
        state.apply_fetch(result);
        Ok(())
    }

    fn export(&self, state: &mut DashboardState) {
        let status = match state.series() {
            Some(series) => match export_to_dir(series, &self.export_dir) {
                Ok(path) => {
                    info!(path = %path.display(), "CSV export written");
                    format!("Saved {}", path.display())
                }
                Err(e) => {
                    warn!(error = %e, "CSV export failed");
                    format!("Export failed: {}", e)
                }
            },
            None => "Nothing to export".to_string(),
        };
        state.status = status;
    }

    pub fn ui(&self, frame: &mut Frame, state: &DashboardState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(10),   // Body
                Constraint::Length(1), // Status
            ])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(30)])
            .split(rows[1]);

        self.render_header(frame, rows[0], state);
        self.render_selector(frame, columns[0], state);
        self.render_main(frame, columns[1], state);
        self.render_status(frame, rows[2], state);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let symbol = state
            .selected_entry()
            .map(|e| e.symbol.to_string())
            .unwrap_or_default();

        let header = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                "Stock Dashboard",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(symbol, Style::default().fg(Color::Cyan)),
            Span::raw(format!(" | range {}", self.range)),
            Span::raw(" | ↑/↓ select, Enter load, d export CSV, q quit"),
        ])])
        .block(Block::default().borders(Borders::ALL).title("System"));
        frame.render_widget(header, area);
    }

    fn render_selector(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let items: Vec<ListItem> = state
            .symbols
            .iter()
            .map(|e| ListItem::new(format!("{:<6} {}", e.symbol, e.name)))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Select Stock"))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = ListState::default().with_selected(Some(state.selected));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_main(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        match &state.view {
            View::Idle => {
                let hint = Paragraph::new("Press Enter to load the selected stock.")
                    .block(Block::default().borders(Borders::ALL));
                frame.render_widget(hint, area);
            }
            View::Failed(message) => {
                let error = Paragraph::new(format!("Error: {}", message))
                    .style(Style::default().fg(Color::Red))
                    .wrap(Wrap { trim: true })
                    .block(Block::default().borders(Borders::ALL).title("Error"));
                frame.render_widget(error, area);
            }
            View::Loaded { series, summary } => {
                let table_height = u16::try_from(state.tail_rows)
                    .unwrap_or(u16::MAX)
                    .saturating_add(3);
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(4),            // Metrics
                        Constraint::Min(8),               // Chart
                        Constraint::Length(table_height), // Summary table
                    ])
                    .split(area);

                self.render_metrics(frame, chunks[0], summary);
                frame.render_widget(CandleChart::new(series.bars(), series.symbol()), chunks[1]);
                self.render_tail(frame, chunks[2], series, state.tail_rows);
            }
        }
    }

    fn render_metrics(&self, frame: &mut Frame, area: Rect, summary: &MetricSummary) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        let change_color = match summary.change.percent {
            PercentChange::Defined(p) if p < 0.0 => Color::Red,
            PercentChange::Defined(_) => Color::Green,
            PercentChange::Undefined => Color::DarkGray,
        };

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let metrics = [
            (
                "Closing Price",
                Line::from(Span::styled(format!("${:.2}", summary.latest_close), bold)),
            ),
            (
                "Annual Change",
                Line::from(vec![
                    Span::styled(format!("${:.2} ", summary.change.difference), bold),
                    Span::styled(summary.percent_label(), Style::default().fg(change_color)),
                ]),
            ),
            (
                "52-Week High",
                Line::from(Span::styled(format!("${:.2}", summary.range.high), bold)),
            ),
            (
                "52-Week Low",
                Line::from(Span::styled(format!("${:.2}", summary.range.low), bold)),
            ),
        ];

        for ((title, value), card) in metrics.into_iter().zip(cards.iter()) {
            let widget =
                Paragraph::new(value).block(Block::default().borders(Borders::ALL).title(title));
            frame.render_widget(widget, *card);
        }
    }

    fn render_tail(&self, frame: &mut Frame, area: Rect, series: &PriceSeries, rows: usize) {
        let header_cells = ["Date", "Open", "High", "Low", "Close", "Volume"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
        let header = Row::new(header_cells).height(1);

        let body = series.tail(rows).iter().map(|bar| {
            let color = if bar.is_bearish() { Color::Red } else { Color::Green };
            Row::new(vec![
                Cell::from(bar.date.to_string()),
                Cell::from(format!("{:.2}", bar.open)),
                Cell::from(format!("{:.2}", bar.high)),
                Cell::from(format!("{:.2}", bar.low)),
                Cell::from(format!("{:.2}", bar.close)).style(Style::default().fg(color)),
                Cell::from(bar.volume.to_string()),
            ])
        });

        let table = Table::new(
            body,
            [
                Constraint::Percentage(20),
                Constraint::Percentage(15),
                Constraint::Percentage(15),
                Constraint::Percentage(15),
                Constraint::Percentage(15),
                Constraint::Percentage(20),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Summary"));

        frame.render_widget(table, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let status = Paragraph::new(state.status.as_str()).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(status, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use dashboard_core::PriceBar;
    use ratatui::backend::TestBackend;

    fn entries() -> Vec<SymbolEntry> {
        vec![
            SymbolEntry::new("Apple", "AAPL").unwrap(),
            SymbolEntry::new("Alphabet", "GOOGL").unwrap(),
            SymbolEntry::new("Microsoft", "MSFT").unwrap(),
        ]
    }

    fn series(symbol: &str, n: usize) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars = (0..n)
            .map(|i| {
                let c = 400.0 + i as f64;
                let date = start.checked_add_days(Days::new(i as u64)).unwrap();
                PriceBar::new(date, c - 1.0, c + 2.0, c - 2.0, c, 10_000)
            })
            .collect();
        PriceSeries::new(symbol, bars).unwrap()
    }

    fn render_to_string(dashboard: &Dashboard, state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| dashboard.ui(f, state)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn dashboard(dir: PathBuf) -> Dashboard {
        Dashboard::new(250, ChartRange::FiveYears, dir)
    }

    #[test]
    fn test_selection_wraps() {
        let mut state = DashboardState::new(entries(), 2, 5);
        assert_eq!(state.selected_entry().unwrap().symbol.as_str(), "MSFT");

        state.select_next();
        assert_eq!(state.selected, 0);
        state.select_previous();
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_out_of_range_selection_clamped() {
        let state = DashboardState::new(entries(), 9, 5);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_provider_error_shows_no_metrics() {
        let mut state = DashboardState::new(entries(), 0, 5);
        state.apply_fetch(Err(DataError::Provider("symbol not found".into())));

        assert!(state.series().is_none());
        assert!(matches!(state.view, View::Failed(ref m) if m.contains("symbol not found")));
        assert_eq!(state.status, "Provider rejected the request");

        let screen = render_to_string(&dashboard(PathBuf::from(".")), &state);
        assert!(screen.contains("Error: Provider error: symbol not found"));
        assert!(!screen.contains("Closing Price"));
    }

    #[test]
    fn test_loaded_view_renders_metrics_and_tail() {
        let mut state = DashboardState::new(entries(), 2, 5);
        state.apply_fetch(Ok(series("MSFT", 30)));

        let screen = render_to_string(&dashboard(PathBuf::from(".")), &state);
        assert!(screen.contains("Closing Price"));
        assert!(screen.contains("$429.00"));
        assert!(screen.contains("Annual Change"));
        assert!(screen.contains("52-Week High"));
        assert!(screen.contains("$431.00"));
        assert!(screen.contains("52-Week Low"));
        assert!(screen.contains("$398.00"));
        assert!(screen.contains("2024-01-30"));
        assert!(!screen.contains("2024-01-25"));
        assert!(state.status.contains("Loaded 30 bars"));
    }

    #[test]
    fn test_transport_error_status() {
        let mut state = DashboardState::new(entries(), 0, 5);
        state.apply_fetch(Err(DataError::Connection("refused".into())));
        assert_eq!(state.status, "Request failed");
    }

    #[test]
    fn test_oversized_tail_rows_still_renders() {
        let mut state = DashboardState::new(entries(), 2, usize::from(u16::MAX));
        state.apply_fetch(Ok(series("MSFT", 30)));

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| dashboard(PathBuf::from(".")).ui(f, &state))
            .unwrap();
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let board = dashboard(dir.path().to_path_buf());
        let mut state = DashboardState::new(entries(), 0, 5);

        board.export(&mut state);
        assert_eq!(state.status, "Nothing to export");

        state.apply_fetch(Ok(series("AAPL", 3)));
        board.export(&mut state);
        assert!(state.status.starts_with("Saved"));
        assert!(dir.path().join("AAPL_dados_acoes").is_file());
    }
}
