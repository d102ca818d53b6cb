// Portfolio - Terminal UI
// Tab-driven card browser: the active tab picks one of the three fixed
// datasets, the recommendations strip is always visible.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;

use crate::cards::{cards_for, Card};
use crate::data::PortfolioData;
use crate::tabs::{PageState, Tab};

pub struct App {
    pub data: PortfolioData,
    pub page: PageState,
    pub cards: Vec<Card>,
    pub state: TableState,
    pub show_detail: bool,
}

impl App {
    pub fn new(data: PortfolioData) -> Self {
        let page = PageState::new();
        let cards = cards_for(page.active_tab(), &data);

        let mut state = TableState::default();
        if !cards.is_empty() {
            state.select(Some(0));
        }

        Self {
            data,
            page,
            cards,
            state,
            show_detail: false,
        }
    }

    /// Switch tabs and rebuild the card list. Selection resets to the
    /// first card.
    pub fn set_tab(&mut self, tab: Tab) {
        self.page.set_tab(tab);
        self.cards = cards_for(tab, &self.data);

        if self.cards.is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(0));
        }
    }

    pub fn next_tab(&mut self) {
        self.set_tab(self.page.active_tab().next());
    }

    pub fn previous_tab(&mut self) {
        self.set_tab(self.page.active_tab().previous());
    }

    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.state.selected().and_then(|i| self.cards.get(i))
    }

    pub fn next(&mut self) {
        let len = self.cards.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.cards.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Enter => app.toggle_detail(),
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_tab();
                    } else {
                        app.next_tab();
                    }
                }
                KeyCode::Char('1') => app.set_tab(Tab::Built),
                KeyCode::Char('2') => app.set_tab(Tab::Learnt),
                KeyCode::Char('3') => app.set_tab(Tab::Taught),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Home => {
                    if !app.cards.is_empty() {
                        app.state.select(Some(0));
                    }
                }
                KeyCode::End => {
                    if !app.cards.is_empty() {
                        app.state.select(Some(app.cards.len() - 1));
                    }
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with tab navigation
            Constraint::Min(0),    // Card list
            Constraint::Length(5), // Recommendations strip (always shown)
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    // Card list with optional split for the detail panel
    if app.show_detail {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Card list
                Constraint::Percentage(40), // Detail panel
            ])
            .split(chunks[1]);

        render_cards(f, content_chunks[0], app);
        render_detail_panel(f, content_chunks[1], app);
    } else {
        render_cards(f, chunks[1], app);
    }

    render_recommendations(f, chunks[2], app);
    render_status_bar(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut tab_spans = vec![];
    for (i, tab) in Tab::ALL.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *tab == app.page.active_tab() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(tab.title(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        app.data.profile.name.clone(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ));
    tab_spans.push(Span::raw("  "));
    tab_spans.push(Span::styled(
        app.data.profile.email.clone(),
        Style::default().fg(Color::Cyan),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_cards(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["Title", "Info", "Tags"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.cards.iter().map(|card| {
        let cells = vec![
            Cell::from(card.heading.clone()),
            Cell::from(truncate(&card.subline, 34)),
            Cell::from(truncate(&card.tags.join(", "), 44)).style(Style::default().fg(Color::Cyan)),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(34),
            Constraint::Length(36),
            Constraint::Min(30),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(format!(" {} ", app.page.active_tab().title())),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_recommendations(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![];
    for rec in &app.data.recommendations {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", rec.name),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("— {} ", rec.title), Style::default().fg(Color::DarkGray)),
            Span::styled(rec.pdf_link.clone(), Style::default().fg(Color::Green)),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Recommendations "),
    );

    f.render_widget(panel, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.state.selected().map(|i| i + 1).unwrap_or(0);
    let total = app.cards.len();

    let status_spans = vec![
        Span::styled(
            format!(" Card: {}/{} ", selected, total),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" | "),
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" Switch | "),
        Span::styled("1-3", Style::default().fg(Color::Yellow)),
        Span::raw(" Jump | "),
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Nav | "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" Details | "),
        Span::styled("q", Style::default().fg(Color::Red)),
        Span::raw(" Quit"),
    ];

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn render_detail_panel(f: &mut Frame, area: Rect, app: &App) {
    let card = match app.selected_card() {
        Some(c) => c,
        None => {
            let no_selection = Paragraph::new("No card selected").block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Card Details "),
            );
            f.render_widget(no_selection, area);
            return;
        }
    };

    let mut content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Title: ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(&card.heading),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Info: ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(&card.subline),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {} ", card.tag_label),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(card.tags.join(", "), Style::default().fg(Color::Green)),
        ]),
    ];

    if let Some(impact) = &card.impact {
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled(
                "  Impact: ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(impact.as_str()),
        ]));
    }

    if let Some(link) = &card.link {
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled(
                "  Link: ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(link.as_str(), Style::default().fg(Color::Green)),
        ]));
    }

    content.push(Line::from(""));
    content.push(Line::from("  ─────────────────────────────────────"));
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            wrap_text(&card.description, 35),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ),
    ]));
    content.push(Line::from(""));
    content.push(Line::from(vec![Span::styled(
        "  Press Enter to close",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )]));

    let detail_panel = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Card Details "),
    );

    f.render_widget(detail_panel, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

fn wrap_text(text: &str, width: usize) -> String {
    if text.len() <= width {
        text.to_string()
    } else {
        let mut result = String::new();
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut current_line = String::new();

        for word in words {
            if current_line.len() + word.len() + 1 <= width {
                if !current_line.is_empty() {
                    current_line.push(' ');
                }
                current_line.push_str(word);
            } else {
                if !result.is_empty() {
                    result.push_str("\n  ");
                }
                result.push_str(&current_line);
                current_line = word.to_string();
            }
        }

        if !current_line.is_empty() {
            if !result.is_empty() {
                result.push_str("\n  ");
            }
            result.push_str(&current_line);
        }

        result
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_starts_on_built_with_first_card_selected() {
        let app = App::new(PortfolioData::new());

        assert_eq!(app.page.active_tab(), Tab::Built);
        assert_eq!(app.state.selected(), Some(0));
        assert_eq!(app.cards.len(), app.data.projects.len());
    }

    #[test]
    fn test_tab_switch_rebuilds_cards_and_resets_selection() {
        let mut app = App::new(PortfolioData::new());
        app.next();
        assert_eq!(app.state.selected(), Some(1));

        app.set_tab(Tab::Learnt);

        assert_eq!(app.page.active_tab(), Tab::Learnt);
        assert_eq!(app.state.selected(), Some(0));
        assert_eq!(app.cards.len(), app.data.learnings.len());
        assert_eq!(app.cards[0].heading, app.data.learnings[0].title);
    }

    #[test]
    fn test_next_tab_cycles_back_to_built() {
        let mut app = App::new(PortfolioData::new());
        let first_cards = app.cards.clone();

        app.next_tab();
        app.next_tab();
        app.next_tab();

        assert_eq!(app.page.active_tab(), Tab::Built);
        assert_eq!(app.cards, first_cards);
    }

    #[test]
    fn test_selection_wraps_around() {
        let mut app = App::new(PortfolioData::new());
        let last = app.cards.len() - 1;

        app.previous();
        assert_eq!(app.state.selected(), Some(last));

        app.next();
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_selected_card() {
        let mut app = App::new(PortfolioData::new());

        assert_eq!(
            app.selected_card().map(|c| c.heading.as_str()),
            Some("Local Bookstore Marketplace")
        );

        app.next();
        assert_eq!(
            app.selected_card().map(|c| c.heading.clone()),
            Some(app.data.projects[1].title.clone())
        );
    }

    #[test]
    fn test_empty_dataset_clears_selection() {
        let mut data = PortfolioData::new();
        data.teachings.clear();

        let mut app = App::new(data);
        app.set_tab(Tab::Taught);

        assert_eq!(app.state.selected(), None);
        assert!(app.selected_card().is_none());

        // Navigation on an empty list is a no-op
        app.next();
        app.previous();
        assert_eq!(app.state.selected(), None);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer string", 10), "a longe...");
    }
}
