//! Terminal showcase: setup, draw pass, and event loop

use super::events::{Action, poll_and_handle};
use super::state::ShowcaseView;
use super::theme::Theme;
use super::widgets::{
    AssetCard, AssetModal, CategoryBar, EmptyState, HelpBar, KeyHint, SearchBar, chip_areas,
    grid_columns, grid_layout, panel_area, rows_that_fit,
};
use crate::hub::{Hub, HubState};
use crate::ui::error::{Result, UiError};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Longest wait for input when no exit timer is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

const TAGLINE: &str = "Frameworks, media, collaborations and more";
const SEARCH_PLACEHOLDER: &str = "Search assets...";

/// Interactive showcase runner
pub struct Showcase {
    theme: Theme,
}

impl Showcase {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run the showcase until the user quits
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal cannot be set up or drawn to.
    pub fn run(&self, state: HubState) -> Result<()> {
        let query = state.filter().query.clone();
        let mut hub = Hub::new(state, ShowcaseView::new(query));

        let mut terminal = Self::setup_terminal()?;

        // Run the event loop, ensuring cleanup happens
        let result = self.run_loop(&mut terminal, &mut hub);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        hub: &mut Hub<ShowcaseView>,
    ) -> Result<()> {
        loop {
            hub.tick(Instant::now());

            let view = hub.view_mut();
            terminal.draw(|frame| render(frame, view, &self.theme))?;

            let timeout = hub.next_deadline().map_or(IDLE_POLL, |deadline| {
                deadline.saturating_duration_since(Instant::now()).min(IDLE_POLL)
            });

            match poll_and_handle(hub.view_mut(), timeout)? {
                Action::Quit => return Ok(()),
                Action::Dispatch(event) => hub.dispatch(event, Instant::now()),
                Action::OpenLink(url) => {
                    if let Err(e) = open_link(&url) {
                        tracing::warn!(error = %e, "link could not be opened");
                        hub.view_mut().status = Some(e.to_string());
                    }
                }
                Action::Continue | Action::Ignored => {}
            }
        }
    }
}

impl Default for Showcase {
    fn default() -> Self {
        Self::new()
    }
}

/// Open `url` in the system browser
///
/// # Errors
///
/// Returns `UiError::LinkError` if no browser could be launched.
pub fn open_link(url: &str) -> Result<()> {
    tracing::info!(url, "opening link");
    open::that_detached(url).map_err(|source| UiError::LinkError {
        url: url.to_string(),
        source,
    })
}

/// Draw the whole showcase and record hit areas for the mouse
pub fn render(frame: &mut Frame, view: &mut ShowcaseView, theme: &Theme) {
    let area = frame.area();
    let [header, search, chips, grid, help] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("AssetHub", theme.title_style())),
            Line::from(Span::styled(TAGLINE, theme.dimmed_style())),
        ]),
        header,
    );

    let mounted = view.is_modal_mounted();
    frame.render_widget(
        SearchBar::new(&view.query, view.query_cursor, SEARCH_PLACEHOLDER, theme).focused(!mounted),
        search,
    );

    frame.render_widget(
        CategoryBar::new(&view.categories, &view.active_category, theme),
        chips,
    );
    view.hits.chips = view
        .categories
        .iter()
        .cloned()
        .zip(chip_areas(&view.categories, CategoryBar::inner(chips)))
        .collect();

    render_grid(frame, view, theme, grid);

    let hints: Vec<KeyHint> = if mounted {
        HelpBar::modal_hints()
    } else {
        HelpBar::grid_hints()
    };
    frame.render_widget(
        HelpBar::new(&hints, theme).with_status(view.status.as_deref()),
        help,
    );

    view.hits.panel = None;
    if let Some(modal) = &view.modal {
        let widget = AssetModal::new(&modal.asset, view.modal_focus, theme)
            .scroll(view.modal_scroll, view.modal_follow_focus)
            .closing(modal.closing);
        let scroll = widget.fit_scroll(area);
        frame.render_widget(widget, area);
        view.modal_scroll = scroll;
        view.hits.panel = Some(panel_area(area));
    }
}

fn render_grid(frame: &mut Frame, view: &mut ShowcaseView, theme: &Theme, area: Rect) {
    view.hits.cards.clear();
    if view.cards.is_empty() {
        frame.render_widget(EmptyState::new(&view.query, theme), area);
        return;
    }

    let columns = grid_columns(area.width);
    view.adjust_scroll(columns, rows_that_fit(area));
    let first_card = view.grid_scroll * columns;
    let areas = grid_layout(area, view.cards.len(), columns, view.grid_scroll);
    let mounted = view.is_modal_mounted();

    for (offset, card_area) in areas.into_iter().enumerate() {
        let index = first_card + offset;
        let Some(asset) = view.cards.get(index) else {
            break;
        };
        let selected = !mounted && index == view.grid_cursor;
        frame.render_widget(AssetCard::new(asset, selected, theme), card_area);
        view.hits.cards.push((asset.id, card_area));
    }
}
