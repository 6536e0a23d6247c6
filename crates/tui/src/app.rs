//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle: it fetches pages from a [`SnapshotSource`], turns
//! keyboard and pointer messages into drag events for the
//! [`DragController`], and renders the result.

use pipeboard_kanban::{BoardObserver, DragController, SnapshotSource};
use pipeboard_protocol::{Board, ItemId, Message, PageMeta, PageRequest, ViewerContext};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tracing::{debug, info, warn};

use crate::{
    AppState, Focus,
    event::{event_to_message, poll_event},
    layout::{BoardHit, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, hit_test, screen_layout},
    state::StatusMessage,
    terminal::AppTerminal,
    widgets::{Hints, render_board, render_detail_panel, render_help_overlay, render_status_bar},
};

/// The main application struct.
///
/// Owns the drag controller (and through it the board), the snapshot
/// source, and the view state.
pub struct App {
    controller: DragController,
    source: Box<dyn SnapshotSource>,
    /// The request that produced the current board.
    request: PageRequest,
    meta: PageMeta,
    viewer: ViewerContext,
    state: AppState,
    should_quit: bool,
    /// Last known terminal area, used for pointer hit-testing.
    last_area: Rect,
    /// Whether the header was shown in the last render (affects hit-testing).
    header_visible: bool,
    /// CV location to open after the current update.
    pending_url: Option<String>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("controller", &self.controller)
            .field("source", &self.source.describe())
            .field("request", &self.request)
            .field("meta", &self.meta)
            .field("viewer", &self.viewer)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Creates an application reading pages from `source`.
    ///
    /// The board starts empty; call [`App::refresh`] to load the first page.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipeboard_kanban::StaticSource;
    /// use pipeboard_protocol::{PageRequest, ViewerContext, dummy::demo_board};
    /// use pipeboard_tui::App;
    ///
    /// let mut app = App::new(
    ///     StaticSource::new(demo_board()),
    ///     PageRequest::default(),
    ///     ViewerContext::new("Sam"),
    /// );
    /// assert_eq!(app.board().total_cards(), 0);
    ///
    /// app.refresh();
    /// assert_eq!(app.board().total_cards(), 9);
    /// ```
    #[must_use]
    pub fn new(
        source: impl SnapshotSource + 'static,
        request: PageRequest,
        viewer: ViewerContext,
    ) -> Self {
        Self {
            controller: DragController::default(),
            source: Box::new(source),
            request,
            meta: PageMeta::default(),
            viewer,
            state: AppState::new(),
            should_quit: false,
            last_area: Rect::default(),
            header_visible: true,
            pending_url: None,
        }
    }

    /// Registers an observer for committed card moves.
    pub fn subscribe(&mut self, observer: impl BoardObserver + 'static) {
        self.controller.subscribe(observer);
    }

    /// Returns the view state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the board as currently displayed.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.controller.board()
    }

    /// Returns the request behind the current board.
    #[must_use]
    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    /// Returns the pagination metadata of the current board.
    #[must_use]
    pub fn meta(&self) -> &PageMeta {
        &self.meta
    }

    /// Returns `true` once the user asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Reloads the current page from the snapshot source.
    pub fn refresh(&mut self) {
        self.fetch(self.request);
    }

    /// Fetches `request` and replaces the board with the result.
    ///
    /// On failure the previous board stays in place and the error goes to
    /// the status bar and the log.
    fn fetch(&mut self, request: PageRequest) {
        match self.source.fetch(&request) {
            Ok(page) => {
                self.request = request;
                self.meta = page.meta;
                self.controller.initialize(page.data);
                self.state.clamp_selection(self.controller.board());
                info!(
                    page = self.meta.page,
                    page_count = self.meta.page_count,
                    total = self.meta.total,
                    "loaded applications"
                );
                self.state.set_status(StatusMessage::info(format!(
                    "Loaded page {}/{} from {}",
                    self.meta.page,
                    self.meta.page_count,
                    self.source.describe()
                )));
            }
            Err(err) => {
                warn!(error = %err, page = request.page, "failed to load applications");
                self.state.set_status(StatusMessage::error(format!(
                    "Failed to load applications: {err}"
                )));
            }
        }
    }

    /// Updates the application based on a message.
    ///
    /// When the help overlay is visible, any key dismisses it instead of
    /// performing its normal action. `Quit` always works. While a card is
    /// being dragged, keys drive the drag session.
    pub fn update(&mut self, msg: Message) {
        if msg.is_terminating() {
            self.should_quit = true;
            return;
        }

        if self.state.help_visible {
            if !matches!(msg, Message::PointerDrag { .. } | Message::PointerUp { .. }) {
                let _ = self.state.dismiss_help();
            }
            return;
        }

        if msg.is_pointer() {
            self.handle_pointer(&msg);
        } else if self.controller.is_dragging() {
            self.update_dragging(msg);
        } else {
            match self.state.focus {
                Focus::Board => self.update_board(msg),
                Focus::Detail => self.update_detail(msg),
            }
        }
    }

    fn update_board(&mut self, msg: Message) {
        let board = self.controller.board();
        match msg {
            Message::NavigateLeft => self.state.navigate_left(board),
            Message::NavigateRight => self.state.navigate_right(board),
            Message::NavigateUp => self.state.navigate_up(board),
            Message::NavigateDown => self.state.navigate_down(board),
            Message::Select => {
                let _ = self.state.open_detail(board);
            }
            Message::Escape => self.state.clear_selection(),
            Message::ToggleDrag => self.pick_up_selected(),
            Message::ToggleHelp => self.state.toggle_help(),
            Message::Refresh => self.refresh(),
            Message::NextPage => {
                if self.meta.has_next() {
                    self.fetch(self.request.with_page(self.request.page + 1));
                } else {
                    self.state
                        .set_status(StatusMessage::info("Already on the last page"));
                }
            }
            Message::PreviousPage => {
                if self.meta.has_previous() {
                    self.fetch(self.request.with_page(self.request.page - 1));
                } else {
                    self.state
                        .set_status(StatusMessage::info("Already on the first page"));
                }
            }
            Message::ToggleOrder => {
                let request = PageRequest {
                    page: 1,
                    order: self.request.order.toggled(),
                    ..self.request
                };
                self.fetch(request);
            }
            Message::OpenCv => self.open_selected_cv(),
            _ => {}
        }
    }

    fn update_detail(&mut self, msg: Message) {
        let board = self.controller.board();
        match msg {
            Message::Escape | Message::Back => self.state.close_detail(),
            // Browse the column without leaving the detail view.
            Message::NavigateUp => self.state.navigate_up(board),
            Message::NavigateDown => self.state.navigate_down(board),
            Message::OpenCv => self.open_selected_cv(),
            Message::ToggleHelp => self.state.toggle_help(),
            _ => {}
        }
    }

    /// Keyboard sensor while a card is being carried.
    fn update_dragging(&mut self, msg: Message) {
        match msg {
            Message::NavigateLeft => self.carry_to_neighbour(-1),
            Message::NavigateRight => self.carry_to_neighbour(1),
            Message::NavigateUp => self.hover(-1),
            Message::NavigateDown => self.hover(1),
            Message::ToggleDrag | Message::Select => {
                let over = self.controller.session().and_then(|s| s.over.clone());
                self.finish_drag(over);
            }
            Message::Escape => self.cancel_drag(),
            Message::ToggleHelp => self.state.toggle_help(),
            _ => {}
        }
    }

    /// Starts a keyboard drag of the selected card.
    fn pick_up_selected(&mut self) {
        let Some(card) = self.state.selected_card(self.controller.board()) else {
            self.state
                .set_status(StatusMessage::info("Select an application to move"));
            return;
        };
        let (id, name) = (card.id.clone(), card.applicant.full_name.clone());

        if self.controller.drag_start(&id) {
            self.state.hover_card = None;
            self.state
                .set_status(StatusMessage::info(format!("Moving {name}")));
        }
    }

    /// Drags the carried card over the column `step` places away.
    fn carry_to_neighbour(&mut self, step: isize) {
        let board = self.controller.board();
        let Some(current) = self
            .controller
            .active_column()
            .and_then(|column| board.column_index(&column.id))
        else {
            // The dragged card is no longer on the board.
            self.cancel_drag();
            return;
        };
        let Some(target) = current
            .checked_add_signed(step)
            .and_then(|i| board.columns.get(i))
            .map(|column| column.id.clone())
        else {
            return;
        };

        self.controller.drag_over(Some(&target));
        self.state.hover_card = None;
        self.follow_active_card();
    }

    /// Moves the keyboard drop target within the carried card's column.
    fn hover(&mut self, delta: isize) {
        let target = self
            .state
            .move_hover(self.controller.board(), delta)
            .map(|card| card.id.clone());
        if target.is_some() {
            self.controller.drag_over(target.as_ref());
        }
    }

    /// Ends the drag session, dropping on `over`.
    fn finish_drag(&mut self, over: Option<ItemId>) {
        let carried = self
            .controller
            .active_card()
            .map(|card| (card.id.clone(), card.applicant.full_name.clone()));
        let origin = self
            .controller
            .session()
            .map(|session| session.origin_column.clone());

        self.controller.drag_end(over.as_ref());
        self.state.hover_card = None;

        let Some((card_id, name)) = carried else {
            return;
        };
        let board = self.controller.board();
        if !self.state.select_card(board, &card_id) {
            self.state.clamp_selection(board);
            return;
        }
        if let Some(column) = board.find_column_containing(&card_id) {
            let text = if origin.as_ref() == Some(&column.id) {
                format!("Dropped {name} in {}", column.title)
            } else {
                format!("Moved {name} to {}", column.title)
            };
            self.state.set_status(StatusMessage::info(text));
        }
    }

    /// Ends the drag session without a target. Live moves stay applied.
    fn cancel_drag(&mut self) {
        let card_id = self.controller.active_card().map(|card| card.id.clone());
        self.controller.drag_cancel();
        self.state.hover_card = None;

        let board = self.controller.board();
        if card_id.is_none_or(|id| !self.state.select_card(board, &id)) {
            self.state.clamp_selection(board);
        }
        self.state.set_status(StatusMessage::info("Move cancelled"));
    }

    /// Keeps the selection on the dragged card as it changes column.
    fn follow_active_card(&mut self) {
        if let Some(id) = self.controller.active_card().map(|card| card.id.clone()) {
            let _ = self.state.select_card(self.controller.board(), &id);
        }
    }

    /// Pointer sensor: press starts a drag, motion drags over, release drops.
    ///
    /// Press and release on the same card without leaving its column is a
    /// click and opens the detail view.
    fn handle_pointer(&mut self, msg: &Message) {
        if self.state.focus != Focus::Board {
            return;
        }
        let (Message::PointerDown { column: x, row: y }
        | Message::PointerDrag { column: x, row: y }
        | Message::PointerUp { column: x, row: y }) = *msg
        else {
            return;
        };

        let area = screen_layout(self.last_area, self.header_visible).content;
        let board = self.controller.board();
        let dragging = self.controller.active_card().map(|card| &card.id);
        let hit = hit_test(board, &self.state.board_view(dragging), area, x, y);
        let target = hit.and_then(|hit| hit.item_id(board)).cloned();
        debug!(x, y, ?hit, "pointer event");

        match msg {
            Message::PointerDown { .. } => match hit {
                Some(BoardHit::Card { column, index }) => {
                    self.state.selected_column = column;
                    self.state.selected_card = Some(index);
                    self.state.hover_card = None;
                    if let Some(id) = target {
                        let _ = self.controller.drag_start(&id);
                    }
                }
                Some(BoardHit::Column(column)) => {
                    self.state.selected_column = column;
                    self.state.clear_selection();
                }
                None => {}
            },
            Message::PointerDrag { .. } => {
                if !self.controller.is_dragging() {
                    return;
                }
                self.controller.drag_over(target.as_ref());
                self.follow_active_card();
                self.state.hover_card = match hit {
                    Some(BoardHit::Card { column, index })
                        if column == self.state.selected_column
                            && self.state.selected_card != Some(index) =>
                    {
                        Some(index)
                    }
                    _ => None,
                };
            }
            Message::PointerUp { .. } => {
                let Some(session) = self.controller.session() else {
                    return;
                };
                let card_id = session.item.id().clone();
                let clicked = target.as_ref() == Some(&card_id)
                    && self
                        .controller
                        .active_column()
                        .is_some_and(|column| column.id == session.origin_column);

                if clicked {
                    self.controller.drag_end(None);
                    let board = self.controller.board();
                    if self.state.select_card(board, &card_id) {
                        let _ = self.state.open_detail(board);
                    }
                } else {
                    self.finish_drag(target);
                }
            }
            _ => {}
        }
    }

    /// Queues the selected applicant's CV for opening.
    fn open_selected_cv(&mut self) {
        let Some(card) = self.state.selected_card(self.controller.board()) else {
            return;
        };
        match card
            .applicant
            .cv_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
        {
            Some(url) => self.pending_url = Some(url.to_string()),
            None => {
                let text = format!("{} has no CV on file", card.applicant.full_name);
                self.state.set_status(StatusMessage::info(text));
            }
        }
    }

    fn open_url(&mut self, url: &str) {
        match open::that_detached(url) {
            Ok(()) => info!(url, "opened CV"),
            Err(err) => {
                warn!(url, error = %err, "failed to open CV");
                self.state
                    .set_status(StatusMessage::error(format!("Could not open CV: {err}")));
            }
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - Below the minimum dimensions, shows a "terminal too small" message.
    /// - Below `MIN_HEIGHT_WITH_HEADER`, hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            Self::render_terminal_too_small(frame, area);
            return;
        }

        self.header_visible = area.height >= MIN_HEIGHT_WITH_HEADER;
        let layout = screen_layout(area, self.header_visible);

        if let Some(header) = layout.header {
            self.render_header(frame, header);
        }
        self.render_content(frame, layout.content);

        let hints = if self.controller.is_dragging() {
            Hints::Dragging
        } else if self.state.focus == Focus::Detail {
            Hints::Detail
        } else {
            Hints::Board
        };
        render_status_bar(
            self.state.status.as_ref(),
            hints,
            layout.status,
            frame.buffer_mut(),
        );

        if self.state.help_visible {
            render_help_overlay(area, frame.buffer_mut());
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        // Center the message vertically
        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pipeboard_kanban::StaticSource;
    /// use pipeboard_protocol::{PageRequest, ViewerContext, dummy::demo_board};
    /// use pipeboard_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let source = StaticSource::new(demo_board());
    ///     let mut app = App::new(source, PageRequest::default(), ViewerContext::default());
    ///     app.refresh();
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event)
            {
                self.update(msg);
            }

            if let Some(url) = self.pending_url.take() {
                self.open_url(&url);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Renders the header bar: title, viewer, page indicator and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let page = format!(
            "page {}/{} · {}",
            self.meta.page,
            self.meta.page_count,
            self.request.order.display_name()
        );
        let page_width = u16::try_from(page.chars().count() + 3).unwrap_or(u16::MAX);

        let [title_area, page_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(page_width),
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "pipeboard",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("Applications", Style::default().fg(Color::White)),
            Span::styled(
                format!("  {}", self.viewer.display_label()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        frame.render_widget(title, title_area);

        frame.render_widget(
            Paragraph::new(Span::styled(page, Style::default().fg(Color::White)))
                .alignment(Alignment::Right),
            page_area,
        );

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }

    /// Renders the detail view if open, the board otherwise.
    fn render_content(&self, frame: &mut Frame, area: Rect) {
        let board = self.controller.board();

        if self.state.focus == Focus::Detail
            && let Some(card) = self.state.selected_card(board)
        {
            let stage = self
                .state
                .focused_column(board)
                .map_or("", |column| column.title.as_str());
            render_detail_panel(card, stage, area, frame.buffer_mut());
            return;
        }

        let dragging = self.controller.active_card().map(|card| &card.id);
        render_board(
            board,
            &self.state.board_view(dragging),
            area,
            frame.buffer_mut(),
        );
    }
}
