//! Application loop and screen routing.
//!
//! One frame per ~50ms: timers tick first (draft debounce, transition
//! phases, tour target search), then the frame is drawn, then input is
//! polled. All engine timers are invalidated on the way out so nothing
//! fires after teardown.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Padding, Paragraph};
use ratatui::{DefaultTerminal, Frame};

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::draft::{DebounceWindow, DraftStore};
use crate::model::{StepData, StepId, ViewContext};
use crate::sequencer::Sequencer;
use crate::storage::Storage;
use crate::tour::locator::TargetRegistry;
use crate::tour::{TourSession, content};
use crate::transition::TransitionCoordinator;

use super::overlay;
use super::screens::{
    AgentScreen, PlanningScreen, ProfileScreen, TeamScreen, render_completion, render_welcome,
};

/// Which screen is currently displayed; form screens carry their state.
enum Screen {
    Welcome,
    Profile(ProfileScreen),
    Team(TeamScreen),
    Agent(AgentScreen),
    Planning(PlanningScreen),
    Completion,
}

/// Runs the onboarding TUI until the user quits or finishes.
pub fn run(config: &Config, storage: &Storage) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, config, storage);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    config: &Config,
    storage: &Storage,
) -> io::Result<()> {
    let clock = SystemClock;
    let sequencer = Sequencer::load_or_start(storage).map_err(io::Error::other)?;
    let mut app = App::new(config, sequencer, DraftStore::new(storage));

    loop {
        let now = clock.now();
        app.tick(now);

        terminal.draw(|frame| app.render(frame, now))?;

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.on_key(key, clock.now());
        }

        if app.quit {
            break;
        }
    }

    // Teardown: a pending keystroke must not be lost, and no timer may
    // fire into a dead context.
    app.drafts.flush_all();
    app.transition.cancel();
    Ok(())
}

struct App<'a> {
    config: &'a Config,
    sequencer: Sequencer<'a>,
    drafts: DraftStore<'a>,
    transition: TransitionCoordinator,
    registry: TargetRegistry,
    tour: Option<TourSession>,
    screen: Screen,
    shown_step: StepId,
    quit: bool,
}

impl<'a> App<'a> {
    fn new(config: &'a Config, sequencer: Sequencer<'a>, drafts: DraftStore<'a>) -> Self {
        let mut app = Self {
            config,
            sequencer,
            drafts,
            transition: TransitionCoordinator::new(),
            registry: TargetRegistry::new(),
            tour: None,
            screen: Screen::Welcome,
            shown_step: StepId::Welcome,
            quit: false,
        };
        app.shown_step = app.sequencer.current_step();
        app.screen = app.screen_for(app.shown_step);
        app
    }

    // ── Timers ──

    fn tick(&mut self, now: Instant) {
        self.drafts.tick(now);

        if let Some(from) = self.transition.tick(now) {
            self.sequencer.complete_step(from);
            self.sync_screen();
        }

        if let Some(tour) = self.tour.as_mut() {
            tour.poll(&mut self.registry, now);
        }
    }

    // ── Screen routing ──

    /// Builds the screen for a step, prefilled from committed data or,
    /// failing that, the step's draft.
    fn screen_for(&self, step: StepId) -> Screen {
        let initial = self
            .sequencer
            .step_data(step)
            .cloned()
            .or_else(|| self.drafts.load(&step.draft_key()));
        match step {
            StepId::Welcome => Screen::Welcome,
            StepId::ProfileSetup => Screen::Profile(ProfileScreen::new(initial.as_ref())),
            StepId::TeamCreation => Screen::Team(TeamScreen::new(initial.as_ref())),
            StepId::FirstAgent => Screen::Agent(AgentScreen::new(initial.as_ref())),
            StepId::PlanningTour => Screen::Planning(PlanningScreen::new(
                self.config.planning_view.to_domain(),
                initial.as_ref(),
            )),
            StepId::Completion => Screen::Completion,
        }
    }

    /// Rebuilds the screen after the current step changed underneath it.
    fn sync_screen(&mut self) {
        let current = self.sequencer.current_step();
        if current != self.shown_step {
            if let Some(tour) = self.tour.take() {
                tour.end(&mut self.registry);
            }
            self.shown_step = current;
            self.screen = self.screen_for(current);
        }
    }

    // ── Input ──

    fn on_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    self.quit = true;
                }
                // Step navigation; the guard re-validates every jump.
                KeyCode::Char('p') => self.navigate_relative(false),
                KeyCode::Char('n') => self.navigate_relative(true),
                KeyCode::Char('s') => self.skip_current(),
                _ => {}
            }
            return;
        }

        // The animation gates input: the next screen must not react
        // before it has arrived.
        if self.transition.is_active() {
            return;
        }

        if self.tour.is_some() {
            self.on_tour_key(key, now);
            return;
        }

        match &mut self.screen {
            Screen::Welcome => match key.code {
                KeyCode::Enter => self.commit_current(None, now),
                KeyCode::Esc => self.quit = true,
                _ => {}
            },
            Screen::Profile(form) => match key.code {
                KeyCode::Enter => {
                    if form.is_ready() {
                        let data = form.data();
                        self.commit_current(Some(data), now);
                    }
                }
                KeyCode::Tab => form.focus_next(),
                KeyCode::BackTab => form.focus_prev(),
                KeyCode::Char(c) => {
                    if form.on_char(c) {
                        self.save_draft_for_current(now);
                    }
                }
                KeyCode::Backspace => {
                    if form.on_backspace() {
                        self.save_draft_for_current(now);
                    }
                }
                _ => {}
            },
            Screen::Team(form) => match key.code {
                KeyCode::Enter => {
                    if form.is_ready() {
                        let data = form.data();
                        self.commit_current(Some(data), now);
                    }
                }
                KeyCode::Tab => form.focus_next(),
                KeyCode::BackTab => form.focus_prev(),
                KeyCode::Char(c) => {
                    if form.on_char(c) {
                        self.save_draft_for_current(now);
                    }
                }
                KeyCode::Backspace => {
                    if form.on_backspace() {
                        self.save_draft_for_current(now);
                    }
                }
                _ => {}
            },
            Screen::Agent(form) => match key.code {
                KeyCode::Enter => {
                    if form.is_ready() {
                        let data = form.data();
                        self.commit_current(Some(data), now);
                    }
                }
                KeyCode::Tab => form.focus_next(),
                KeyCode::BackTab => form.focus_prev(),
                KeyCode::Char(c) => {
                    if form.on_char(c) {
                        self.save_draft_for_current(now);
                    }
                }
                KeyCode::Backspace => {
                    if form.on_backspace() {
                        self.save_draft_for_current(now);
                    }
                }
                _ => {}
            },
            Screen::Planning(planning) => match key.code {
                KeyCode::Char('t') => {
                    // Re-invoking while already active is a no-op.
                    if self.tour.is_none() {
                        self.tour = TourSession::start(ViewContext::Planning, planning.mode(), now);
                        planning.mark_tour_started();
                        self.save_draft_for_current(now);
                    }
                }
                KeyCode::Enter => {
                    let data = planning.data();
                    self.commit_current(Some(data), now);
                }
                KeyCode::Esc => self.quit = true,
                _ => {}
            },
            Screen::Completion => match key.code {
                KeyCode::Enter => {
                    // Dismissal archives the record; drafts go with it.
                    for step in StepId::ALL {
                        self.drafts.clear(&step.draft_key());
                    }
                    self.sequencer.dismiss();
                    self.quit = true;
                }
                KeyCode::Esc => self.quit = true,
                _ => {}
            },
        }
    }

    fn on_tour_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('n') | KeyCode::Enter => {
                if let Some(tour) = self.tour.as_mut()
                    && !tour.next(&mut self.registry, now)
                {
                    self.tour = None;
                }
            }
            KeyCode::Char('b') => {
                if let Some(tour) = self.tour.as_mut() {
                    tour.back(&mut self.registry, now);
                }
            }
            KeyCode::Esc => {
                if let Some(tour) = self.tour.take() {
                    tour.end(&mut self.registry);
                }
            }
            _ => {}
        }
    }

    // ── Engine calls ──

    /// Commits the current step: folds submitted data into the record,
    /// clears the step's draft, and either hands off to the transition
    /// coordinator or (reduced motion, revisits) completes immediately.
    fn commit_current(&mut self, data: Option<StepData>, now: Instant) {
        let step = self.sequencer.current_step();
        if step.is_terminal() {
            return;
        }
        if let Some(data) = data {
            self.sequencer.save_step_data(data);
            self.drafts.clear(&step.draft_key());
        }

        let will_advance = !self.sequencer.is_completed(step);
        if will_advance
            && !self.config.reduce_motion
            && let Some(next) = step.next()
        {
            self.transition.advance(step, next, now);
        } else {
            self.sequencer.complete_step(step);
            self.sync_screen();
        }
    }

    /// Skip is complete-without-validation; it lands immediately, no
    /// animation.
    fn skip_current(&mut self) {
        let step = self.sequencer.current_step();
        if step.is_terminal() || self.transition.is_active() {
            return;
        }
        self.sequencer.skip_step(step);
        self.sync_screen();
    }

    fn navigate_relative(&mut self, forward: bool) {
        if self.transition.is_active() {
            return;
        }
        let index = self.sequencer.current_step().index();
        let target = if forward {
            index.checked_add(1)
        } else {
            index.checked_sub(1)
        };
        if let Some(step) = target.and_then(|i| StepId::ALL.get(i)) {
            self.sequencer.go_to_step(*step);
            self.sync_screen();
        }
    }

    /// Schedules a field-window draft save of the current form value.
    fn save_draft_for_current(&mut self, now: Instant) {
        let step = self.sequencer.current_step();
        let data = match &self.screen {
            Screen::Profile(form) => Some(form.data()),
            Screen::Team(form) => Some(form.data()),
            Screen::Agent(form) => Some(form.data()),
            Screen::Planning(planning) => Some(planning.data()),
            Screen::Welcome | Screen::Completion => None,
        };
        if let Some(data) = data {
            let window = if matches!(self.screen, Screen::Planning(_)) {
                DebounceWindow::Form
            } else {
                DebounceWindow::Field
            };
            self.drafts.save(&step.draft_key(), &data, window, now);
        }
    }

    // ── Rendering ──

    fn render(&mut self, frame: &mut Frame, now: Instant) {
        // The registry is this frame's scene graph; panels re-register
        // as they draw.
        self.registry.clear_targets();

        let area = frame.area();
        let rows = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);
        let cols =
            Layout::horizontal([Constraint::Length(26), Constraint::Min(0)]).split(rows[0]);

        self.render_rail(frame, cols[0]);
        let body = cols[1];

        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(body);
        self.render_title(frame, chunks[0]);

        match &self.screen {
            Screen::Welcome => render_welcome(frame, chunks[1]),
            Screen::Profile(form) => form.render(frame, chunks[1]),
            Screen::Team(form) => form.render(frame, chunks[1]),
            Screen::Agent(form) => form.render(frame, chunks[1]),
            Screen::Planning(planning) => planning.render(frame, chunks[1], &mut self.registry),
            Screen::Completion => render_completion(frame, chunks[1], self.sequencer.step_progress()),
        }

        if let Some(view) = self.transition.current(now) {
            overlay::render_transition(frame, body, view);
        }
        if let Some(tour) = &self.tour {
            overlay::render_tooltip(frame, tour, &self.registry);
        }

        self.render_help(frame, rows[1]);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let step = self.sequencer.current_step();
        let title = Paragraph::new(Line::from(vec![Span::styled(
            step.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )]))
        .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
        frame.render_widget(title, area);
    }

    fn render_rail(&self, frame: &mut Frame, area: Rect) {
        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let done = Style::default().fg(Color::Green);
        let active = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let current = self.sequencer.current_step();
        let items: Vec<ListItem> = StepId::ALL
            .iter()
            .map(|step| {
                let (mark, style) = if *step == current {
                    ("› ", active)
                } else if self.sequencer.is_completed(*step) {
                    ("✓ ", done)
                } else if self.sequencer.can_navigate_to(*step) {
                    ("○ ", normal)
                } else {
                    ("  ", muted)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(mark, style),
                    Span::styled(step.title(), style),
                ]))
            })
            .collect();

        let progress = self.sequencer.step_progress();
        let block = Block::default()
            .padding(Padding::new(2, 1, 1, 0))
            .title_bottom(Line::from(Span::styled(
                format!(" {}% ", progress.percentage.round()),
                muted,
            )));
        frame.render_widget(List::new(items).block(block), area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let muted = Style::default().fg(Color::DarkGray);
        let keys = if self.tour.is_some() {
            " n next  b back  esc end tour"
        } else {
            match self.screen {
                Screen::Welcome => " ⏎ begin  ^n/^p steps  esc quit",
                Screen::Planning(_) => " t tour  ⏎ continue  ^s skip  ^q quit",
                Screen::Completion => " ⏎ finish  esc quit",
                _ => " tab field  ⏎ submit  ^s skip  ^n/^p steps  ^q quit",
            }
        };
        let text = format!("{keys}  ·  {}", content::help_text(self.sequencer.current_step()));
        frame.render_widget(Paragraph::new(Line::from(Span::styled(text, muted))), area);
    }
}
