// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Demo host.
//!
//! A minimal embedding of the edge-creation tool: a fixed strip of elements,
//! arrow keys as the pointer, Enter/Esc as primary/secondary release, and a
//! validator thread with artificial latency so superseding is observable.
//! One sync event loop owns the tool and drains check outcomes; nothing here
//! is shared across threads except the channels.

use std::collections::BTreeMap;
use std::error::Error;
use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::model::{
    Connectable, EdgeKindHint, EdgeKindId, EdgeKindRegistry, Element, ElementId, Validity,
};
use crate::protocol::{Action, CheckEdgeRequest, CheckEdgeResponse};
use crate::remote::{spawn_validator, ChannelAuthority, CheckOutcome};
use crate::tool::EdgeCreationTool;

const HOVER_COLOR: Color = Color::Yellow;
const VALID_COLOR: Color = Color::LightGreen;
const INVALID_COLOR: Color = Color::LightRed;
const PENDING_COLOR: Color = Color::Cyan;
const SOURCE_COLOR: Color = Color::Green;
const LOG_LINES: usize = 8;

/// Demo host settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoOptions {
    /// Validator latency per check.
    pub latency: Duration,
    /// Start with continuous (chain-drawing) mode on.
    pub continuous: bool,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(250),
            continuous: false,
        }
    }
}

/// Runs the interactive demo.
pub fn run(options: DemoOptions) -> Result<(), Box<dyn Error>> {
    let elements = demo_elements();
    let kinds_by_id: BTreeMap<String, String> = elements
        .iter()
        .map(|element| (element.id().as_str().to_owned(), element.kind().to_owned()))
        .collect();

    let (authority, mut outcomes, validator) =
        spawn_validator(options.latency, move |request| {
            Ok(CheckEdgeResponse {
                is_valid: demo_verdict(&kinds_by_id, request),
            })
        });

    let mut app = App::new(elements, demo_registry(), authority);
    app.continuous = options.continuous;

    let mut terminal = TerminalSession::new()?;
    while !app.should_quit {
        while let Ok(outcome) = outcomes.try_recv() {
            app.on_check_outcome(outcome);
        }
        terminal.draw(|frame| draw(frame, &app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }
    }
    drop(app);
    drop(terminal);
    validator.join().map_err(|_| "validator thread panicked")?;
    Ok(())
}

/// The element strip: id, kind, accepted roles.
fn demo_elements() -> Vec<Element> {
    vec![
        Element::new("order-desk".parse().expect("id"), "business-actor"),
        Element::new("crm".parse().expect("id"), "application-component"),
        Element::new("billing".parse().expect("id"), "application-component"),
        Element::new("db-node".parse().expect("id"), "node"),
        Element::new("remark".parse().expect("id"), "note").with_roles(true, false),
    ]
}

fn demo_registry() -> EdgeKindRegistry {
    let mut registry = EdgeKindRegistry::new();
    registry.register("association".parse().expect("kind"), EdgeKindHint { dynamic: false });
    registry.register("note-attachment".parse().expect("kind"), EdgeKindHint { dynamic: false });
    registry.register("serving".parse().expect("kind"), EdgeKindHint { dynamic: true });
    registry.register("realization".parse().expect("kind"), EdgeKindHint { dynamic: true });
    registry
}

/// The server-side legality rules the validator applies to dynamic kinds.
fn demo_verdict(kinds_by_id: &BTreeMap<String, String>, request: &CheckEdgeRequest) -> bool {
    let kind_of = |id: &Option<String>| {
        id.as_deref()
            .and_then(|id| kinds_by_id.get(id))
            .map(String::as_str)
    };
    let source_kind = kind_of(&request.source_element);
    let target_kind = kind_of(&request.target_element);

    if request.source_element == request.target_element && request.target_element.is_some() {
        return false;
    }
    match request.edge_kind.as_str() {
        // Serving must originate from an application component and may not
        // point at notes.
        "serving" => {
            source_kind == Some("application-component")
                && target_kind.map_or(true, |kind| kind != "note")
        }
        // Realization may not stay within the same layer kind.
        "realization" => match (source_kind, target_kind) {
            (Some(source), Some(target)) => source != target,
            _ => source_kind.is_some(),
        },
        _ => true,
    }
}

/// Demo application state; pure with respect to the terminal.
pub struct App {
    elements: Vec<Element>,
    registry: EdgeKindRegistry,
    authority: ChannelAuthority,
    kinds: Vec<EdgeKindId>,
    kind_index: usize,
    /// Hover position: an element index, or one past the end = empty canvas.
    hovered: usize,
    pub continuous: bool,
    tool: Option<EdgeCreationTool<ChannelAuthority>>,
    feedback: Option<(String, String)>,
    edges: Vec<(String, String, String)>,
    log: Vec<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        elements: Vec<Element>,
        registry: EdgeKindRegistry,
        authority: ChannelAuthority,
    ) -> Self {
        let kinds: Vec<EdgeKindId> = registry.kinds().cloned().collect();
        Self {
            elements,
            registry,
            authority,
            kinds,
            kind_index: 0,
            hovered: 0,
            continuous: false,
            tool: None,
            feedback: None,
            edges: Vec::new(),
            log: Vec::new(),
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.move_hover(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_hover(1),
            KeyCode::Tab => self.cycle_kind(),
            KeyCode::Char('c') => self.continuous = !self.continuous,
            KeyCode::Char('e') => self.activate_tool(),
            KeyCode::Enter => self.primary_release(),
            KeyCode::Esc => self.secondary_release(),
            _ => {}
        }
    }

    pub fn on_check_outcome(&mut self, outcome: CheckOutcome) {
        if let Some(tool) = &mut self.tool {
            let actions = tool.on_check_resolved(outcome.token, outcome.result);
            self.apply_actions(actions);
        }
    }

    pub fn tool(&self) -> Option<&EdgeCreationTool<ChannelAuthority>> {
        self.tool.as_ref()
    }

    pub fn edges(&self) -> &[(String, String, String)] {
        &self.edges
    }

    /// The feedback stub currently on screen, as `(type id, source id)`.
    pub fn feedback(&self) -> Option<(&str, &str)> {
        self.feedback
            .as_ref()
            .map(|(kind, source)| (kind.as_str(), source.as_str()))
    }

    pub fn selected_kind(&self) -> &EdgeKindId {
        &self.kinds[self.kind_index]
    }

    fn hovered_element(&self) -> Option<&Element> {
        self.elements.get(self.hovered)
    }

    fn move_hover(&mut self, delta: isize) {
        let last = self.elements.len(); // == the empty-canvas slot
        let next = self.hovered.saturating_add_signed(delta).min(last);
        if next == self.hovered {
            return;
        }
        self.hovered = next;
        if self.tool.is_some() {
            let hovered = self.elements.get(self.hovered).cloned();
            if let Some(tool) = &mut self.tool {
                tool.on_pointer_move(hovered.as_ref().map(|element| element as &dyn Connectable));
            }
        }
    }

    fn cycle_kind(&mut self) {
        if self.tool.is_some() || self.kinds.is_empty() {
            return;
        }
        self.kind_index = (self.kind_index + 1) % self.kinds.len();
    }

    fn activate_tool(&mut self) {
        if self.tool.is_some() || self.kinds.is_empty() {
            return;
        }
        let mut tool = EdgeCreationTool::new(
            self.selected_kind().clone(),
            self.registry.clone(),
            self.authority.clone(),
        );
        let hovered = self.hovered_element().cloned();
        tool.on_pointer_move(hovered.as_ref().map(|element| element as &dyn Connectable));
        self.tool = Some(tool);
        self.log_line(format!("edge tool armed: {}", self.selected_kind()));
    }

    fn primary_release(&mut self) {
        let continuous = self.continuous;
        let hovered = self.hovered_element().cloned();
        if let Some(tool) = &mut self.tool {
            let actions = tool.on_primary_release(
                hovered.as_ref().map(|element| element as &dyn Connectable),
                continuous,
            );
            self.apply_actions(actions);
        }
    }

    fn secondary_release(&mut self) {
        if let Some(tool) = &mut self.tool {
            let actions = tool.on_secondary_release();
            self.apply_actions(actions);
        }
    }

    fn apply_actions(&mut self, actions: Vec<Action>) {
        for action in actions {
            if let Ok(line) = serde_json::to_string(&action) {
                self.log_line(line);
            }
            match action {
                Action::DrawFeedbackEdge {
                    element_type_id,
                    source_id,
                } => self.feedback = Some((element_type_id, source_id)),
                Action::RemoveFeedbackEdge => self.feedback = None,
                Action::CreateEdge {
                    edge_kind,
                    source_id,
                    target_id,
                } => self.edges.push((edge_kind, source_id, target_id)),
                Action::EnableDefaultTools => self.tool = None,
            }
        }
    }

    fn log_line(&mut self, line: String) {
        self.log.push(line);
        let overflow = self.log.len().saturating_sub(64);
        if overflow > 0 {
            self.log.drain(..overflow);
        }
    }

    fn element_style(&self, index: usize) -> Style {
        let element = &self.elements[index];
        let mut style = Style::default();
        if let Some(tool) = &self.tool {
            if tool.edge().source() == Some(element.id()) {
                style = style.fg(SOURCE_COLOR).add_modifier(Modifier::BOLD);
            } else if self.hovered == index {
                style = match tool.validity() {
                    Validity::Pending { candidate, .. } if candidate == element.id() => {
                        style.fg(PENDING_COLOR)
                    }
                    Validity::Resolved { candidate, valid } if candidate == element.id() => {
                        style.fg(if *valid { VALID_COLOR } else { INVALID_COLOR })
                    }
                    _ => style.fg(HOVER_COLOR),
                };
            }
        } else if self.hovered == index {
            style = style.fg(HOVER_COLOR);
        }
        style
    }

    fn status_line(&self) -> String {
        let Some(tool) = &self.tool else {
            return format!(
                "browse | kind: {} | continuous: {} | Tab kind, e arm tool, q quit",
                self.selected_kind(),
                if self.continuous { "on" } else { "off" }
            );
        };
        let validity = match tool.validity() {
            Validity::Unknown => "unknown".to_owned(),
            Validity::Pending { candidate, .. } => format!("pending({candidate})"),
            Validity::Resolved { candidate, valid } => format!("{candidate}={valid}"),
        };
        let source = tool
            .edge()
            .source()
            .map(ElementId::as_str)
            .unwrap_or("<none>");
        format!(
            "drawing {} | source: {source} | validity: {validity} | Enter commit, Esc abandon",
            tool.edge().edge_kind()
        )
    }
}

fn draw(frame: &mut Frame<'_>, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(frame.size());

    let header = Paragraph::new(app.status_line())
        .block(Block::default().borders(Borders::ALL).title("proteus demo"));
    frame.render_widget(header, rows[0]);

    let mut constraints: Vec<Constraint> = app
        .elements
        .iter()
        .map(|_| Constraint::Ratio(1, (app.elements.len() + 1) as u32))
        .collect();
    constraints.push(Constraint::Ratio(1, (app.elements.len() + 1) as u32));
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(rows[1]);

    for (index, element) in app.elements.iter().enumerate() {
        let cell = Paragraph::new(format!("{}\n{}", element.id(), element.kind()))
            .style(app.element_style(index))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(cell, cells[index]);
    }
    let canvas_style = if app.hovered == app.elements.len() {
        Style::default().fg(HOVER_COLOR)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let canvas = Paragraph::new("(canvas)")
        .style(canvas_style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(canvas, cells[app.elements.len()]);

    let mut edges_line = if app.edges.is_empty() {
        "edges: none".to_owned()
    } else {
        let rendered: Vec<String> = app
            .edges
            .iter()
            .map(|(kind, source, target)| format!("{source}-[{kind}]->{target}"))
            .collect();
        format!("edges: {}", rendered.join("  "))
    };
    if let Some((kind, source)) = app.feedback() {
        edges_line.push_str(&format!("  | stub: {kind} from {source}"));
    }
    let edges = Paragraph::new(edges_line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(edges, rows[2]);

    let items: Vec<ListItem<'_>> = app
        .log
        .iter()
        .rev()
        .take(LOG_LINES)
        .map(|line| ListItem::new(line.as_str()))
        .collect();
    let log =
        List::new(items).block(Block::default().borders(Borders::ALL).title("directives"));
    frame.render_widget(log, rows[3]);
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
