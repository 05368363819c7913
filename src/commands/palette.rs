//! Interactive quick search palette on stdin/stdout.
//!
//! Every input line is the new value of the search field. In a sub-mode an
//! empty line stands for Backspace on an empty field. Lines starting with `:`
//! are palette commands: `:N` runs the N-th action, `:open`/`:close` toggle the
//! dialog and `:q` quits.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use owo_colors::OwoColorize;
use parking_lot::Mutex;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::format_action_list;
use crate::api::{DashboardClient, GraphQlOrderLookup};
use crate::config::Config;
use crate::error::{DashnavError, Result};
use crate::intl::MessageCatalog;
use crate::navigator::{
    ActionOutcome, Capabilities, DraftOrderCreator, InputHandle, KeyCode, ListenerId,
    LookupResponse, Navigator, OrderLookup, QuickSearchAction, QuickSearchController, run_action,
};
use crate::routes::absolute_url;
use crate::types::QuickSearchMode;

/// One parsed line of palette input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteInput {
    /// New raw value of the search field
    Field(String),
    /// Backspace released on an empty field
    Backspace,
    /// Run the action at this 1-based position
    Select(usize),
    Open,
    Close,
    Quit,
}

pub fn parse_palette_line(line: &str, mode: QuickSearchMode) -> PaletteInput {
    match line {
        ":q" | ":quit" => return PaletteInput::Quit,
        ":open" => return PaletteInput::Open,
        ":close" => return PaletteInput::Close,
        "" if !mode.is_default() => return PaletteInput::Backspace,
        _ => {}
    }

    if let Some(index) = line.strip_prefix(':')
        && let Ok(index) = index.trim().parse::<usize>()
    {
        return PaletteInput::Select(index);
    }

    PaletteInput::Field(line.to_string())
}

/// Router that prints the absolute dashboard URL it was asked to open
pub struct TerminalNavigator {
    base_url: String,
}

impl TerminalNavigator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, url: &str) {
        println!("{} {}", "Open".green(), absolute_url(&self.base_url, url));
    }
}

/// Line-based stand-in for the search input. Keeps track of attached
/// key listeners so they can be inspected.
#[derive(Default)]
pub struct TerminalInput {
    next_id: AtomicU64,
    listeners: Mutex<Vec<ListenerId>>,
}

impl TerminalInput {
    pub fn attached(&self) -> usize {
        self.listeners.lock().len()
    }
}

impl InputHandle for TerminalInput {
    fn attach_key_listener(&self) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push(id);
        id
    }

    fn detach_key_listener(&self, id: ListenerId) {
        self.listeners.lock().retain(|l| *l != id);
    }
}

/// Palette state plus the capabilities selected actions run against
pub struct PaletteSession<L, C, N> {
    controller: QuickSearchController<L>,
    messages: MessageCatalog,
    max_actions: usize,
    create_order: C,
    navigator: N,
}

impl<L, C, N> PaletteSession<L, C, N>
where
    L: OrderLookup,
    C: DraftOrderCreator,
    N: Navigator,
{
    pub fn new(
        controller: QuickSearchController<L>,
        messages: MessageCatalog,
        max_actions: usize,
        create_order: C,
        navigator: N,
    ) -> Self {
        Self {
            controller,
            messages,
            max_actions,
            create_order,
            navigator,
        }
    }

    pub fn controller(&self) -> &QuickSearchController<L> {
        &self.controller
    }

    pub fn actions(&self) -> Vec<QuickSearchAction> {
        self.controller.actions(&self.messages, self.max_actions)
    }

    pub fn resolve_lookup(&mut self, response: LookupResponse) -> bool {
        self.controller.resolve_lookup(response)
    }

    /// Apply one line of input. Returns the outcome when an action ran.
    pub async fn handle(&mut self, input: PaletteInput) -> Result<Option<ActionOutcome>> {
        let edits_field = matches!(
            input,
            PaletteInput::Field(_) | PaletteInput::Backspace | PaletteInput::Select(_)
        );
        if edits_field && !self.controller.is_open() {
            return Err(DashnavError::PaletteClosed);
        }

        match input {
            PaletteInput::Field(value) => {
                self.controller.change(&value);
                self.controller.key_up(KeyCode::Other, &value);
            }
            PaletteInput::Backspace => {
                self.controller.change("");
                self.controller.key_up(KeyCode::Backspace, "");
            }
            PaletteInput::Open => self.controller.set_open(true),
            PaletteInput::Close => self.controller.set_open(false),
            PaletteInput::Quit => {}
            PaletteInput::Select(index) => return self.select(index).await.map(Some),
        }
        Ok(None)
    }

    async fn select(&mut self, index: usize) -> Result<ActionOutcome> {
        let action = index
            .checked_sub(1)
            .and_then(|i| self.actions().into_iter().nth(i))
            .ok_or(DashnavError::ActionNotFound(index))?;

        let capabilities = Capabilities {
            create_order: &self.create_order,
            navigate: &self.navigator,
        };
        let outcome = run_action(&action, &capabilities).await?;

        match &outcome {
            ActionOutcome::SwitchMode(mode) => {
                self.controller.set_mode(*mode);
            }
            ActionOutcome::Navigated(_) => self.controller.set_open(false),
            ActionOutcome::DraftOrderRejected(_) => {}
        }
        Ok(outcome)
    }

    /// Prompt line plus the current action list
    pub fn render(&self) -> String {
        if !self.controller.is_open() {
            return format!("{}", "(closed, :open to reopen)".dimmed());
        }
        let header = format!(
            "[{}] {}",
            self.controller.mode().cyan(),
            self.controller.query()
        );
        format!("{}\n{}", header, format_action_list(&self.actions()))
    }
}

fn report_outcome(outcome: &ActionOutcome) {
    if let ActionOutcome::DraftOrderRejected(errors) = outcome {
        for error in errors {
            let field = error.field.as_deref().unwrap_or("-");
            let message = error.message.as_deref().unwrap_or("");
            eprintln!("{} {} ({}) {}", "Error:".red(), error.code, field, message);
        }
    }
}

/// Run the palette until `:q` or end of input
pub async fn cmd_palette() -> Result<()> {
    let config = Config::load()?;
    let client = Arc::new(DashboardClient::from_config(&config)?);
    let (lookup, mut lookup_results) = GraphQlOrderLookup::new(Arc::clone(&client))?;
    let input: Arc<dyn InputHandle> = Arc::new(TerminalInput::default());

    let mut controller = QuickSearchController::new(lookup).with_input(input);
    controller.set_open(true);

    let mut session = PaletteSession::new(
        controller,
        config.message_catalog(),
        config.max_actions,
        client,
        TerminalNavigator::new(config.dashboard_url()),
    );
    println!("{}", session.render());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let input = parse_palette_line(&line, session.controller().mode());
                if input == PaletteInput::Quit {
                    break;
                }
                match session.handle(input).await {
                    Ok(Some(outcome)) => report_outcome(&outcome),
                    Ok(None) => {}
                    Err(e) => eprintln!("{} {}", "Error:".red(), e),
                }
                println!("{}", session.render());
            }
            Some(response) = lookup_results.recv() => {
                if session.resolve_lookup(response) {
                    println!("{}", session.render());
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_text() {
        assert_eq!(
            parse_palette_line("> ", QuickSearchMode::Default),
            PaletteInput::Field("> ".to_string())
        );
        assert_eq!(
            parse_palette_line("prod", QuickSearchMode::Commands),
            PaletteInput::Field("prod".to_string())
        );
    }

    #[test]
    fn test_parse_empty_line_depends_on_mode() {
        assert_eq!(
            parse_palette_line("", QuickSearchMode::Orders),
            PaletteInput::Backspace
        );
        assert_eq!(
            parse_palette_line("", QuickSearchMode::Default),
            PaletteInput::Field(String::new())
        );
    }

    #[test]
    fn test_parse_commands() {
        let mode = QuickSearchMode::Default;
        assert_eq!(parse_palette_line(":2", mode), PaletteInput::Select(2));
        assert_eq!(parse_palette_line(":open", mode), PaletteInput::Open);
        assert_eq!(parse_palette_line(":close", mode), PaletteInput::Close);
        assert_eq!(parse_palette_line(":q", mode), PaletteInput::Quit);
        assert_eq!(
            parse_palette_line(":x", mode),
            PaletteInput::Field(":x".to_string())
        );
    }

    #[test]
    fn test_terminal_input_tracks_listeners() {
        let input = TerminalInput::default();
        let first = input.attach_key_listener();
        let second = input.attach_key_listener();
        assert_ne!(first, second);
        assert_eq!(input.attached(), 2);

        input.detach_key_listener(first);
        assert_eq!(input.attached(), 1);
    }
}
