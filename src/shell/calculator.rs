//! The calculator controller.
//!
//! Owns the expression buffer, history, theme, storage and display.
//! Every command goes through `step` (pure: computes the next state)
//! and then `apply` (effectful: persists and renders).

use super::display::DisplaySink;
use super::persist;
use super::storage::KeyValueStore;
use super::theme::Theme;
use crate::config::{CalculatorConfig, ConfigError};
use crate::core::{
    evaluate_to_string, Command, ExpressionBuffer, HistoryEntry, HistoryLog, InputGuard, UnaryOp,
};
use tracing::debug;

/// What a command does to the history log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryChange {
    Unchanged,
    Record(HistoryEntry),
    Clear,
}

/// Next state computed from a command, before any side effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub buffer: ExpressionBuffer,
    pub history: HistoryChange,
    pub theme: Option<Theme>,
}

/// Result of dispatching one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Value handed to the display sink
    pub display: String,
    /// History entry added by a successful evaluation
    pub recorded: Option<HistoryEntry>,
}

/// Calculator controller holding all session state.
///
/// # Example
///
/// ```rust
/// use reckon::core::Command;
/// use reckon::shell::{Calculator, MemoryStore, RecordingDisplay};
///
/// let mut calc = Calculator::with_defaults(MemoryStore::new(), RecordingDisplay::new());
///
/// for key in ["2", "+", "2", "Enter"] {
///     calc.dispatch(Command::from_key(key).unwrap());
/// }
///
/// assert_eq!(calc.display().current(), Some("4"));
/// assert_eq!(calc.history().entries()[0].to_string(), "2+2 = 4");
/// ```
pub struct Calculator<K: KeyValueStore, D: DisplaySink> {
    config: CalculatorConfig,
    buffer: ExpressionBuffer,
    history: HistoryLog,
    theme: Theme,
    guards: Vec<InputGuard>,
    store: K,
    display: D,
}

impl<K: KeyValueStore, D: DisplaySink> Calculator<K, D> {
    /// Create a calculator, loading history and theme from `store`.
    pub fn new(config: CalculatorConfig, store: K, display: D) -> Result<Self, ConfigError> {
        Ok(Self::load(config.validated()?, store, display))
    }

    /// Create a calculator with the default configuration.
    pub fn with_defaults(store: K, display: D) -> Self {
        Self::load(CalculatorConfig::default(), store, display)
    }

    fn load(config: CalculatorConfig, store: K, display: D) -> Self {
        let history = persist::load_history(&store, &config.history_key, config.history_capacity);
        let theme = persist::load_theme(&store, &config.theme_key);
        debug!(
            entries = history.len(),
            theme = theme.as_str(),
            "calculator session loaded"
        );

        Self {
            config,
            buffer: ExpressionBuffer::new(),
            history,
            theme,
            guards: InputGuard::defaults(),
            store,
            display,
        }
    }

    /// Compute the next state for a command (pure).
    pub fn step(&self, command: Command) -> Step {
        let unchanged = |buffer| Step {
            buffer,
            history: HistoryChange::Unchanged,
            theme: None,
        };

        match command {
            Command::Input(token) => match self.buffer.append_guarded(token, &self.guards) {
                Ok(next) => unchanged(next),
                Err(rejected) => {
                    debug!(guard = rejected.guard, token = %rejected.token, "edit rejected");
                    unchanged(self.buffer.clone())
                }
            },
            Command::Clear => unchanged(self.buffer.clear()),
            Command::Backspace => unchanged(self.buffer.backspace()),
            Command::Evaluate => {
                let expression = self.buffer.as_str();
                let outcome = evaluate_to_string(expression);
                let history = match &outcome {
                    Ok(result) => HistoryChange::Record(HistoryEntry::new(expression, result)),
                    Err(e) => {
                        debug!(expression, error = %e, "evaluation failed");
                        HistoryChange::Unchanged
                    }
                };
                Step {
                    buffer: ExpressionBuffer::from_outcome(&outcome),
                    history,
                    theme: None,
                }
            }
            Command::Percentage => self.unary(UnaryOp::Percentage),
            Command::SquareRoot => self.unary(UnaryOp::SquareRoot),
            Command::Square => self.unary(UnaryOp::Square),
            Command::Reciprocal => self.unary(UnaryOp::Reciprocal),
            Command::SelectHistory(index) => {
                match self.history.select(index).and_then(ExpressionBuffer::parse) {
                    Some(buffer) => unchanged(buffer),
                    None => unchanged(self.buffer.clone()),
                }
            }
            Command::ClearHistory => Step {
                buffer: self.buffer.clone(),
                history: HistoryChange::Clear,
                theme: None,
            },
            Command::ToggleTheme => Step {
                buffer: self.buffer.clone(),
                history: HistoryChange::Unchanged,
                theme: Some(self.theme.toggle()),
            },
        }
    }

    fn unary(&self, op: UnaryOp) -> Step {
        let outcome = op.apply(self.buffer.as_str());
        if let Err(e) = &outcome {
            debug!(op = op.name(), error = %e, "unary operation failed");
        }
        Step {
            buffer: ExpressionBuffer::from_outcome(&outcome),
            history: HistoryChange::Unchanged,
            theme: None,
        }
    }

    /// Apply a computed step: update state, persist, and render.
    pub fn apply(&mut self, step: Step) -> DispatchOutcome {
        let recorded = match step.history {
            HistoryChange::Unchanged => None,
            HistoryChange::Record(entry) => {
                self.history = self.history.record(entry.clone());
                persist::save_history(&mut self.store, &self.config.history_key, &self.history);
                Some(entry)
            }
            HistoryChange::Clear => {
                self.history = self.history.clear();
                persist::erase_history(&mut self.store, &self.config.history_key);
                None
            }
        };

        if let Some(theme) = step.theme {
            self.theme = theme;
            persist::save_theme(&mut self.store, &self.config.theme_key, theme);
        }

        self.buffer = step.buffer;
        self.render();

        DispatchOutcome {
            display: self.buffer.as_str().to_string(),
            recorded,
        }
    }

    /// Run one command end to end.
    pub fn dispatch(&mut self, command: Command) -> DispatchOutcome {
        debug!(?command, state = self.buffer.state().name(), "dispatching command");
        let step = self.step(command);
        self.apply(step)
    }

    /// Push the current buffer to the display sink.
    pub fn render(&mut self) {
        self.display.show(self.buffer.as_str());
    }

    pub fn buffer(&self) -> &ExpressionBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub(crate) fn replace_session(
        &mut self,
        buffer: ExpressionBuffer,
        history: HistoryLog,
        theme: Theme,
    ) {
        self.buffer = buffer;
        self.history = history;
        self.theme = theme;

        if self.history.is_empty() {
            persist::erase_history(&mut self.store, &self.config.history_key);
        } else {
            persist::save_history(&mut self.store, &self.config.history_key, &self.history);
        }
        persist::save_theme(&mut self.store, &self.config.theme_key, self.theme);
        self.render();
    }
}
