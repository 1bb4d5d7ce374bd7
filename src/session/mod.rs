//! Play session - turn routing between the local engines and the narrator
//!
//! The session owns the only `WorldState`. Each submitted line is either
//! settled locally or turned into a `NarrationRequest`. While a request is
//! out, the session is busy: no line is accepted until the caller reports
//! the narrator's result or abandons it.

use crate::command::{interpret, is_critical_use, parse, Outcome, Verb};
use crate::core::error::{BargainError, Result};
use crate::core::types::SessionId;
use crate::llm::narrator::clean_narration;
use crate::llm::{NarrationRequest, NARRATOR_FALLBACK};
use crate::world::WorldState;
use tracing::Span;

pub const EMPTY_SUBMIT: &str = "Please enter a command.";
pub const USE_WITHOUT_NARRATOR: &str = "LLM is disabled. Cannot process this 'use' command flexibly.";
pub const THINKING: &str = "Thinking...";

/// Result of submitting one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Settled locally; the text is also the state's current message
    Message(String),
    /// Needs the narrator. The session stays busy until
    /// `complete_narration` or `abandon_narration`.
    Narrate(NarrationRequest),
}

#[derive(Debug)]
struct PendingNarration {
    input: String,
    /// Local text restored if the narration is abandoned
    fallback: String,
}

/// One player's session
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    state: WorldState,
    narrator_enabled: bool,
    pending: Option<PendingNarration>,
    /// Carries the session id for every event logged during a turn
    span: Span,
}

impl Session {
    pub fn new(narrator_enabled: bool) -> Self {
        let id = SessionId::new();
        let span = tracing::info_span!("session", id = %id);
        span.in_scope(|| tracing::info!(narrator_enabled, "Session started"));
        Self {
            id,
            state: WorldState::new(),
            narrator_enabled,
            pending: None,
            span,
        }
    }

    /// Wrap an existing world, e.g. a scenario set up in tests
    pub fn with_state(state: WorldState, narrator_enabled: bool) -> Self {
        Self {
            state,
            ..Self::new(narrator_enabled)
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// True while a narration is outstanding
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Input text of the outstanding narration, if any
    pub fn pending_input(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.input.as_str())
    }

    pub fn is_over(&self) -> bool {
        self.state.is_escaped()
    }

    /// Append typed text to the input buffer
    pub fn type_text(&mut self, text: &str) -> Result<()> {
        self.ensure_idle()?;
        self.state.input_buffer.push_str(text);
        Ok(())
    }

    /// Remove the last typed character
    pub fn backspace(&mut self) -> Result<()> {
        self.ensure_idle()?;
        self.state.input_buffer.pop();
        Ok(())
    }

    /// Replace the buffer with a whole line and submit it
    pub fn submit_line(&mut self, line: &str) -> Result<Turn> {
        self.ensure_idle()?;
        self.state.input_buffer.clear();
        self.state.input_buffer.push_str(line);
        self.submit()
    }

    /// Submit the input buffer as one command line
    pub fn submit(&mut self) -> Result<Turn> {
        let _entered = self.span.clone().entered();
        self.ensure_idle()?;

        let raw = std::mem::take(&mut self.state.input_buffer);
        let input = raw.trim();
        tracing::debug!(input, "Submit");

        if input.is_empty() {
            self.state.say(EMPTY_SUBMIT);
            return Ok(Turn::Message(EMPTY_SUBMIT.to_string()));
        }

        // A pending code dialog swallows the line whole
        if self.state.input_mode.is_some() {
            return Ok(Turn::Message(interpret(&mut self.state, input).message().to_string()));
        }

        let is_use = parse(&input.to_lowercase()).map_or(false, |cmd| cmd.verb == Verb::Use);
        if is_use {
            if is_critical_use(&self.state, input) {
                let outcome = interpret(&mut self.state, input);
                return Ok(Turn::Message(outcome.message().to_string()));
            }
            if self.narrator_enabled {
                return Ok(self.delegate(input, NARRATOR_FALLBACK.to_string()));
            }
            self.state.say(USE_WITHOUT_NARRATOR);
            return Ok(Turn::Message(USE_WITHOUT_NARRATOR.to_string()));
        }

        match interpret(&mut self.state, input) {
            Outcome::Resolved(message) => Ok(Turn::Message(message)),
            Outcome::Unresolved { fallback } if self.narrator_enabled => {
                Ok(self.delegate(input, fallback))
            }
            Outcome::Unresolved { fallback } => Ok(Turn::Message(fallback)),
        }
    }

    /// Feed the narrator's result back in. This is the only way narration
    /// reaches the world: it sets the turn message and nothing else.
    pub fn complete_narration(&mut self, result: Result<String>) -> Result<&str> {
        let _entered = self.span.clone().entered();
        let pending = self.pending.take().ok_or(BargainError::NoPendingNarration)?;

        match result {
            Ok(text) => self.state.say(clean_narration(&text)),
            Err(e) => {
                tracing::warn!(input = %pending.input, "Narration failed: {}", e);
                self.state.say(NARRATOR_FALLBACK);
            }
        }
        Ok(self.state.message.as_str())
    }

    /// Give up on the outstanding narration and show the local text instead
    pub fn abandon_narration(&mut self) -> Result<&str> {
        let _entered = self.span.clone().entered();
        let pending = self.pending.take().ok_or(BargainError::NoPendingNarration)?;
        tracing::info!(input = %pending.input, "Narration abandoned");
        self.state.say(pending.fallback);
        Ok(self.state.message.as_str())
    }

    fn delegate(&mut self, input: &str, fallback: String) -> Turn {
        let request = NarrationRequest::from_world(&self.state, input);
        self.pending = Some(PendingNarration {
            input: input.to_string(),
            fallback,
        });
        self.state.say(THINKING);
        Turn::Narrate(request)
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.is_busy() {
            return Err(BargainError::NarrationPending);
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(false)
    }
}
