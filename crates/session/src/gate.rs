//! Deferred-auth gate: run an action now if signed in, otherwise prompt.
//!
//! The held action is never resumed after login. Confirming the prompt
//! yields a redirect to the login page and discards the action; closing the
//! prompt or dropping the gate discards it too.

use crate::guard::GuardDecision;
use shared_types::{AuthConfig, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Idle,
    PromptingForAuth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// The action ran synchronously.
    Ran,
    /// The login prompt is showing; the action is held.
    Prompted,
}

pub struct DeferredAuthGate<A> {
    pending: Option<A>,
}

impl<A: FnOnce()> DeferredAuthGate<A> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn state(&self) -> GateState {
        if self.pending.is_some() {
            GateState::PromptingForAuth
        } else {
            GateState::Idle
        }
    }

    pub fn is_prompting(&self) -> bool {
        self.state() == GateState::PromptingForAuth
    }

    /// Hand `action` back if `session` is authenticated, else hold it and
    /// prompt. The caller runs the returned action once it has released the
    /// gate. A call while already prompting replaces the held action.
    pub fn admit(&mut self, session: &Session, action: A) -> Option<A> {
        if session.is_authenticated() {
            Some(action)
        } else {
            self.pending = Some(action);
            None
        }
    }

    /// Run `action` if `session` is authenticated, else hold it and prompt.
    pub fn require_auth(&mut self, session: &Session, action: A) -> GateOutcome {
        match self.admit(session, action) {
            Some(action) => {
                action();
                GateOutcome::Ran
            }
            None => GateOutcome::Prompted,
        }
    }

    /// The user accepted the prompt: drop the held action and return the
    /// login redirect carrying `requested`. `None` when not prompting.
    pub fn confirm(&mut self, requested: &str, config: &AuthConfig) -> Option<GuardDecision> {
        self.pending
            .take()
            .map(|_discarded| GuardDecision::to_login(requested, config))
    }

    /// The user dismissed the prompt.
    pub fn close(&mut self) {
        self.pending = None;
    }
}

impl<A: FnOnce()> Default for DeferredAuthGate<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for DeferredAuthGate<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredAuthGate")
            .field("pending", &self.pending.is_some())
            .finish()
    }
}
