use crate::auth::use_auth;
use crate::routes::{follow_with_history, Route};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLogIn;
use dioxus_free_icons::Icon;
use session::{auth_config, DeferredAuthGate, GateOutcome};
use shared_types::Session;

type PendingAction = Box<dyn FnOnce()>;

/// Component-scoped deferred-auth gate. The held action is dropped with the
/// component that owns the gate.
#[derive(Clone, Copy, PartialEq)]
pub struct RequireAuth {
    gate: Signal<DeferredAuthGate<PendingAction>>,
    session: Signal<Session>,
}

pub fn use_require_auth() -> RequireAuth {
    let auth = use_auth();
    let gate = use_signal(DeferredAuthGate::<PendingAction>::new);
    RequireAuth {
        gate,
        session: auth.session,
    }
}

impl RequireAuth {
    /// Run `action` now for a signed-in user, otherwise open the login prompt.
    pub fn require(&self, action: impl FnOnce() + 'static) -> GateOutcome {
        let session = self.session.peek().clone();
        let mut gate = self.gate;
        // The action may touch the gate again; run it after the write ends.
        let admitted = gate.write().admit(&session, Box::new(action));
        match admitted {
            Some(action) => {
                action();
                GateOutcome::Ran
            }
            None => {
                tracing::debug!("action needs a session, prompting for login");
                GateOutcome::Prompted
            }
        }
    }

    pub fn is_prompting(&self) -> bool {
        self.gate.read().is_prompting()
    }

    pub fn close(&self) {
        let mut gate = self.gate;
        gate.write().close();
    }

    /// Accept the prompt: go to the login page, returning to `requested`.
    pub fn confirm(&self, requested: &str) {
        let mut gate = self.gate;
        let decision = gate.write().confirm(requested, auth_config());
        if let Some(decision) = decision {
            follow_with_history(&decision);
        }
    }
}

/// Modal shown while a [`RequireAuth`] gate holds an action.
#[component]
pub fn LoginPrompt(gate: RequireAuth) -> Element {
    let route: Route = use_route();

    if !gate.is_prompting() {
        return rsx! {};
    }

    let requested = route.to_string();

    rsx! {
        div { class: "login-prompt-overlay",
            div { class: "login-prompt", role: "dialog",
                h2 { "Inicia sesión para continuar" }
                p { "Necesitas una cuenta para inscribirte en un curso." }
                div { class: "login-prompt-actions",
                    button {
                        class: "button",
                        onclick: move |_| gate.confirm(&requested),
                        Icon { icon: LdLogIn, width: 16, height: 16 }
                        " Iniciar sesión"
                    }
                    button {
                        class: "button button-ghost",
                        onclick: move |_| gate.close(),
                        "Cancelar"
                    }
                }
            }
        }
    }
}
