use pretty_assertions::assert_eq;
use session::{DeferredAuthGate, GateOutcome, GateState, GuardDecision};
use shared_types::AuthConfig;
use std::cell::RefCell;
use std::rc::Rc;

use crate::common::{backend_login, memory_store};

type Action = Box<dyn FnOnce()>;

fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Action) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let make = move |name: &'static str| -> Action {
        let sink = Rc::clone(&sink);
        Box::new(move || sink.borrow_mut().push(name))
    };
    (log, make)
}

#[test]
fn guest_enrollment_prompts_then_redirects() {
    let config = AuthConfig::default();
    let (store, _storage) = memory_store();
    let (log, action) = recorder();
    let mut gate: DeferredAuthGate<Action> = DeferredAuthGate::new();

    assert_eq!(
        gate.require_auth(&store.snapshot(), action("enroll")),
        GateOutcome::Prompted
    );
    assert_eq!(gate.state(), GateState::PromptingForAuth);

    let decision = gate.confirm("/", &config);
    assert_eq!(decision, Some(GuardDecision::to_login("/", &config)));
    assert_eq!(gate.state(), GateState::Idle);

    // Signing in afterwards does not replay the held action.
    store.login(backend_login(Some("alumno"), Some("jwt")));
    assert!(log.borrow().is_empty());
}

#[test]
fn signed_in_enrollment_runs_immediately() {
    let (store, _storage) = memory_store();
    store.login(backend_login(Some("alumno"), Some("jwt")));
    let (log, action) = recorder();
    let mut gate: DeferredAuthGate<Action> = DeferredAuthGate::new();

    assert_eq!(gate.require_auth(&store.snapshot(), action("enroll")), GateOutcome::Ran);
    assert_eq!(*log.borrow(), vec!["enroll"]);
    assert!(!gate.is_prompting());
}

#[test]
fn dismissing_prompt_discards_action() {
    let (store, _storage) = memory_store();
    let (log, action) = recorder();
    let mut gate: DeferredAuthGate<Action> = DeferredAuthGate::new();

    gate.require_auth(&store.snapshot(), action("enroll"));
    gate.close();
    store.login(backend_login(Some("alumno"), Some("jwt")));

    assert_eq!(gate.state(), GateState::Idle);
    assert!(log.borrow().is_empty());
}

#[test]
fn gate_reads_session_at_call_time() {
    let (store, _storage) = memory_store();
    let (log, action) = recorder();
    let mut gate: DeferredAuthGate<Action> = DeferredAuthGate::new();

    gate.require_auth(&store.snapshot(), action("first"));
    gate.close();
    store.login(backend_login(Some("femme"), Some("jwt")));
    gate.require_auth(&store.snapshot(), action("second"));

    assert_eq!(*log.borrow(), vec!["second"]);
}
