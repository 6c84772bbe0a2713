use dioxus::prelude::*;
use session::{load_auth_config, platform_storage, SessionStore};
use std::rc::Rc;

mod api;
mod auth;
mod deferred_auth;
mod role_gate;
mod routes;
use auth::AuthState;
use routes::Route;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Restore the session once, before the first route renders.
    let (auth, _bridge) = use_hook(|| {
        let config = load_auth_config();
        let store = SessionStore::rehydrate(platform_storage(config), config);
        let auth = AuthState::new(store);
        let bridge = Rc::new(auth.bridge());
        (auth, bridge)
    });

    use_context_provider(|| auth);

    rsx! {
        Router::<Route> {}
    }
}
