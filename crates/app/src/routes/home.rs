use crate::auth::use_permissions;
use crate::deferred_auth::{use_require_auth, LoginPrompt};
use dioxus::prelude::*;
use shared_types::Permission;

/// Course catalogue shown to everyone: `(slug, name, schedule)`.
pub const COURSES: &[(&str, &str, &str)] = &[
    ("salsa-inicial", "Salsa inicial", "Lunes y miércoles, 19:00"),
    ("bachata", "Bachata", "Martes, 20:00"),
    ("contemporaneo", "Contemporáneo", "Jueves, 18:30"),
    ("heels", "Heels", "Viernes, 19:30"),
];

/// Public course list. Enrolling requires a session.
#[component]
pub fn Home() -> Element {
    let gate = use_require_auth();
    let permissions = use_permissions();
    let mut cart = use_signal(Vec::<String>::new);
    let summary = cart.read().join(", ");

    rsx! {
        div { class: "courses-page",
            h1 { "Cursos" }
            if !summary.is_empty() {
                p { class: "cart-summary", "En tu carrito: {summary}" }
            }
            ul { class: "course-list",
                for (slug, name, schedule) in COURSES.iter().copied() {
                    li { key: "{slug}", class: "course-card",
                        h2 { "{name}" }
                        p { "{schedule}" }
                        button {
                            class: "button",
                            onclick: move |_| {
                                gate.require(move || {
                                    if permissions.can(Permission::EnrollCourses) {
                                        tracing::info!(course = slug, "course added to cart");
                                        cart.write().push(name.to_string());
                                    } else {
                                        tracing::debug!(course = slug, "role cannot enroll");
                                    }
                                });
                            },
                            "Inscribirme"
                        }
                    }
                }
            }
        }
        LoginPrompt { gate }
    }
}
