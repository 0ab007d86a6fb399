//! Admin dashboard page component.

use leptos::prelude::*;
use returnoscope_platform_access::ActiveSession;

use crate::storage::use_storage;

/// The admin landing page (requires an admin session record).
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let storage = use_storage();
    let session = RwSignal::new(Option::<ActiveSession>::None);

    {
        let storage = storage.clone();
        Effect::new(move || session.set(ActiveSession::load(storage.session())));
    }

    let logout_storage = storage.clone();
    let logout = move |_| {
        ActiveSession::clear(logout_storage.session());
        session.set(None);
    };

    view! {
        <div class="admin-page">
            {move || match session.get() {
                Some(active) if active.is_admin() => {
                    view! {
                        <div>
                            <h1>{format!("Welcome, {}!", active.username())}</h1>
                            <p>"Platform management and oversight."</p>
                            <button class="logout-button" on:click=logout.clone()>
                                "Log out"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                Some(_) => {
                    view! {
                        <div>
                            <p>"You do not have admin access."</p>
                            <a href="/">"Return to Home"</a>
                        </div>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <div>
                            <p>"Please log in to access the admin dashboard."</p>
                            <a href="/login">"Log in"</a>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
