//! Trader landing page component.

use leptos::prelude::*;
use returnoscope_platform_access::ActiveSession;

use crate::storage::use_storage;

/// The trader landing page, the default destination after login.
///
/// Reads the session record to decide what to show; anonymous visitors are
/// pointed at the login screen.
#[component]
pub fn HomePage() -> impl IntoView {
    let storage = use_storage();
    let session = RwSignal::new(Option::<ActiveSession>::None);

    // The session record only exists in the browser
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
        <div class="home-page">
            {move || match session.get() {
                Some(active) => {
                    view! {
                        <div>
                            <h1>{format!("Welcome, {}!", active.username())}</h1>
                            <p>
                                "Your comprehensive platform for portfolio management, "
                                "market analysis, and financial valuations."
                            </p>
                            <button class="logout-button" on:click=logout.clone()>
                                "Log out"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <div>
                            <h1>"ReturnoScope"</h1>
                            <p>"Advanced financial analytics platform"</p>
                            <p>"Please log in to access your dashboard."</p>
                            <a href="/login" class="cta-button">"Log in"</a>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
