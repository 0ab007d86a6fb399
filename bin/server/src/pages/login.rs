//! Login page component.

use leptos::ev;
use leptos::leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use returnoscope_platform_access::{LoginForm, Role, SUBMIT_DELAY, SubmitState};

use crate::notify::use_toasts;
use crate::storage::use_storage;

/// Login page - role selection plus username, no credential check.
///
/// Submitting holds for a fixed simulated-authentication delay, records
/// the session under the storage ports, and redirects to the selected
/// role's landing view. The pending completion is cancelled if the page
/// is torn down before the delay resolves.
#[component]
pub fn LoginPage() -> impl IntoView {
    let storage = use_storage();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginForm::default());
    let state = RwSignal::new(SubmitState::Idle);
    let pending: StoredValue<Option<TimeoutHandle>> = StoredValue::new(None);

    // One-time pre-fill from the remembered username. Storage reads are
    // untracked, so the effect does not re-run.
    {
        let storage = storage.clone();
        Effect::new(move || {
            let restored = LoginForm::restore(storage.durable());
            if restored.remember_me {
                form.set(restored);
            }
        });
    }

    // A pending completion must not write against a torn-down view
    on_cleanup(move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
        pending.set_value(None);
    });

    let submit_storage = storage.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked().is_submitting() {
            return;
        }

        // Fields captured at submit time; later edits do not affect this run
        let snapshot = form.get_untracked();
        let role = match snapshot.validate() {
            Ok(role) => role,
            Err(notice) => {
                toasts.error(notice.to_string());
                return;
            }
        };

        state.set(SubmitState::Submitting);

        let storage = submit_storage.clone();
        let navigate = navigate.clone();
        let scheduled = set_timeout_with_handle(
            move || {
                pending.set_value(None);
                match snapshot.complete(role, storage.session(), storage.durable()) {
                    Ok(outcome) => {
                        navigate(outcome.destination(), NavigateOptions::default());
                        toasts.success(outcome.message());
                    }
                    Err(report) => {
                        tracing::warn!(error = %report, "failed to record login session");
                    }
                }
                state.set(SubmitState::Idle);
            },
            SUBMIT_DELAY,
        );
        match scheduled {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(_) => {
                // No timer outside the browser; nothing was scheduled
                state.set(SubmitState::Idle);
            }
        }
    };

    let select_role = move |role: Role| form.update(|fields| fields.role = Some(role));

    view! {
        <div class="login-page">
            <div class="login-box">
                <h1>"ReturnoScope"</h1>
                <p class="tagline">"Advanced financial analytics platform"</p>

                <form on:submit=on_submit>
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        placeholder="Enter your username"
                        prop:value=move || form.get().username
                        on:input=move |ev| {
                            form.update(|fields| fields.username = event_target_value(&ev))
                        }
                    />

                    <span class="role-label">"Select your role"</span>
                    <div class="role-grid">
                        <button
                            type="button"
                            class="role-card"
                            class:selected=move || form.get().role == Some(Role::Trader)
                            on:click=move |_| select_role(Role::Trader)
                        >
                            <span class="role-name">"Trader"</span>
                            <span class="role-detail">"Market access & analysis"</span>
                        </button>
                        <button
                            type="button"
                            class="role-card"
                            class:selected=move || form.get().role == Some(Role::Admin)
                            on:click=move |_| select_role(Role::Admin)
                        >
                            <span class="role-name">"Admin"</span>
                            <span class="role-detail">"Platform management"</span>
                        </button>
                    </div>

                    <label class="remember">
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().remember_me
                            on:change=move |ev| {
                                form.update(|fields| fields.remember_me = event_target_checked(&ev))
                            }
                        />
                        "Remember username"
                    </label>

                    <button
                        type="submit"
                        class="login-button"
                        disabled=move || state.get().is_submitting()
                    >
                        {move || if state.get().is_submitting() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
            </div>

            <div class="info-card">
                <h2>"Welcome to ReturnoScope"</h2>
                <p>
                    "Your comprehensive platform for portfolio management, market "
                    "analysis, and financial valuations. Access real-time data and "
                    "sophisticated analysis tools all in one place."
                </p>
                <div class="connect">
                    <span>"Connect with us"</span>
                    <a
                        href="https://linkedin.com/in/returnoscope"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "LinkedIn"
                    </a>
                    <a
                        href="https://instagram.com/returnoscope"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "Instagram"
                    </a>
                </div>
            </div>

            <p class="demo-note">"Demo platform - Use any username to continue"</p>
        </div>
    }
}
