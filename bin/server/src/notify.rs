//! Transient toast notifications.
//!
//! Pages push notices through the [`Toasts`] context handle; the
//! [`Toaster`] component, mounted once at the application root, renders
//! them. In the browser each toast dismisses itself after a few seconds
//! and can also be clicked away.

use leptos::prelude::*;

/// How long a toast stays on screen before dismissing itself.
#[cfg(feature = "hydrate")]
const DISMISS_AFTER: std::time::Duration = std::time::Duration::from_secs(4);

/// Severity of a notice, reflected in its styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// CSS class rendered on the toast element.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
        }
    }
}

/// A single transient notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: u64,
    severity: Severity,
    message: String,
}

impl Toast {
    /// Returns the notice severity.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the notice text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Handle for pushing notices, provided as context by the application root.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toasts {
    /// Creates an empty toast list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Shows a success notice.
    pub fn success(&self, message: impl Into<String>) {
        self.push(Severity::Success, message.into());
    }

    /// Shows an error notice.
    pub fn error(&self, message: impl Into<String>) {
        self.push(Severity::Error, message.into());
    }

    /// Removes a notice by id. Removing a missing id is a no-op.
    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|toast| toast.id != id));
    }

    fn push(&self, severity: Severity, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.items.update(|items| {
            items.push(Toast {
                id,
                severity,
                message,
            });
        });

        #[cfg(feature = "hydrate")]
        {
            let toasts = *self;
            leptos::leptos_dom::helpers::set_timeout(
                move || toasts.dismiss(id),
                DISMISS_AFTER,
            );
        }
    }

    fn items(&self) -> RwSignal<Vec<Toast>> {
        self.items
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves the toast handle provided by the application root.
///
/// # Panics
///
/// Panics if called outside a tree under [`App`](crate::app::App).
#[must_use]
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Renders the active notices. Mount once, near the application root.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster">
            {move || {
                toasts
                    .items()
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=format!("toast {}", toast.severity.class())
                                on:click=move |_| toasts.dismiss(id)
                            >
                                {toast.message.clone()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
