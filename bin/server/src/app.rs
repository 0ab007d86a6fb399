//! Main Leptos application component and routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::notify::{Toaster, Toasts};
use crate::pages::{AdminDashboardPage, HomePage, LoginPage};
use crate::storage::StorageContext;

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(StorageContext::browser());
    provide_context(Toasts::new());

    view! {
        <Title text="ReturnoScope"/>
        <Router>
            <Toaster/>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/admin-dashboard") view=AdminDashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}
