//! Page components for the application.
//!
//! Each page is a Leptos component that renders a specific route.

pub mod admin_dashboard;
pub mod home;
pub mod login;

// Re-export all page components for convenient access
pub use admin_dashboard::AdminDashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
