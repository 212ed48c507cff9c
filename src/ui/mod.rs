//! GUI panels and application state.

pub mod app;
pub mod applicant_panel;
pub mod components;
pub mod dashboard;
pub mod employee_panel;
pub mod inputs;
pub mod login;
pub mod setup_wizard;
pub mod table_view;

pub use app::App;
pub use setup_wizard::{SetupApp, SetupWizard};
