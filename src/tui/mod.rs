//! Terminal host view for the onboarding wizard.

mod app;
mod form;
mod overlay;
mod screens;

pub use app::run;
