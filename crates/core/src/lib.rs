//! Shared UI components for MyOrg apps.
//!
//! - [`components::LogoImage`]: the embedded organization logo
//! - [`theme`]: the light/dark theme provider and its accessor

pub mod components;
pub mod theme;
