//! Tests for the app module.
//!
//! This module is organized into submodules by functionality:
//! - `flow` - Submission lifecycle through the scripted analysis service
//! - `helpers` - Shared test utilities
//! - `input` - Key bindings, picker and paste handling
//! - `persistence` - Display preference persistence
//! - `ui` - Rendering of slots, trigger, result region and modals

#[allow(clippy::unwrap_used, clippy::expect_used)]
mod flow;
#[allow(clippy::unwrap_used, clippy::expect_used)]
pub mod helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod ui;
