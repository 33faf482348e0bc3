// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, exposes a `Message`, and reports what the application
//! must do through an effect or event value.
//!
//! # Interaction
//!
//! - [`gallery`] - Visualization carousel modal with keyboard navigation
//! - [`reveal`] - One-shot visibility reveal controller
//! - [`hero`] - Rotating word of the hero headline
//! - [`navbar`] - Fixed navigation bar
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Page
//!
//! - [`layout`] - Section bands and scroll geometry
//! - [`sections`] - Section views (hero, about, experience, skills, projects)
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod hero;
pub mod layout;
pub mod navbar;
pub mod notifications;
pub mod reveal;
pub mod sections;
pub mod styles;
pub mod theming;
