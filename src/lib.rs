// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` renders a data science portfolio as a native desktop page
//! built with the Iced GUI framework.
//!
//! The page scrolls through hero, about, experience, skills and projects
//! sections that fade in once as they enter the viewport, and opens a
//! keyboard-driven carousel of published visualizations.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub use app::config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
