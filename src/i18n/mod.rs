// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at build time. A directory
//! passed with `--i18n-dir` can add locales or override embedded ones.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Runtime language switching
//! - Missing keys render as `MISSING: <key>` so gaps stay visible

pub mod fluent;
