// SPDX-License-Identifier: MPL-2.0
//! Media the page pulls in from outside the binary.
//!
//! - [`remote`]: images fetched over HTTP into an LRU cache
//! - [`documents`]: PDFs copied out of the documents directory

pub mod documents;
pub mod remote;

pub use remote::{ImageCache, Slot};
