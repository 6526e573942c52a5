//! # prevacare-core
//!
//! Platform-independent core of the PrevaCare landing page.
//!
//! The landing page itself is a Leptos CSR application (see the `landing`
//! crate); everything in here compiles and tests on native targets, so the
//! page logic can be exercised without a browser.
//!
//! ## Architecture
//!
//! - [`content`] - static, immutable content tables (features, stats, copy)
//! - [`showcase`] - scroll-driven active-feature / pinned state machine
//! - [`error`] - error types for the showcase and scroll geometry
//! - [`index`] - serialisable snapshot of every content table
//!
//! ## Quick Start
//!
//! ```rust
//! use prevacare_core::showcase::{ScrollGeometry, ScrollUpdate, Showcase};
//!
//! let mut showcase = Showcase::default();
//! showcase.advance();
//! assert_eq!(showcase.active(), 1);
//!
//! // Section scrolled halfway through its pinned extent
//! let geometry = ScrollGeometry::new(-1500.0, 4000.0, 1000.0);
//! let update = showcase.on_scroll(geometry).unwrap();
//! assert_eq!(update, ScrollUpdate::Tracked { progress: 0.5, active: 2 });
//! ```
//!
//! ---
//!
//! Developed with ♥ by The PrevaCare Web Team (c)2025

#![warn(missing_docs)]

pub mod content;
pub mod error;
pub mod index;
pub mod showcase;

pub use content::{FEATURES, FeatureDescriptor, Glyph};
pub use error::{GeometryError, ShowcaseError};
pub use showcase::{ScrollGeometry, ScrollUpdate, Showcase};

/// Brand name used across the page and the content index (single source of truth)
pub const BRAND: &str = "PrevaCare";

/// Version string shown in the page footer and content index
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
