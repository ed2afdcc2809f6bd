//! # iguide-core - Guide Content and Shared Infrastructure
//!
//! Foundation crate for Insight Guide. Provides the static guide content, the
//! document model every renderer draws from, error handling and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`TargetOs`] - Two-valued OS selection (unix-like or Windows)
//! - [`AppPhase`] - Application lifecycle phase
//!
//! ### Content (`content`)
//! - [`Step`], [`VenvStep`], [`Snippet`], [`Tip`] - Immutable content records
//! - [`CopyCommand`], [`CommandText`] - Copyable commands, optionally per-OS
//!
//! ### Document (`document`)
//! - [`Document`] - The guide laid out as ordered [`Block`]s for one OS
//! - [`CopyTarget`] - A copyable command as currently displayed
//!
//! ### Plain Text (`plain`)
//! - [`plain::render`] - Deterministic text export of a document
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use iguide_core::prelude::*;
//! ```

pub mod content;
pub mod document;
pub mod error;
pub mod logging;
pub mod plain;
pub mod prelude;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use content::{CommandText, CopyCommand, Prompt, Snippet, Step, Tip, VenvStep};
pub use document::{
    Block, CalloutKind, CopyTarget, Document, LineKind, SectionIcon, Window, WindowLabel,
    WindowLine,
};
pub use error::{Error, Result, ResultExt};
pub use types::{AppPhase, TargetOs};
