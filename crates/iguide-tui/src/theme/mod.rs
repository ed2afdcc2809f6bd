//! Centralized theme for the guide.
//!
//! This module provides:
//! - `palette`: Raw color constants
//! - `styles`: Semantic style builder functions
//! - `icons`: Nerd Font glyph constants with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
