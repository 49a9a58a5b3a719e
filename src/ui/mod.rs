//! Terminal UI module using ratatui.
//!
//! This module provides the TUI rendering and input handling:
//!
//! - `render`: Main frame rendering and layout
//! - `input`: Keyboard event handling
//! - `styles`: Color schemes and text styling
//!
//! The UI is a pure consumer of the application snapshot: it reads
//! [`crate::app::App::snapshot`] each frame and translates key events
//! into intent calls on the `App`.

pub mod input;
pub mod render;
pub mod styles;
