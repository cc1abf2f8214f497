//! Theme Module
//!
//! Colors and frame builders for the authdesk desktop client: a dark slate
//! background with a blue accent.
//!
//! # Usage
//!
//! ```rust,ignore
//! use authdesk::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_PRIMARY, "Users");
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
