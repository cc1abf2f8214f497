//! Color Constants
//!
//! Every color the client paints with lives here.

use eframe::egui::Color32;

/// Window background - Slate
pub const BG_DARK: Color32 = Color32::from_rgb(0x1E, 0x23, 0x2B);

/// Cards, tables and dialogs - Lighter slate
pub const SURFACE: Color32 = Color32::from_rgb(0x27, 0x2E, 0x38);

/// Table row hover
pub const SURFACE_HOVER: Color32 = Color32::from_rgb(0x31, 0x3A, 0x46);

/// Alternate table rows
pub const SURFACE_STRIPE: Color32 = Color32::from_rgb(0x2B, 0x33, 0x3E);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x15, 0x19, 0x1F);

/// Borders and separators
pub const BORDER: Color32 = Color32::from_rgb(0x3C, 0x46, 0x54);

/// Input background
pub const INPUT_BG: Color32 = Color32::from_rgb(0x18, 0x1D, 0x24);

/// Main text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xE6, 0xEA, 0xF0);

/// Labels and hints
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9A, 0xA5, 0xB4);

/// Primary buttons and selection
pub const ACCENT: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);

pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0x60, 0x9C, 0xF8);

/// Admin role badge
pub const ROLE_ADMIN: Color32 = Color32::from_rgb(0xA7, 0x8B, 0xFA);

/// User role badge
pub const ROLE_USER: Color32 = Color32::from_rgb(0x94, 0xA3, 0xB8);

/// Active account
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Errors and destructive actions
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Inactive account
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);
