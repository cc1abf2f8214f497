//! Theme Styling Functions
//!
//! Global visuals plus the frames used by the views.

use eframe::egui::{self, Color32, CornerRadius, Stroke};

use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::dark();

    style.visuals.window_fill = colors::SURFACE;
    style.visuals.window_stroke = Stroke::new(1.0, colors::BORDER);
    style.visuals.panel_fill = colors::BG_DARK;
    style.visuals.extreme_bg_color = colors::INPUT_BG;
    style.visuals.faint_bg_color = colors::SURFACE_STRIPE;

    style.visuals.widgets.noninteractive.bg_fill = colors::SURFACE;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);
    style.visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors::BORDER);

    style.visuals.widgets.inactive.bg_fill = colors::SURFACE_HOVER;
    style.visuals.widgets.inactive.weak_bg_fill = colors::SURFACE_HOVER;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.hovered.bg_fill = colors::ACCENT_HOVER;
    style.visuals.widgets.hovered.weak_bg_fill = colors::ACCENT_HOVER;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.active.bg_fill = colors::ACCENT;
    style.visuals.widgets.active.weak_bg_fill = colors::ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.selection.bg_fill = colors::ACCENT;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    ctx.set_style(style);
}

/// Frame for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Frame for the central panel
pub fn main_panel_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(16))
}

/// Frame for the login form and the user table
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SURFACE)
        .stroke(Stroke::new(1.0, colors::BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(16))
}

/// Frame for the error banner
pub fn error_banner_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgba_unmultiplied(
            colors::ERROR.r(),
            colors::ERROR.g(),
            colors::ERROR.b(),
            40,
        ))
        .stroke(Stroke::new(1.0, colors::ERROR))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Frame for modal dialogs
pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SURFACE)
        .stroke(Stroke::new(2.0, colors::BORDER))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::same(20))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(60),
        })
}

/// Filled accent button
pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(colors::TEXT_PRIMARY))
        .fill(colors::ACCENT)
        .stroke(Stroke::NONE)
        .corner_radius(CornerRadius::same(6))
}

/// Button for destructive actions
pub fn danger_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(colors::TEXT_PRIMARY))
        .fill(colors::ERROR)
        .stroke(Stroke::NONE)
        .corner_radius(CornerRadius::same(6))
}
