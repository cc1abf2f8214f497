use eframe::egui;

use crate::egui_app::session::current_user;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::View;

pub mod dashboard_view;
pub mod login_view;
pub mod user_dialog;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_PRIMARY,
                    egui::RichText::new("authdesk").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);

                    if state.session().is_authenticated {
                        if ui.button("Logout").clicked() {
                            state.logout();
                            return;
                        }
                        if let Some(user) = current_user(state.session()) {
                            ui.colored_label(
                                colors::TEXT_SECONDARY,
                                format!("{} ({})", user.full_name(), user.role),
                            );
                        }
                    }

                    if state.session().loading {
                        ui.spinner();
                    }
                });
            });
        });
}

/// Shown above every view while the session carries an error
fn render_error_banner(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(message) = state.session().error.clone() else {
        return;
    };

    styles::error_banner_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.colored_label(colors::ERROR, message);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Dismiss").clicked() {
                    state.dismiss_error();
                }
            });
        });
    });
    ui.add_space(12.0);
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(styles::main_panel_frame())
        .show(ctx, |ui| {
            render_error_banner(ui, state);
            match state.current_view {
                View::Login => login_view::render(ui, state),
                View::Dashboard => dashboard_view::render(ui, state),
            }
        });

    user_dialog::render(ctx, state);
    user_dialog::render_delete_confirmation(ctx, state);
}
