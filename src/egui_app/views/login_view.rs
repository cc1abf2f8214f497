use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

const FORM_WIDTH: f32 = 320.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();

    ui.vertical_centered(|ui| {
        let top_space = (available_rect.height() - 300.0).max(0.0) / 2.0;
        ui.add_space(top_space);

        ui.label(
            egui::RichText::new("Sign in")
                .size(28.0)
                .strong()
                .color(colors::TEXT_PRIMARY),
        );
        ui.add_space(20.0);

        ui.allocate_ui(egui::vec2(FORM_WIDTH, 0.0), |ui| {
            styles::card_frame().show(ui, |ui| {
                ui.set_width(FORM_WIDTH);
                let loading = state.session().loading;

                ui.label(egui::RichText::new("Email").color(colors::TEXT_SECONDARY));
                ui.add(
                    egui::TextEdit::singleline(&mut state.email_input)
                        .hint_text("admin@example.com")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);

                ui.label(egui::RichText::new("Password").color(colors::TEXT_SECONDARY));
                let password = ui.add(
                    egui::TextEdit::singleline(&mut state.password_input)
                        .password(true)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(16.0);

                let submitted = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let clicked = ui
                    .add_enabled(
                        !loading,
                        styles::primary_button("Login").min_size(egui::vec2(FORM_WIDTH, 32.0)),
                    )
                    .clicked();

                if (clicked || submitted) && !loading {
                    state.handle_login();
                }

                if loading {
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(egui::RichText::new("Signing in...").color(colors::TEXT_SECONDARY));
                    });
                }
            });
        });
    });
}
