//! Create/edit dialog and delete confirmation

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::UserRole;

fn field(ui: &mut egui::Ui, label: &str, value: &mut String, password: bool) {
    ui.label(egui::RichText::new(label).color(colors::TEXT_SECONDARY));
    ui.add(
        egui::TextEdit::singleline(value)
            .password(password)
            .desired_width(280.0),
    );
    ui.end_row();
}

pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(form) = state.user_form.as_mut() else {
        return;
    };

    let mut submit = false;
    let mut cancel = false;

    egui::Window::new(form.title())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(styles::modal_frame())
        .show(ctx, |ui| {
            egui::Grid::new("user_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    field(ui, "Email", &mut form.email, false);
                    field(ui, "First name", &mut form.first_name, false);
                    field(ui, "Last name", &mut form.last_name, false);
                    let password_label = if form.is_edit() {
                        "New password"
                    } else {
                        "Password"
                    };
                    field(ui, password_label, &mut form.password, true);

                    ui.label(egui::RichText::new("Role").color(colors::TEXT_SECONDARY));
                    ui.horizontal(|ui| {
                        ui.radio_value(&mut form.role, UserRole::User, "user");
                        ui.radio_value(&mut form.role, UserRole::Admin, "admin");
                    });
                    ui.end_row();

                    ui.label(egui::RichText::new("Active").color(colors::TEXT_SECONDARY));
                    ui.checkbox(&mut form.is_active, "");
                    ui.end_row();
                });

            if form.is_edit() {
                ui.colored_label(colors::TEXT_SECONDARY, "Leave the password empty to keep it.");
            }
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui.add(styles::primary_button("Save")).clicked() {
                    submit = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if submit {
        state.submit_user_form();
    } else if cancel {
        state.user_form = None;
    }
}

pub fn render_delete_confirmation(ctx: &egui::Context, state: &mut AppState) {
    let Some(id) = state.pending_delete else {
        return;
    };
    let email = state
        .session()
        .users
        .iter()
        .find(|u| u.id == id)
        .map(|u| u.email.clone())
        .unwrap_or_else(|| format!("user #{}", id));

    let mut confirm = false;
    let mut cancel = false;

    egui::Window::new("Delete user")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(styles::modal_frame())
        .show(ctx, |ui| {
            ui.colored_label(colors::TEXT_PRIMARY, format!("Delete {}? This cannot be undone.", email));
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.add(styles::danger_button("Delete")).clicked() {
                    confirm = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if confirm {
        state.confirm_delete();
    } else if cancel {
        state.pending_delete = None;
    }
}
