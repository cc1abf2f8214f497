//! User administration table

use eframe::egui;

use crate::egui_app::session::users;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::{PublicUser, UserRole};

enum RowAction {
    Edit(PublicUser),
    Delete(i64),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("Users")
                .size(22.0)
                .strong()
                .color(colors::TEXT_PRIMARY),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add(styles::primary_button("New user")).clicked() {
                state.open_create_form();
            }
            if ui.button("Refresh").clicked() {
                state.refresh_users();
            }
        });
    });
    ui.add_space(12.0);

    let own_id = state.session().user.as_ref().map(|u| u.id);
    let mut action = None;

    styles::card_frame().show(ui, |ui| {
        let accounts = users(state.session());
        if accounts.is_empty() {
            ui.colored_label(colors::TEXT_SECONDARY, "No users loaded");
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("users_table")
                .num_columns(6)
                .striped(true)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    for header in ["Name", "Email", "Role", "Status", "Created", ""] {
                        ui.label(egui::RichText::new(header).strong().color(colors::TEXT_SECONDARY));
                    }
                    ui.end_row();

                    for user in accounts {
                        ui.colored_label(colors::TEXT_PRIMARY, user.full_name());
                        ui.colored_label(colors::TEXT_PRIMARY, user.email.as_str());

                        let role_color = match user.role {
                            UserRole::Admin => colors::ROLE_ADMIN,
                            UserRole::User => colors::ROLE_USER,
                        };
                        ui.colored_label(role_color, user.role.as_str());

                        if user.is_active {
                            ui.colored_label(colors::SUCCESS, "active");
                        } else {
                            ui.colored_label(colors::WARNING, "inactive");
                        }

                        ui.colored_label(
                            colors::TEXT_SECONDARY,
                            user.created_at.format("%Y-%m-%d").to_string(),
                        );

                        ui.horizontal(|ui| {
                            if ui.small_button("Edit").clicked() {
                                action = Some(RowAction::Edit(user.clone()));
                            }
                            // Deleting yourself would end the session mid-request
                            let deletable = own_id != Some(user.id);
                            if ui
                                .add_enabled(deletable, egui::Button::new("Delete").small())
                                .clicked()
                            {
                                action = Some(RowAction::Delete(user.id));
                            }
                        });
                        ui.end_row();
                    }
                });
        });
    });

    match action {
        Some(RowAction::Edit(user)) => state.open_edit_form(&user),
        Some(RowAction::Delete(id)) => state.request_delete(id),
        None => {}
    }
}
