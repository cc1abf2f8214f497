/**
 * egui Native Desktop App - Main Entry Point
 *
 * Starts the authdesk desktop client. The server URL comes from
 * `CLIENT_API_URL` (default `http://127.0.0.1:3000`).
 */
use std::time::Duration;

use authdesk::egui_app::theme::styles;
use authdesk::egui_app::{views, AppState, Config};
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!("Using server {}", config.server_url());

    let mut state = AppState::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "authdesk",
        options,
        Box::new(move |cc| {
            styles::apply_global_theme(&cc.egui_ctx);

            let ctx = cc.egui_ctx.clone();
            state.dispatcher.set_notifier(move || ctx.request_repaint());
            state.start();

            Ok(Box::new(AuthdeskApp { state }))
        }),
    )?;

    Ok(())
}

struct AuthdeskApp {
    state: AppState,
}

impl eframe::App for AuthdeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        if self.state.session().loading {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
