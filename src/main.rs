mod common;
mod config;
mod router;
mod session;
mod ui;

use clap::Parser;
use config::ConfigOverrides;
use dotenvy::dotenv;
use eframe::egui;
use router::AppRouter;
use session::LocalSession;
use ui::ChatApp;

#[derive(Parser)]
#[command(name = "local_chat", version, about = "Local echo chat window")]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Display name of the signed-in user
    #[arg(long, env = "CHAT_USER_NAME", value_name = "NAME")]
    user_name: Option<String>,
    /// Avatar image shown next to messages
    #[arg(long, env = "CHAT_AVATAR_URL", value_name = "URL")]
    avatar_url: Option<String>,
    /// Route opened at startup (`/` or `/chat`)
    #[arg(long, value_name = "PATH")]
    route: Option<String>,
}

fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let mut app_config = config::load_config(&cli.config);
    app_config.apply_overrides(ConfigOverrides {
        user_name: cli.user_name,
        avatar_url: cli.avatar_url,
        start_route: cli.route,
    });

    let default_avatar = app_config
        .user
        .as_ref()
        .and_then(|user| user.avatar_url.clone());
    let session = LocalSession::new(app_config.user.clone());
    let router = AppRouter::new(&app_config.start_route);

    log::info!(
        "Starting at {} as {}",
        app_config.start_route,
        app_config
            .user
            .as_ref()
            .and_then(|user| user.name.as_deref())
            .unwrap_or("<anonymous>")
    );

    let app = ChatApp::new(Box::new(session), Box::new(router), default_avatar);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(app_config.window_title.clone())
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([320.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        &app_config.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
