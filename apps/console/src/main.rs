use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use client_core::{BridgeController, PanelVisibility};
use shared::domain::{InputMode, Shortcut};
use tracing::info;

mod config;

use config::load_settings;

#[derive(Parser, Debug)]
#[command(name = "console", about = "Remote control for an input bridge device")]
struct Args {
    /// Bridge base URL; overrides bridge.toml and BRIDGE_SERVER_URL.
    #[arg(long)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Switch the bridge input mode.
    Mode { value: String },
    /// Type free text on the paired machine.
    Send { text: String },
    /// Send a raw command string.
    Command { value: String },
    /// Send a well-known shortcut.
    Shortcut { action: ShortcutArg },
    /// Fetch the current mode and show the panel a frontend would present.
    Status,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShortcutArg {
    OpenSafari,
    SwitchTab,
    CloseApp,
    Minimize,
}

impl From<ShortcutArg> for Shortcut {
    fn from(arg: ShortcutArg) -> Self {
        match arg {
            ShortcutArg::OpenSafari => Shortcut::OpenSafari,
            ShortcutArg::SwitchTab => Shortcut::SwitchTab,
            ShortcutArg::CloseApp => Shortcut::CloseApp,
            ShortcutArg::Minimize => Shortcut::Minimize,
        }
    }
}

fn describe_panels(panels: PanelVisibility) -> &'static str {
    if panels.keyboard {
        "keyboard panel"
    } else if panels.mouse {
        "mouse panel"
    } else {
        "no panel"
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(url) = args.server_url {
        settings.server_url = url;
    }
    info!(server_url = %settings.server_url, "using bridge");

    match args.command {
        Command::Mode { value } => {
            let controller = BridgeController::new(settings.server_url)?;
            let mode = InputMode::from(value.as_str());
            let panels = controller.change_mode(mode.clone()).await?;
            println!("Mode set to {mode}; frontend shows {}.", describe_panels(panels));
        }
        Command::Send { text } => {
            let controller = BridgeController::new(settings.server_url)?;
            controller.send_text(&text).await?;
            println!("Sent {} bytes of text.", text.len());
        }
        Command::Command { value } => {
            let controller = BridgeController::new(settings.server_url)?;
            controller.send_command(&value).await?;
            println!("Sent command {value}.");
        }
        Command::Shortcut { action } => {
            let controller = BridgeController::new(settings.server_url)?;
            let shortcut = Shortcut::from(action);
            controller.send_shortcut(shortcut).await?;
            println!("Sent shortcut {}.", shortcut.as_str());
        }
        Command::Status => {
            let controller = BridgeController::connect(settings.server_url).await?;
            let panels = controller.panels().await;
            if let Some(mode) = controller.current_mode().await {
                println!(
                    "Bridge reports mode {mode}; frontend shows {}.",
                    describe_panels(panels)
                );
            }
        }
    }

    Ok(())
}
