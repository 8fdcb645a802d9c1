mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "grip",
    version,
    about = "Move and resize macOS windows by holding modifier keys"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Start the gesture daemon
    Start,
    /// Stop the gesture daemon
    Stop,
    /// Show whether the daemon is running and which mode it is in
    Status,
    /// Check configuration, permissions and daemon health
    Doctor,
    /// Manage starting Grip at login
    Autostart {
        #[command(subcommand)]
        command: AutostartCommands,
    },
    /// Debugging and inspection tools
    Debug {
        #[command(subcommand)]
        command: DebugCommands,
    },
    /// Run the daemon (internal, not for direct use)
    #[command(hide = true)]
    Daemon,
}

#[derive(Subcommand)]
enum AutostartCommands {
    /// Start Grip when you log in
    Enable,
    /// Stop starting Grip at login
    Disable,
    /// Show whether Grip starts at login
    Status,
}

#[derive(Subcommand)]
enum DebugCommands {
    /// Watch modifier changes and gesture modes in real time
    Events,
    /// Show the window under the cursor
    HitTest,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Start => commands::start::execute(),
        Commands::Stop => commands::stop::execute(),
        Commands::Status => commands::status::execute(),
        Commands::Doctor => commands::doctor::execute(),
        Commands::Daemon => commands::daemon::execute(),
        Commands::Autostart { command } => match command {
            AutostartCommands::Enable => commands::autostart::enable(),
            AutostartCommands::Disable => commands::autostart::disable(),
            AutostartCommands::Status => commands::autostart::status(),
        },
        Commands::Debug { command } => match command {
            DebugCommands::Events => commands::debug::events::execute(),
            DebugCommands::HitTest => commands::debug::hit_test::execute(),
        },
    }
}
