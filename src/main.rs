use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use portico::api::lookup_user;
use portico::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use portico::models::AppState;
use portico::routes::build_router;
use portico::services::UserStore;

async fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);

    let client = reqwest::Client::builder()
        .user_agent(format!("Portico/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client");

    AppState {
        store: UserStore::new(config::get_data_dir()),
        client,
        lookup_base_url: config::get_lookup_base_url(),
    }
}

async fn start_server(state: AppState, host: &str, port: u16) {
    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_router(state);
    tracing::info!(%addr, "Starting Portico server");
    println!(
        "{} {}",
        yansi::Paint::new("Web server running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

#[derive(Parser)]
#[command(
    name = "portico",
    author,
    version,
    about = "Portico campus portal server",
    long_about = r#"Portico — record portal logins and gate the admin page.

The server exposes the login recorder endpoint (POST /api/login) and an
admin dashboard (GET /admin) protected by a role guard that resolves the
current user through the configured lookup service. Recorded logins are
kept in a JSON file under the data directory.

Examples:
  1) Build & run (dev):
      cargo run -- serve --host 127.0.0.1 --port 8080
  2) Validate configuration:
      portico check-config
  3) Inspect recorded logins:
      portico logins list
"#,
    after_help = "Use `portico <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Validate configuration (env vars / lookup service reachability)
    #[command(
        about = "Validate configuration and probe the lookup service.",
        long_about = "Validate environment variables required for the Portico server, and check that the configured user-lookup service answers a probe request."
    )]
    CheckConfig { env_file: Option<String> },
    /// Inspect recorded logins (users.json)
    Logins {
        #[command(subcommand)]
        sub: LoginCommands,
    },
}

#[derive(Subcommand)]
enum LoginCommands {
    #[command(
        about = "List recorded logins",
        long_about = "Enumerate logins stored in users.json (name, email, role, login time). Passwords are never printed."
    )]
    List,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // CLI parsing
    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // If no command provided, serve the web app by default
    if cli.command.is_none() {
        let state = build_state_from_env(None).await;
        start_server(state, DEFAULT_HOST, DEFAULT_PORT).await;
        return;
    }
    match cli.command.unwrap() {
        Commands::Serve {
            host,
            port,
            env_file,
        } => {
            let state = build_state_from_env(env_file.as_deref()).await;
            start_server(state, &host, port).await;
        }
        Commands::CheckConfig { env_file } => {
            let state = build_state_from_env(env_file.as_deref()).await;
            println!(
                "Lookup service: {}",
                yansi::Paint::new(&state.lookup_base_url).cyan()
            );
            println!(
                "Login store:    {}",
                yansi::Paint::new(state.store.file_path().display().to_string()).cyan()
            );
            // Probe the lookup service with a throwaway id; any decoded
            // answer (found or not) proves the endpoint is reachable.
            match lookup_user(&state.client, &state.lookup_base_url, 0.0).await {
                Ok(_) => {
                    println!(
                        "{}",
                        yansi::Paint::new("Configuration looks valid (lookup service answered)")
                            .green()
                    );
                    process::exit(0);
                }
                Err(e) => {
                    eprintln!(
                        "{}: {}",
                        yansi::Paint::new("Lookup service did not answer").red(),
                        e
                    );
                    process::exit(1);
                }
            }
        }
        Commands::Logins { sub } => {
            let state = build_state_from_env(None).await;
            match sub {
                LoginCommands::List => {
                    let records = state.store.load().await;

                    let mut table = Table::new();
                    table.load_preset(presets::UTF8_FULL);
                    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
                    table.set_content_arrangement(ContentArrangement::Dynamic);
                    if let Some((Width(w), _)) = terminal_size() {
                        table.set_width(w - 4);
                    }
                    table.set_header(vec!["Name", "Email", "Role", "Login Time"]);
                    for r in &records {
                        table.add_row(vec![
                            r.name.as_str(),
                            r.email.as_str(),
                            r.role.label(),
                            r.login_time.as_str(),
                        ]);
                    }
                    println!("\n{table}");
                    println!(
                        "\n{}",
                        yansi::Paint::new(format!("{} login(s) recorded", records.len())).dim()
                    );
                }
            }
        }
    }
}
