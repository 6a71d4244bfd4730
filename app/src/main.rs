use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use todo_app::App;

#[derive(Parser, Debug)]
#[command(name = "todo-app", version, about = "Terminal front-end for the remote todo service")]
struct Cli {
    /// Base URL of the todo API.
    #[arg(long, env = "API_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Default log filter, overridden by RUST_LOG.
    #[arg(long, default_value = "warn")]
    log: String,
}

fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;
    // Logs go to stderr so they never interleave with screen output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log)?;
    info!(base_url = %cli.base_url, "starting todo app");

    let app = App::new(&cli.base_url);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    app.run(&mut stdin.lock(), &mut stdout.lock())
}
