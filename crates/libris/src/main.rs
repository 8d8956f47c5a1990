use crate::prelude::*;
use clap::Parser;

mod config;
mod error;
mod logging;
mod prelude;
mod server;
mod store;
mod url;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Book records and URL normalization over HTTP"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "LIBRIS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Run the HTTP API
    Serve(crate::server::ServeOptions),

    /// Normalize a URL (canonical, redirection, all)
    Url(crate::url::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Before parsing, so `.env` values reach the clap `env` fallbacks.
    let env_file = config::load_env(config::AppEnv::current());

    let app = App::parse();
    logging::init(app.global.verbose);
    config::log_env_file(&env_file);

    match app.command {
        SubCommands::Serve(options) => crate::server::run(options, app.global).await,
        SubCommands::Url(sub_app) => crate::url::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
