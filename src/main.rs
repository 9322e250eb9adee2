mod cli;
mod config;
mod error;
mod generators;
mod logging;
mod nix;
mod output;
mod packages;
mod runner;
mod templates;

fn main() -> anyhow::Result<()> {
    let app = cli::parse();
    logging::init(app.verbose);
    runner::run(app)
}
