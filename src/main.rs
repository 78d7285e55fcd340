use pwlab::commands::Cli;
use pwlab::libs::logging;

fn main() -> anyhow::Result<()> {
    logging::init();
    Cli::run()
}
