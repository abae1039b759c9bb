use tasksync::commands::Cli;
use tasksync::libs::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    Cli::menu().await
}
