use anyhow::{Result, ensure};
use clap::Parser;
use torus_snake::game::GameConfig;
use torus_snake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "torus-snake")]
#[command(version, about = "Snake on a wraparound grid, in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "32")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "24")]
    height: usize,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    ensure!(
        cli.width >= 4 && cli.height >= 4,
        "grid must be at least 4x4, got {}x{}",
        cli.width,
        cli.height
    );

    let config = GameConfig::new(cli.width, cli.height);
    let mut game = PlayMode::new(config);
    game.run().await
}
