//! Gomoku GUI
//!
//! A graphical interface for playing Gomoku against the computer.

use clap::Parser;

use gomoku::search::MAX_DEPTH;
use gomoku::ui::GomokuApp;
use gomoku::{EngineConfig, Stone};

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Play Gomoku on a 15x15 board against the computer")]
struct Cli {
    /// Search depth in plies below the computer's move
    #[arg(long, default_value_t = MAX_DEPTH)]
    depth: u8,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Chance in percent of switching to an equally good later move
    #[arg(long = "tie-break", default_value_t = 30)]
    tie_break: u8,

    /// Threads used to score the computer's candidate moves
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Play White and let the computer open as Black
    #[arg(long)]
    human_white: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = EngineConfig {
        computer: if cli.human_white { Stone::Black } else { Stone::White },
        max_depth: cli.depth,
        tie_break_percent: cli.tie_break,
        seed: cli.seed,
        threads: cli.threads,
    };
    config.validate()?;
    log::info!("starting with {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([760.0, 600.0])
            .with_title("Gomoku - Human vs AI"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)?))),
    )?;
    Ok(())
}
