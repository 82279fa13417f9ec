use anyhow::Result;
use clap::Parser;
use fishtank_core::init_logging;
use fishtank_lib::app::audio::{AudioSystem, TerminalBellDriver};
use fishtank_lib::app::headless::{self, parse_drop, HeadlessOptions};
use fishtank_lib::app::{App, ShutdownManager};
use fishtank_lib::model::persistence;
use fishtank_tui::Tui;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the tank in
    #[arg(short, long, value_enum, default_value = "tui")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// RNG seed, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks to simulate in headless mode
    #[arg(long, default_value_t = 1000)]
    ticks: u64,

    /// Drop a pellet at X,Y before the first tick (headless, repeatable)
    #[arg(long = "drop", value_parser = parse_drop)]
    drops: Vec<(f64, f64)>,

    /// Write the final snapshot as JSON
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Ring the terminal bell on chomps
    #[arg(long)]
    sound: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Tui,
    Headless,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    // The TUI owns the terminal, so only headless runs log to it.
    if matches!(args.mode, Mode::Headless) {
        init_logging("info");
    }

    let mut config = App::load_config(&args.config);
    if args.seed.is_some() {
        config.tank.seed = args.seed;
    }

    match args.mode {
        Mode::Headless => {
            let options = HeadlessOptions {
                ticks: args.ticks,
                drops: args.drops,
                viewport: None,
            };
            let report = headless::run(config, &options)?;
            if let Some(path) = &args.snapshot {
                persistence::save_snapshot(&report.snapshot, path)?;
            }
            let stats = report.snapshot.stats;
            println!(
                "tick {} | fish {} | food {} | eaten {} | spawned {} | expired {} | seed {}",
                report.snapshot.tick,
                report.snapshot.fish.len(),
                report.snapshot.food.len(),
                stats.eaten,
                stats.spawned,
                stats.expired,
                report.snapshot.seed
            );
        }
        Mode::Tui => {
            let audio = if args.sound {
                AudioSystem::with_driver(Box::new(TerminalBellDriver::default()))
            } else {
                AudioSystem::new()
            };
            let mut app = App::new(config, audio)?;
            app.snapshot_path = args.snapshot;

            let shutdown = ShutdownManager::new();
            shutdown.install_ctrl_c_handler();

            let mut tui = Tui::new()?;
            app.last_tank_rect = tui.init()?;
            let res = app.run(&mut tui, &shutdown).await;
            tui.exit()?;

            shutdown.cleanup(&app.tank.snapshot(), app.snapshot_path.as_deref())?;

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            }
        }
    }

    Ok(())
}
