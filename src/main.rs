//! `haigo`: a Go (Weiqi) engine exposing a line-oriented controller
//! protocol over stdin/stdout.
//!
//! Logging goes to a `flexi_logger` stderr sink so protocol responses on
//! stdout stay uncontaminated, with an env-or-default level and adaptive
//! formatting.

use anyhow::Context;
use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};

use haigo::board::Color;
use haigo::constants::{BOARD_SIZE_DEFAULT, DEFAULT_SEARCH_DEPTH};
use haigo::protocol::Controller;

/// `haigo`: a Go engine with a line-oriented controller protocol.
#[derive(Parser)]
#[command(name = "haigo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Starting board size, in [2, 25].
    #[arg(long, default_value_t = BOARD_SIZE_DEFAULT)]
    size: u8,

    /// Fixed search depth passed to `genmove`.
    #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    depth: u32,

    /// Log level (`error`, `warn`, `info`, `debug`, `trace`), or a
    /// `flexi_logger` spec string. Overridden by `RUST_LOG` if set.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Play out a short scripted demo on a small board instead of reading
    /// commands from stdin.
    #[arg(long)]
    demo: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _logger = Logger::try_with_env_or_str(&cli.log_level)
        .context("invalid log level")?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(if cfg!(debug_assertions) {
            AdaptiveFormat::WithThread
        } else {
            AdaptiveFormat::Default
        })
        .start()
        .context("failed to start logger")?;

    if cli.demo {
        run_demo(cli.size, cli.depth)?;
        return Ok(());
    }

    log::info!("haigo starting, board size {}, search depth {}", cli.size, cli.depth);

    let mut controller = Controller::new();
    controller
        .engine_mut()
        .boardsize(cli.size)
        .context("requested board size is unacceptable")?;
    controller
        .engine_mut()
        .set_search_depth(cli.depth)
        .context("requested search depth exceeds MAX_SEARCH_DEPTH")?;

    controller.run();
    log::info!("haigo exiting");
    Ok(())
}

/// Plays a short scripted game and prints the resulting board, useful for
/// a quick sanity check without driving the protocol over stdin.
fn run_demo(size: u8, depth: u32) -> anyhow::Result<()> {
    let mut controller = Controller::new();
    controller.engine_mut().boardsize(size).context("invalid demo board size")?;
    controller.engine_mut().set_search_depth(depth).context("invalid demo search depth")?;

    let engine = controller.engine_mut();
    engine.play(Color::Black, size / 2, size / 2).context("demo move rejected")?;
    let stats = engine.genmove(Color::White);
    log::info!("genmove chose {:?} in {:?}", stats.mv, stats.duration);

    println!("{}", engine.render());
    Ok(())
}
