use anyhow::Context;
use branching_rs::lesson::catalog;
use branching_rs::lesson::runner::{Runner, RunnerConfig, DEFAULT_SEPARATOR};
use clap::Parser;
use dotenv::dotenv;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Omit the separator after the last block
    #[arg(long)]
    no_trailing_separator: bool,

    /// Run only the block with this title
    #[arg(short, long)]
    block: Option<String>,

    /// Print the block titles and exit
    #[arg(short, long)]
    list: bool,

    /// Line printed after each block
    #[arg(long, env = "BRANCHING_SEPARATOR", default_value = DEFAULT_SEPARATOR)]
    separator: String,
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    let lesson = catalog::builtin().context("failed to load built-in lesson")?;
    log::info!(
        "Loaded lesson '{}' with {} blocks",
        lesson.name,
        lesson.blocks.len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list {
        for block in &lesson.blocks {
            writeln!(out, "{}", block.title)?;
        }
        return Ok(());
    }

    let runner = Runner::new(RunnerConfig {
        separator: args.separator,
        trailing_separator: !args.no_trailing_separator,
    });

    match args.block {
        Some(title) => {
            let block = lesson.block(&title)?;
            runner.run_block(block, &mut out)?;
        }
        None => runner.run(lesson, &mut out)?,
    }

    Ok(())
}
