#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use abalone_replay::{
    init_logging, load_log, render_view, run_session, GameLog, GameSummary, LogFile,
    ReplayCursor, RenderStyle,
};
#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about = "Step through recorded Abalone games", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Print debug records to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Step through a game interactively.
    View {
        file: PathBuf,
        #[arg(long, help = "Ply to start at (clamped to the final ply)")]
        ply: Option<usize>,
        #[arg(long, help = "Draw empty spaces as '.'")]
        ascii: bool,
    },
    /// Print a single ply, or every ply, and exit.
    Show {
        file: PathBuf,
        #[arg(long, conflicts_with = "all", help = "Ply to print (default: final ply)")]
        ply: Option<usize>,
        #[arg(long)]
        all: bool,
        #[arg(long, help = "Draw empty spaces as '.'")]
        ascii: bool,
    },
    /// Print a JSON summary of a game.
    Summary {
        file: PathBuf,
        #[arg(long)]
        pretty: bool,
    },
    /// Re-emit a log (for example a `results/*.js` script) as plain JSON.
    Convert {
        file: PathBuf,
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[cfg(feature = "std")]
fn read_log(path: &Path) -> anyhow::Result<GameLog> {
    load_log(path).with_context(|| format!("cannot open replay {}", path.display()))
}

#[cfg(feature = "std")]
fn style(ascii: bool) -> RenderStyle {
    if ascii {
        RenderStyle::ascii()
    } else {
        RenderStyle::default()
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    match cli.command {
        Commands::View { file, ply, ascii } => {
            let game = read_log(&file)?;
            let mut cursor = ReplayCursor::new(&game);
            if let Some(ply) = ply {
                cursor.seek(ply);
            }
            let stdin = std::io::stdin();
            run_session(&mut cursor, &style(ascii), stdin.lock(), std::io::stdout())?;
        }
        Commands::Show {
            file,
            ply,
            all,
            ascii,
        } => {
            let game = read_log(&file)?;
            let render_style = style(ascii);
            let mut cursor = ReplayCursor::new(&game);
            if all {
                loop {
                    println!("{}", render_view(&cursor.current_view(), &render_style));
                    if !cursor.step_forward() {
                        break;
                    }
                }
            } else {
                cursor.seek(ply.unwrap_or(game.last_index()));
                println!("{}", render_view(&cursor.current_view(), &render_style));
            }
        }
        Commands::Summary { file, pretty } => {
            let game = read_log(&file)?;
            let summary = GameSummary::from(&game);
            let json = if pretty {
                serde_json::to_string_pretty(&summary)?
            } else {
                serde_json::to_string(&summary)?
            };
            println!("{}", json);
        }
        Commands::Convert { file, output } => {
            let game = read_log(&file)?;
            let json = serde_json::to_string(&LogFile::from(&game))?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("cannot write {}", path.display()))?;
                    log::info!("wrote {}", path.display());
                }
                None => println!("{}", json),
            }
        }
    }
    Ok(())
}
