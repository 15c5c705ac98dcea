use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use prefixer::ast::Tree;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Print a boolean expression in simplified prefix notation",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// File whose first line holds the expression
    #[arg(value_name = "FILE", allow_hyphen_values = true)]
    input: PathBuf,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Warn,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    log::info!("Reading expression from {:?}", cli.input);
    let file = File::open(&cli.input).wrap_err("Failed to open file")?;
    let query = BufReader::new(file).lines().next().transpose()?.unwrap_or_default();

    let mut tree = Tree::parse(&query).map_err(|e| {
        log::debug!("{:?}: {}", query, e);
        eyre!("Parse error")
    })?;
    tree.simplify();

    let mut stdout = std::io::stdout().lock();
    tree.write_prefix(&mut stdout)?;
    writeln!(stdout)?;

    Ok(())
}
