//! jobgrid - job request spreadsheet shell

mod runtime;

use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use jobgrid::cli::CliArgs;
use jobgrid::config::GridConfig;
use jobgrid::model::AppModel;

use runtime::App;

fn main() -> Result<()> {
    jobgrid::tracing::init();

    let startup = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;

    if startup.log_path {
        match jobgrid::config_paths::log_file() {
            Some(path) => println!("{}", path.display()),
            None => println!("No config directory available"),
        }
        return Ok(());
    }

    let mut config = GridConfig::load();
    if let Some(rows) = startup.rows {
        config.default_rows = rows;
    }

    if startup.write_config {
        config.save().map_err(|e| anyhow!(e))?;
        return Ok(());
    }

    let mut app = App::new(AppModel::new(config), !startup.quiet);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(path) = startup.file_path() {
        app.open(path.clone(), &mut out)?;
    }

    match &startup.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            app.run(&mut BufReader::new(file), &mut out, false)?;
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            app.run(&mut stdin.lock(), &mut out, interactive)?;
        }
    }

    out.flush()?;
    Ok(())
}
