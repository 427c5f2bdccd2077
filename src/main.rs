//! Keycalc - A terminal calculator with a clickable keypad.
//!
//! # Usage
//!
//! ```bash
//! keycalc
//! keycalc --theme light --no-mouse
//! keycalc --eval '2+3*4'
//! ```

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use keycalc::app::App;
use keycalc::config::{
    ConfigFlags, ThemeMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, save_config_flags,
};
use keycalc::editor::{Evaluation, ExpressionEditor};
use keycalc::eval::EvalError;

/// A terminal calculator with a clickable keypad
#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about, long_about = None)]
struct Cli {
    /// Evaluate an expression, print the result and exit
    #[arg(short, long, value_name = "EXPR", allow_hyphen_values = true)]
    eval: Option<String>,

    /// Colour palette
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Do not capture the mouse (keypad clicks are ignored)
    #[arg(long)]
    no_mouse: bool,

    /// Write log output to a file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    fn flags(&self) -> ConfigFlags {
        ConfigFlags {
            no_mouse: self.no_mouse,
            theme: self.theme,
            log_file: self.log_file.clone(),
        }
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Type `expr` into a fresh editor and evaluate it.
///
/// Whitespace is skipped so shell-quoted input like `"1 + 2"` works.
fn run_eval(expr: &str) -> ExitCode {
    let mut editor = ExpressionEditor::new();
    for (pos, ch) in expr.char_indices() {
        if ch.is_whitespace() {
            continue;
        }
        let accepted = if ch == '.' {
            editor.append_decimal_point();
            true
        } else {
            editor.append_digit_or_operator(ch)
        };
        if !accepted {
            eprintln!("{}", EvalError::InvalidCharacter { ch, pos }.show(expr));
            return ExitCode::FAILURE;
        }
    }

    let typed = editor.text().to_string();
    match editor.evaluate() {
        Evaluation::Value(_) | Evaluation::Empty => {
            println!("{}", editor.text());
            ExitCode::SUCCESS
        }
        Evaluation::Failed(err) => {
            tracing::debug!(%err, input = %typed, "evaluation failed");
            eprintln!("{}", err.show(&typed));
            ExitCode::FAILURE
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.log_file.as_ref())?;

    if let Some(expr) = &cli.eval {
        return Ok(run_eval(expr));
    }

    let mut app = App::new()
        .with_theme(effective.theme.unwrap_or_default())
        .with_mouse_enabled(!effective.no_mouse)
        .with_config_paths(
            Some(global_path.clone()),
            if local_path.exists() {
                Some(local_path.clone())
            } else {
                None
            },
        );

    app.run().context("Application error")?;
    Ok(ExitCode::SUCCESS)
}
