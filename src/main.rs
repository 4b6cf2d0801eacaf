//! hello-add: print a greeting, read two integers, print their sum.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use hello_add::error::{EXIT_USAGE, EXIT_SUCCESS};
use hello_add::ui::TerminalBanner;
use hello_add::{App, AppConfig, AppError, AppResult, InputSource};

/// Environment variable holding the log filter, e.g. `HELLO_ADD_LOG=debug`.
const LOG_ENV_VAR: &str = "HELLO_ADD_LOG";

#[derive(Parser, Debug)]
#[command(name = "hello-add")]
#[command(version)]
#[command(about = "Hello World! Add any two numbers.")]
#[command(long_about = "
Hello World! Add any two numbers.

With two operands the sum is printed directly. Otherwise both values are
read from standard input, each with a bounded number of attempts.
Sums beyond the 32-bit range are clamped to the nearest bound.
")]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Integers to add (fewer than two switches to interactive input)
    #[arg(value_name = "OPERAND")]
    operands: Vec<String>,

    /// TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Attempts allowed per operand in interactive mode
    #[arg(long, value_name = "N")]
    retries: Option<u32>,

    /// Do not clear the screen before the banner
    #[arg(long)]
    no_clear: bool,

    /// Do not wait for ENTER before exiting
    #[arg(long)]
    no_pause: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::from(EXIT_SUCCESS)
            };
        }
    };

    // Until the config is loaded only the flag and the terminal decide.
    let mut color = !cli.no_color && console::colors_enabled_stderr();
    init_tracing(color);

    match run(cli, &mut color) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            report(&err, color);
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_tracing(color: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(color)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> AppResult<AppConfig> {
    let mut config = AppConfig::load(cli.config.as_deref())?;

    if let Some(retries) = cli.retries {
        config = config.with_retry_budget(retries);
    }
    if cli.no_clear {
        config = config.with_clear_screen(false);
    }
    if cli.no_pause {
        config = config.with_pause_on_exit(false);
    }
    if cli.no_color {
        config = config.with_color(false);
    }

    Ok(config.validate()?)
}

/// Run the program, leaving the effective colour setting in `color`.
fn run(cli: Cli, color: &mut bool) -> AppResult<()> {
    let config = load_config(&cli)?;
    *color = config.color;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let source = InputSource::from_operands(&cli.operands);
    let mut banner = TerminalBanner::new(io::stdout())
        .with_clear_screen(config.clear_screen)
        .with_color(config.color);

    let app = App::new(config);
    let outcome = app.run(
        source,
        &mut banner,
        io::stdin().lock(),
        io::stdout().lock(),
        &mut io::stderr(),
    )?;

    tracing::debug!(equation = %outcome.equation(), "run complete");
    Ok(())
}

fn report(err: &AppError, color: bool) {
    if color {
        eprintln!("{}", err.to_string().red());
    } else {
        eprintln!("{}", err);
    }
}
