use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_IO: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "student-roster")]
#[command(about = "Interactive student roster with weighted grading", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/student-roster/config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so the interactive transcript on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match student_roster::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate weighting at startup
    if let Some(ref weighting) = config.weighting {
        if let Err(errors) = student_roster::grading::validate_weighting(weighting) {
            eprintln!("Weighting config errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
    }

    let policy = match config.grade_policy() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    tracing::debug!(weighting = ?policy.weighting(), "Starting with grade weighting");

    let use_colors = !cli.no_color
        && config
            .color
            .unwrap_or_else(student_roster::output::should_use_colors);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut controller =
        student_roster::menu::MenuController::new(stdin.lock(), stdout.lock(), policy, use_colors);

    if let Err(e) = controller.run() {
        eprintln!("Terminal error: {:#}", e);
        std::process::exit(EXIT_IO);
    }

    std::process::exit(EXIT_SUCCESS);
}
