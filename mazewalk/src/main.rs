use std::path::PathBuf;

use mazewalk::{
    app::{self, AppError, Overrides, RunOptions},
    logging,
    settings::{LogLevel, Settings},
};

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[clap(version, about, name = "mazewalk")]
struct Args {
    #[clap(short, long, help = "Number of rows, at least 1")]
    rows: Option<i32>,
    #[clap(short, long, help = "Number of columns, at least 1")]
    cols: Option<i32>,
    #[clap(short, long, help = "Seed for reproducible mazes")]
    seed: Option<u64>,
    #[clap(long, action, help = "Only generate the maze, don't solve it")]
    no_solve: bool,
    #[clap(short, long, action, help = "Print every generation and search step")]
    events: bool,
    #[clap(long, action, help = "Disable colored output")]
    no_color: bool,
    #[clap(long, help = "Use this settings file instead of the default one")]
    config: Option<PathBuf>,
    #[clap(short, long, action = ArgAction::Count, help = "More logging, can be repeated")]
    verbose: u8,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, action, help = "Show config in debug format and quit")]
    debug_config: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let settings_path = match args.config.clone() {
        Some(path) => path,
        None => Settings::default_path().ok_or(AppError::NoConfigDir)?,
    };

    if args.show_config_path {
        println!("{}", settings_path.display());
        return Ok(());
    }

    if args.reset_config {
        return Settings::reset_config(settings_path);
    }

    // installed before loading so settings errors and fallbacks are reported
    logging::init(LogLevel::default().raised(args.verbose).to_level_filter());

    let settings = Settings::load(settings_path)?;
    logging::get_logger()
        .set_min_level(settings.get_log_level().raised(args.verbose).to_level_filter());

    if args.debug_config {
        println!("{:#?}", settings);
        return Ok(());
    }

    better_panic::install();

    let overrides = Overrides {
        rows: args.rows,
        cols: args.cols,
        seed: args.seed,
        no_solve: args.no_solve,
        print_events: args.events,
        no_color: args.no_color || std::env::var_os("NO_COLOR").is_some(),
    };
    let options = RunOptions::from_settings_and_args(&settings, &overrides);

    match app::run(&options, &settings, &mut std::io::stdout().lock()) {
        Ok(outcome) => {
            log::debug!("finished with {:?}", outcome);
            Ok(())
        }
        Err(err) if err.is_broken_pipe() => Ok(()),
        Err(err) => Err(err),
    }
}
