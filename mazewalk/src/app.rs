use std::{io::Write, path::PathBuf};

use mazecore::{
    algorithms::{random_from_seed, DepthFirstCarver, DepthFirstSolver, MazeGenerator as _, MazeSolver as _},
    events::{MazeEvent, MazeObserver},
    grid::Grid,
    MazeError,
};
use thiserror::Error;

use crate::{
    render::{self, TextRenderer},
    settings::Settings,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Maze error: {0}")]
    Maze(#[from] MazeError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings file {path:?}: {source}")]
    Settings {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("Could not determine config directory")]
    NoConfigDir,
}

impl AppError {
    /// The reader of our output went away, e.g. `mazewalk | head`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, AppError::Io(err) if err.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

/// Values given on the command line, `None` keeps the settings value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub rows: Option<i32>,
    pub cols: Option<i32>,
    pub seed: Option<u64>,
    pub no_solve: bool,
    pub print_events: bool,
    pub no_color: bool,
}

/// What a single run does, merged from command line and settings.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub rows: i32,
    pub cols: i32,
    pub seed: Option<u64>,
    pub solve: bool,
    pub print_events: bool,
    pub colored: bool,
}

impl RunOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            rows: settings.get_rows(),
            cols: settings.get_cols(),
            seed: settings.get_seed(),
            solve: true,
            print_events: false,
            colored: true,
        }
    }

    pub fn from_settings_and_args(settings: &Settings, overrides: &Overrides) -> Self {
        let base = Self::from_settings(settings);
        Self {
            rows: overrides.rows.unwrap_or(base.rows),
            cols: overrides.cols.unwrap_or(base.cols),
            seed: overrides.seed.or(base.seed),
            solve: !overrides.no_solve,
            print_events: overrides.print_events,
            colored: !overrides.no_color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Generated,
    Solved { path_len: usize },
    NoSolution,
}

/// Generates, optionally solves, and prints the maze to `out`.
pub fn run(
    options: &RunOptions,
    settings: &Settings,
    out: &mut impl Write,
) -> Result<Outcome, AppError> {
    let mut grid = Grid::new(options.rows, options.cols)?;
    let (mut rng, seed) = random_from_seed(options.seed);
    log::info!("maze {}x{} with seed {}", options.rows, options.cols, seed);

    let mut recorded: Vec<MazeEvent> = Vec::new();
    let mut silent = ();
    let observer: &mut dyn MazeObserver = if options.print_events {
        &mut recorded
    } else {
        &mut silent
    };

    DepthFirstCarver.generate(&mut grid, &mut rng, observer);

    let solution = if options.solve {
        match DepthFirstSolver.solve(&mut grid, observer) {
            Ok(path) => Some(Ok(path)),
            Err(MazeError::NoPathFound) => Some(Err(MazeError::NoPathFound)),
            Err(err) => return Err(err.into()),
        }
    } else {
        None
    };

    for event in &recorded {
        writeln!(out, "{}", render::describe(event))?;
    }

    let renderer = TextRenderer::new(
        settings.get_layout(),
        options.colored.then(|| settings.get_color_scheme()),
    );
    let path = solution.as_ref().and_then(|s| s.as_ref().ok());
    write!(out, "{}", renderer.render(&grid, path))?;
    writeln!(out, "seed: {}", seed)?;

    Ok(match solution {
        None => Outcome::Generated,
        Some(Ok(path)) => {
            writeln!(out, "Maze solved! Path of {} cells.", path.len())?;
            Outcome::Solved {
                path_len: path.len(),
            }
        }
        Some(Err(_)) => {
            writeln!(out, "No solution found.")?;
            Outcome::NoSolution
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(rows: i32, cols: i32) -> RunOptions {
        RunOptions {
            rows,
            cols,
            seed: Some(5),
            solve: true,
            print_events: false,
            colored: false,
        }
    }

    #[test]
    fn solves_and_prints() {
        let mut out = Vec::new();
        let outcome = run(&options(4, 4), &Settings::default(), &mut out).unwrap();
        assert!(matches!(outcome, Outcome::Solved { path_len } if path_len >= 7));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("seed: 5"));
        assert!(text.contains("Maze solved!"));
        assert!(text.contains('*'));
    }

    #[test]
    fn generate_only() {
        let mut out = Vec::new();
        let opts = RunOptions {
            solve: false,
            ..options(3, 3)
        };
        let outcome = run(&opts, &Settings::default(), &mut out).unwrap();
        assert_eq!(outcome, Outcome::Generated);
        assert!(!String::from_utf8(out).unwrap().contains('*'));
    }

    #[test]
    fn prints_events() {
        let mut out = Vec::new();
        let opts = RunOptions {
            print_events: true,
            ..options(2, 2)
        };
        run(&opts, &Settings::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("carve")).count(), 3);
        assert!(text.lines().any(|l| l.starts_with("confirm")));
    }

    #[test]
    fn command_line_beats_settings() {
        let settings = Settings::parse("(rows: 2, cols: 2, seed: 9)").unwrap();
        let overrides = Overrides {
            rows: Some(3),
            ..Overrides::default()
        };

        let opts = RunOptions::from_settings_and_args(&settings, &overrides);
        assert_eq!((opts.rows, opts.cols), (3, 2));
        assert_eq!(opts.seed, Some(9));
        assert!(opts.solve);
        assert!(opts.colored);

        let overrides = Overrides {
            seed: Some(1),
            no_solve: true,
            no_color: true,
            ..Overrides::default()
        };
        let opts = RunOptions::from_settings_and_args(&settings, &overrides);
        assert_eq!(opts.seed, Some(1));
        assert!(!opts.solve);
        assert!(!opts.colored);
    }

    #[test]
    fn defaults_without_settings_or_args() {
        let opts = RunOptions::from_settings_and_args(&Settings::default(), &Overrides::default());
        assert_eq!((opts.rows, opts.cols), (10, 14));
        assert_eq!(opts.seed, None);
    }

    #[test]
    fn broken_pipe_detection() {
        let err: AppError = std::io::Error::from(std::io::ErrorKind::BrokenPipe).into();
        assert!(err.is_broken_pipe());

        let err: AppError = std::io::Error::from(std::io::ErrorKind::NotFound).into();
        assert!(!err.is_broken_pipe());
        assert!(!AppError::NoConfigDir.is_broken_pipe());
    }

    #[test]
    fn invalid_size() {
        let mut out = Vec::new();
        assert!(matches!(
            run(&options(0, 3), &Settings::default(), &mut out),
            Err(AppError::Maze(MazeError::InvalidDimensions { .. }))
        ));
    }
}
