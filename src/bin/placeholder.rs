use std::{ffi::OsString, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use placeholder::{
    DEFAULT_BASE, DEFAULT_COLOR, DEFAULT_JPEG_QUALITY, DimensionSpec, Generator, GeneratorConfig,
    Limits, Outcome, PlaceholderRequest, RenderOptions,
    logging::{default_log_path, init_file_logging},
};

#[derive(Parser, Debug)]
#[command(
    name = "placeholder",
    version,
    about = "Generates a placeholder image with the specified width and height",
    allow_negative_numbers = true
)]
struct Cli {
    /// Fixed size or ratio.
    #[arg(value_enum)]
    option: Mode,

    /// Width of the image in pixels (size mode).
    #[arg(long)]
    width: Option<i64>,

    /// Height of the image in pixels (size mode).
    #[arg(long)]
    height: Option<i64>,

    /// Image aspect ratio as two integers, e.g. `--ratio 16 9` (ratio mode).
    #[arg(long, num_args = 0..)]
    ratio: Option<Vec<i64>>,

    /// Pixels per ratio unit before shrinking to fit (ratio mode).
    #[arg(long, default_value_t = i64::from(DEFAULT_BASE))]
    base: i64,

    /// Fill color as #rgb, #rgba, #rrggbb or #rrggbbaa.
    #[arg(short, long, default_value = DEFAULT_COLOR)]
    color: String,

    /// Output root; images are written under `<out>/placeholders/`.
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    /// Log file [default: logs/usage.log].
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// JPEG quality (1-100).
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Skip the blur pass over the cross.
    #[arg(long)]
    no_blur: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Size,
    Ratio,
}

fn main() -> ExitCode {
    let args: Vec<OsString> = std::env::args_os().collect();
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            let log_path = log_file_from_args(&args).unwrap_or_else(default_log_path);
            if init_file_logging(&log_path).is_ok() {
                let msg = e.to_string();
                tracing::error!("invalid arguments: {}", msg.lines().next().unwrap_or(""));
            }
            return ExitCode::from(1);
        }
    };

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(e) = init_file_logging(&log_path) {
        eprintln!("warning: logging disabled: {e:#}");
    }

    match run(cli) {
        Ok(Outcome::Created(path)) => {
            eprintln!("wrote {}", path.display());
            ExitCode::SUCCESS
        }
        Ok(Outcome::Cached(path)) => {
            eprintln!("exists {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

/// Finds `--log-file` in arguments clap rejected, so parse errors still land in the
/// requested log.
fn log_file_from_args(args: &[OsString]) -> Option<PathBuf> {
    let mut found = None;
    let mut it = args.iter().skip(1);
    while let Some(arg) = it.next() {
        if arg == "--" {
            break;
        }
        if arg == "--log-file" {
            found = it.next().map(PathBuf::from);
        } else if let Some(v) = arg.to_str().and_then(|a| a.strip_prefix("--log-file=")) {
            found = Some(PathBuf::from(v));
        }
    }
    found
}

fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let spec = match cli.option {
        Mode::Size => DimensionSpec::Size {
            width: cli.width,
            height: cli.height,
        },
        Mode::Ratio => DimensionSpec::Ratio {
            values: cli.ratio,
            base: cli.base,
        },
    };

    let render = if cli.no_blur {
        RenderOptions { blur_sigma: None }
    } else {
        RenderOptions::default()
    };
    let cfg = GeneratorConfig {
        out_root: cli.out,
        limits: Limits::default(),
        render,
        jpeg_quality: cli.quality,
    };

    let req = PlaceholderRequest::resolve(&spec, &cli.color, &cfg.limits)?;
    let outcome = Generator::new(cfg).generate(&req)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<OsString> {
        v.iter().map(OsString::from).collect()
    }

    #[test]
    fn log_file_is_found_in_rejected_args() {
        assert_eq!(
            log_file_from_args(&args(&["placeholder", "bogus", "--log-file", "a.log"])),
            Some(PathBuf::from("a.log"))
        );
        assert_eq!(
            log_file_from_args(&args(&["placeholder", "--log-file=b.log", "size"])),
            Some(PathBuf::from("b.log"))
        );
        assert_eq!(
            log_file_from_args(&args(&["placeholder", "size", "--width", "x"])),
            None
        );
        assert_eq!(
            log_file_from_args(&args(&["placeholder", "size", "--log-file"])),
            None
        );
    }
}
