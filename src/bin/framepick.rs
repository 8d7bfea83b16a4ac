use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use colored::Colorize;
use framepick::{
    DEFAULT_FRAME_COUNT, DEFAULT_QUALITY, ExtractOptions, FfmpegLogLevel, ProgressCallback,
    ProgressInfo,
};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;

const CLI_AFTER_HELP: &str = "Examples:\n  framepick input.mp4 frames\n  framepick input.mp4 frames -n 24 -q 80 --progress\n  framepick input.mp4 frames --indices 0,120,240 --json";

#[derive(Debug, Parser)]
#[command(
    name = "framepick",
    version,
    about = "Extract evenly spaced frames from a video file as JPEG images",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    /// Path to the input video.
    video: PathBuf,

    /// Directory where frames will be stored (created if missing).
    output: PathBuf,

    /// Number of evenly spaced frames to extract.
    #[arg(short = 'n', long = "num", default_value_t = DEFAULT_FRAME_COUNT)]
    num: u32,

    /// JPEG quality (0-100).
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_QUALITY,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    quality: u8,

    /// Comma-separated frame indices to extract instead of sampling.
    #[arg(short, long, value_delimiter = ',')]
    indices: Option<Vec<u64>>,

    /// Show a progress bar on stderr.
    #[arg(long)]
    progress: bool,

    /// Print the written paths as a JSON array.
    #[arg(long)]
    json: bool,

    /// Show additional logging output.
    #[arg(long)]
    verbose: bool,

    /// FFmpeg log level (quiet, error, warning, info, debug).
    #[arg(long, default_value_t = FfmpegLogLevel::Error)]
    log_level: FfmpegLogLevel,
}

impl Cli {
    fn extract_options(&self) -> ExtractOptions {
        let mut options = ExtractOptions::new()
            .with_frame_count(self.num)
            .with_quality(self.quality);
        if let Some(indices) = &self.indices {
            options = options.with_indices(indices.clone());
        }
        options
    }
}

struct TerminalProgress {
    bar: ProgressBar,
}

impl TerminalProgress {
    fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let bar = ProgressBar::new(0);
        let style =
            ProgressStyle::with_template("{spinner:.green} {bar:40.cyan/blue} {pos}/{len} {msg}")?;
        bar.set_style(style.progress_chars("##-"));
        Ok(Self { bar })
    }
}

impl ProgressCallback for TerminalProgress {
    fn on_progress(&self, info: &ProgressInfo) {
        self.bar.set_length(info.total);
        self.bar.set_position(info.current);
        self.bar.set_message(format!("frame {}", info.frame_number));
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }
    framepick::set_ffmpeg_log_level(cli.log_level);

    let mut options = cli.extract_options();
    let progress = if cli.progress {
        let progress = Arc::new(TerminalProgress::new()?);
        options = options.with_progress(progress.clone());
        Some(progress)
    } else {
        None
    };

    let paths = framepick::extract_frames(&cli.video, &cli.output, &options)?;

    if let Some(progress) = progress {
        progress.bar.finish_with_message("done");
    }

    if cli.json {
        let payload = json!(
            paths
                .iter()
                .map(|path| path.display().to_string())
                .collect::<Vec<_>>()
        );
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        for path in &paths {
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{} {error}", "error:".red().bold());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["framepick", "input.mp4", "frames"]).unwrap();
        assert_eq!(cli.video, PathBuf::from("input.mp4"));
        assert_eq!(cli.output, PathBuf::from("frames"));
        assert_eq!(cli.num, 10);
        assert_eq!(cli.quality, 95);
        assert!(cli.indices.is_none());
        assert_eq!(cli.log_level, FfmpegLogLevel::Error);

        let options = cli.extract_options();
        assert_eq!(options.frame_count(), 10);
        assert_eq!(options.quality(), 95);
    }

    #[test]
    fn short_flags() {
        let cli =
            Cli::try_parse_from(["framepick", "in.mkv", "out", "-n", "3", "-q", "70"]).unwrap();
        let options = cli.extract_options();
        assert_eq!(options.frame_indices(30), vec![0, 10, 20]);
        assert_eq!(options.quality(), 70);
    }

    #[test]
    fn indices_override_num() {
        let cli = Cli::try_parse_from([
            "framepick",
            "in.mp4",
            "out",
            "-n",
            "2",
            "--indices",
            "5,0,5",
        ])
        .unwrap();
        assert_eq!(cli.extract_options().frame_indices(100), vec![5, 0, 5]);
    }

    #[test]
    fn quality_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["framepick", "in.mp4", "out", "-q", "101"]).is_err());
        assert!(Cli::try_parse_from(["framepick", "in.mp4", "out", "-q", "-1"]).is_err());
    }

    #[test]
    fn missing_positionals_are_rejected() {
        assert!(Cli::try_parse_from(["framepick", "in.mp4"]).is_err());
    }

    #[test]
    fn log_level_parses() {
        let cli =
            Cli::try_parse_from(["framepick", "in.mp4", "out", "--log-level", "quiet"]).unwrap();
        assert_eq!(cli.log_level, FfmpegLogLevel::Quiet);
    }
}
