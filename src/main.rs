use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::{Instant, SystemTime};
use tracing::{info, Level};

use prose_chunker::{
    read_input, write_output, InputSource, OutputTarget, RunStats, SegmentOptions, Segmenter,
    WindowSpec, DEFAULT_DELIMITER, DEFAULT_WORD_LIMIT,
};

#[derive(Parser, Debug)]
#[command(name = "prose-chunker")]
#[command(about = "Divide text into word-bounded chunks of whole sentences while keeping dialogue intact")]
#[command(version)]
struct Args {
    /// Read text from this file instead of stdin
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Number of words that closes a chunk
    #[arg(short = 'i', long, default_value_t = DEFAULT_WORD_LIMIT)]
    word_num: usize,

    /// Delimiter placed between chunks
    #[arg(short, long, default_value = DEFAULT_DELIMITER)]
    delimiter: String,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep consecutive dialogue sentences in the same chunk
    #[arg(short, long)]
    preserve: bool,

    /// Return only N sentences instead of chunks (used when N >= 1)
    #[arg(short, long)]
    sentence: Option<usize>,

    /// Count the -s sentences from the end of the text
    #[arg(short, long)]
    reverse: bool,

    /// Skip this many sentences before the -s window starts
    #[arg(long, visible_alias = "of", default_value_t = 0)]
    offset: usize,

    /// Write run statistics as JSON to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn segment_options(&self) -> SegmentOptions {
        match self.sentence {
            Some(count) if count > 0 => {
                let spec = if self.reverse {
                    WindowSpec::reverse(count)
                } else {
                    WindowSpec::forward(count)
                };
                SegmentOptions::window(spec.with_offset(self.offset))
            }
            _ => {
                let options = SegmentOptions::chunks(self.word_num, self.delimiter.as_str());
                if self.preserve {
                    options.preserving_dialogues()
                } else {
                    options
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the chunked text, so logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    let options = args.segment_options();
    options.validate()?;

    let source = InputSource::from_arg(args.file.as_deref());
    let text = read_input(&source).await?;

    let run_start = SystemTime::now();
    let start_time = Instant::now();
    let segmenter = Segmenter::with_defaults()?;
    let segmented = segmenter.segment(&text, &options)?;
    let elapsed = start_time.elapsed();

    write_output(&OutputTarget::from_arg(args.output.as_deref()), &segmented.output).await?;

    if let Some(stats_path) = &args.stats_out {
        let stats = RunStats::new(run_start, source.label(), options.mode.name(), &segmented.stats, elapsed);
        stats.save(stats_path).await?;
        info!("Run statistics written to {}", stats_path.display());
    }

    Ok(())
}
