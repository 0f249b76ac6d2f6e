mod config;
mod export;
mod watch;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kairos_core::{
    CanvasSize, KairosMoment, SigilParams, SigilRecord, arc, current_pulse, day_name, decode_moment,
    export_record, import_record, month_name, pulse_start_ms, time,
};
use serde::Serialize;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "kairos", about = "Kairos pulse decoder and sigil exporter")]
struct Cli {
    /// Config file (default: $KAIROS_CONFIG, then ./kairos.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current moment
    Now {
        /// Decode this Unix-millisecond instant instead of the clock
        #[arg(long, allow_negative_numbers = true)]
        at_ms: Option<f64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Decode a pulse index
    Decode {
        #[arg(allow_negative_numbers = true)]
        pulse: i64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Export a sigil as SVG
    Sigil(SigilArgs),

    /// Check that a sigil record's coordinates match its pulse
    Verify {
        /// Record JSON, or an SVG exported by `kairos sigil`
        path: PathBuf,
    },

    /// Print each new moment as the pulse advances
    Watch {
        /// Stop after this many moments
        #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
        count: Option<usize>,

        /// Maximum sleep between checks (overrides config)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval_ms: Option<u64>,
    },
}

#[derive(clap::Args)]
struct SigilArgs {
    /// Pulse to draw (default: now)
    #[arg(long, allow_negative_numbers = true)]
    pulse: Option<i64>,

    /// Override the decoded beat
    #[arg(long)]
    beat: Option<u32>,

    /// Override the decoded step
    #[arg(long)]
    step: Option<u32>,

    /// Override the decoded chakra day
    #[arg(long)]
    chakra_day: Option<u32>,

    /// Seed for stroke colour jitter
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long)]
    user_key: Option<String>,

    #[arg(long)]
    signature: Option<String>,

    /// Unix milliseconds to stamp on the record (default: now)
    #[arg(long, allow_negative_numbers = true)]
    timestamp: Option<i64>,

    #[arg(long)]
    width: Option<f64>,

    #[arg(long)]
    height: Option<f64>,

    #[arg(long)]
    samples: Option<usize>,

    #[arg(long)]
    line_scale: Option<f64>,

    /// Write the SVG here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// Also write the interchange record JSON here
    #[arg(long)]
    record: Option<PathBuf>,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("failed to load config")?;

    match &cli.command {
        Commands::Now { at_ms, json } => {
            let now = at_ms.unwrap_or_else(time::now_unix_millis);
            print_moment(&decode_moment(current_pulse(now)), *json)
        }
        Commands::Decode { pulse, json } => print_moment(&decode_moment(*pulse), *json),
        Commands::Sigil(args) => cmd_sigil(&config, args),
        Commands::Verify { path } => cmd_verify(path),
        Commands::Watch { count, interval_ms } => cmd_watch(&config, *count, *interval_ms).await,
    }
}

/// A moment plus its labels, as printed by `now` and `decode`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MomentReport<'a> {
    #[serde(flatten)]
    moment: &'a KairosMoment,
    label: String,
    day_name: &'static str,
    month_name: &'static str,
    arc_name: &'static str,
    arc_color: &'static str,
    starts_at: String,
}

impl<'a> MomentReport<'a> {
    fn new(moment: &'a KairosMoment) -> Self {
        let arc = arc(moment.arc_index.into());
        Self {
            moment,
            label: moment.beat_step_label(),
            day_name: day_name(moment.day_index.into()),
            month_name: month_name(moment.month_index.into()),
            arc_name: arc.name,
            arc_color: arc.color,
            starts_at: time::unix_ms_to_iso8601(pulse_start_ms(moment.pulse)),
        }
    }
}

fn print_moment(moment: &KairosMoment, json: bool) -> Result<()> {
    let report = MomentReport::new(moment);
    if json {
        let out = serde_json::to_string_pretty(&report).context("failed to serialize moment")?;
        println!("{out}");
        return Ok(());
    }

    println!("pulse:      {}", moment.pulse);
    println!("kairos:     {}", report.label);
    println!("beat:       {}", moment.beat);
    println!("step:       {} ({}/11)", moment.step, moment.pulse_in_step_index);
    println!("arc:        {} ({})", report.arc_name, moment.arc_index);
    println!("day:        {} ({})", report.day_name, moment.day_index);
    println!(
        "month:      {} ({}), day {}",
        report.month_name, moment.month_index, moment.month_day1
    );
    println!("progress:   {:.1}% of step", moment.step_fraction * 100.0);
    println!("starts:     {}", report.starts_at);
    Ok(())
}

fn sigil_params(args: &SigilArgs) -> SigilParams {
    let now = time::now_unix_millis();
    let moment = decode_moment(args.pulse.unwrap_or_else(|| current_pulse(now)));
    let mut params = SigilParams::from_moment(&moment, args.timestamp.unwrap_or(now as i64))
        .with_seed(args.seed);
    if let Some(beat) = args.beat {
        params.beat = beat;
    }
    if let Some(step) = args.step {
        params.step_index = step;
    }
    if let Some(day) = args.chakra_day {
        params.chakra_day = day;
    }
    params.user_key = args.user_key.clone();
    params.signature = args.signature.clone();
    params
}

fn cmd_sigil(config: &Config, args: &SigilArgs) -> Result<()> {
    let params = sigil_params(args);
    let defaults = &config.sigil;
    let mut canvas: CanvasSize = defaults.canvas();
    if let Some(width) = args.width {
        canvas.width = width;
    }
    if let Some(height) = args.height {
        canvas.height = height;
    }
    let samples = args.samples.unwrap_or(defaults.samples);
    let line_scale = args.line_scale.unwrap_or(defaults.line_scale);
    tracing::debug!(
        pulse = params.pulse,
        beat = params.beat,
        step = params.step_index,
        "rendering sigil"
    );

    let svg = export::render_svg(&params, canvas, samples, line_scale)
        .context("failed to serialize sigil record")?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, &svg)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("wrote {}", path.display());
        }
        None => print!("{svg}"),
    }

    if let Some(path) = &args.record {
        let json = export_record(&SigilRecord::from(&params))
            .context("failed to serialize sigil record")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        if args.out.is_some() {
            println!("wrote {}", path.display());
        }
    }
    Ok(())
}

/// Pull the record JSON out of an exported SVG's `<metadata>` element.
fn record_from_svg(svg: &str) -> Option<String> {
    let start = svg.find("<metadata>")? + "<metadata>".len();
    let end = start + svg[start..].find("</metadata>")?;
    Some(
        svg[start..end]
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&"),
    )
}

fn cmd_verify(path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let json = if path.extension().is_some_and(|e| e == "svg") {
        record_from_svg(&content)
            .with_context(|| format!("no sigil metadata in {}", path.display()))?
    } else {
        content
    };
    let record = import_record(&json).context("failed to parse sigil record")?;

    let mismatches = record.mismatches();
    if mismatches.is_empty() {
        let m = decode_moment(record.pulse);
        println!("ok: pulse {} at {}", record.pulse, m.beat_step_label());
        return Ok(());
    }
    for mm in &mismatches {
        eprintln!("mismatch: {mm}");
    }
    anyhow::bail!(
        "record does not match pulse {} ({} field(s) differ)",
        record.pulse,
        mismatches.len()
    )
}

async fn cmd_watch(config: &Config, count: Option<usize>, interval_ms: Option<u64>) -> Result<()> {
    let interval = Duration::from_millis(interval_ms.unwrap_or(config.watch.interval_ms));
    tracing::info!("watching pulses every {interval:?} at most");

    watch::run(interval, count, |m| {
        println!(
            "{}  pulse {}  {}  {} {}",
            m.beat_step_label(),
            m.pulse,
            day_name(m.day_index.into()),
            month_name(m.month_index.into()),
            m.month_day1
        );
    })
    .await;
    Ok(())
}
