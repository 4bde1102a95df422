//! modwave - sample a composed signal source into the visualizer's JSON format
//!
//! Run with: cargo run -- --wave analog-square --rate 2.0 --output square.json
//!
//! The source tree comes either from the waveform flags below (one generator,
//! optionally composed with a sine modulator) or from a patch file describing
//! an arbitrary tree (`--patch tree.json`).

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use modwave::graph::{
    AnalogSquareOscillator, DigitalSquareOscillator, ModulationSource, SineOscillator, SourceExt,
};
use modwave::io::Trace;
use modwave::patch::SourceSpec;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Wave {
    Sine,
    DigitalSquare,
    AnalogSquare,
}

#[derive(Debug, Parser)]
#[command(name = "modwave", about = "Sample a composed signal source to JSON")]
struct Args {
    /// Waveform of the base generator
    #[arg(long, value_enum, default_value = "sine")]
    wave: Wave,

    /// Rate of the base generator, in Hz
    #[arg(long, default_value_t = 1.0)]
    rate: f64,

    /// Amplitude of the base generator
    #[arg(long, default_value_t = 1.0)]
    amplitude: f64,

    /// Rise time for the analog square, as a fraction of one period
    #[arg(long, default_value_t = 0.05)]
    rise_time: f64,

    /// Fall time for the analog square, as a fraction of one period
    #[arg(long, default_value_t = 0.05)]
    fall_time: f64,

    /// Rate of an optional additive sine modulator, in Hz
    #[arg(long)]
    modulator_rate: Option<f64>,

    /// Amplitude of the optional sine modulator
    #[arg(long, default_value_t = 0.25)]
    modulator_amplitude: f64,

    /// Build the source tree from a patch file instead of the flags above
    #[arg(long, conflicts_with_all = ["wave", "modulator_rate"])]
    patch: Option<PathBuf>,

    /// Length of the capture, in seconds
    #[arg(long, default_value_t = 2.0)]
    duration: f64,

    /// Samples per second
    #[arg(long, default_value_t = 1000.0)]
    sample_rate: f64,

    /// Name recorded in the trace metadata
    #[arg(long, default_value = "signal")]
    name: String,

    /// Description recorded in the trace metadata
    #[arg(long, default_value = "")]
    description: String,

    /// Where to write the JSON document (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn build_source(args: &Args) -> color_eyre::Result<Box<dyn ModulationSource>> {
    if let Some(path) = &args.patch {
        let text = fs::read_to_string(path)?;
        let spec: SourceSpec = serde_json::from_str(&text)?;
        return Ok(spec.build()?);
    }

    let base: Box<dyn ModulationSource> = match args.wave {
        Wave::Sine => Box::new(SineOscillator::new(args.rate, args.amplitude)),
        Wave::DigitalSquare => Box::new(DigitalSquareOscillator::new(args.rate, args.amplitude)),
        Wave::AnalogSquare => Box::new(AnalogSquareOscillator::new(
            args.rate,
            args.amplitude,
            args.rise_time,
            args.fall_time,
        )),
    };

    Ok(match args.modulator_rate {
        Some(rate) => Box::new(base.compose(SineOscillator::new(rate, args.modulator_amplitude))),
        None => base,
    })
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let args = Args::parse();
    let source = build_source(&args)?;

    info!(
        "sampling {:.3} s at {} Hz ({} samples)",
        args.duration,
        args.sample_rate,
        (args.duration * args.sample_rate).max(0.0) as usize
    );
    let trace = Trace::capture(
        &args.name,
        &args.description,
        &*source,
        args.duration,
        args.sample_rate,
    );
    let json = trace.to_json()?;

    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            info!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
