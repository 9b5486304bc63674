mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use ranpass::generator::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};
use ranpass::{GenerationOptions, KeystreamSource, clamp_length};

#[derive(Parser)]
#[command(
    name = "ranpass",
    version,
    about = "Random password generator with a strength rating"
)]
struct Cli {
    /// Password length, clamped to 4..=64
    #[arg(short, long, env = "RANPASS_LENGTH", default_value_t = DEFAULT_LENGTH as i64, allow_negative_numbers = true)]
    length: i64,

    /// Number of passwords to generate
    #[arg(short = 'n', long, env = "RANPASS_COUNT", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=100))]
    count: u32,

    /// Leave out lowercase letters
    #[arg(long)]
    no_lower: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    no_upper: bool,

    /// Leave out digits
    #[arg(long)]
    no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    no_symbols: bool,

    /// 64 hex characters; makes output reproducible
    #[arg(long, value_name = "HEX")]
    seed: Option<String>,

    /// Rate a password read from the terminal instead of generating one
    #[arg(short, long, conflicts_with = "seed")]
    evaluate: bool,

    /// Print passwords only
    #[arg(short, long)]
    quiet: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            lowercase: !self.no_lower,
            uppercase: !self.no_upper,
            digits: !self.no_digits,
            symbols: !self.no_symbols,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let display_options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: !cli.no_color && ui::detect_color_support(),
        quiet: cli.quiet,
    };

    if cli.evaluate {
        let password = ui::prompt_password()?;
        let result = ranpass::evaluate(&password);
        if cli.quiet {
            println!("{}", result.label());
        } else {
            println!();
            println!("Stats:");
            ui::display_strength(&result, &display_options);
        }
        return Ok(());
    }

    let length = clamp_length(cli.length);
    if i64::try_from(length).ok() != Some(cli.length) {
        log::warn!(
            "length {} is outside {}..={}, using {}",
            cli.length,
            MIN_LENGTH,
            MAX_LENGTH,
            length
        );
    }

    let options = cli.generation_options();
    if options.is_empty() {
        log::warn!("all character classes disabled, using lowercase letters");
    }

    let mut source = match &cli.seed {
        Some(seed) => KeystreamSource::from_hex(seed).context("Invalid --seed")?,
        None => KeystreamSource::from_entropy(),
    };

    let output_config = ui::OutputConfig {
        length,
        pool_size: ranpass::pool_size(&options),
        entropy_bits: ranpass::entropy_bits(length, &options),
    };

    for index in 0..cli.count as usize {
        if index > 0 && !cli.quiet {
            println!();
        }
        let password = ranpass::generate(length, &options, &mut source);
        let strength = ranpass::evaluate(&password);
        ui::display_password(index, &password, &output_config, &strength, &display_options);
    }

    Ok(())
}
