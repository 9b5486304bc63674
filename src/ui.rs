use anyhow::{Context, Result};
use console::{Style, Term};
use ranpass::strength::{Strength, StrengthResult, Tone};
use rpassword::read_password;
use std::io::{self, Write};
use zeroize::Zeroizing;

pub const MIN_SAFE_ENTROPY: f64 = 80.0;
pub const MIN_SAFE_LENGTH: usize = 12;

pub const MAX_INPUT_BYTES: usize = 4096;

pub struct OutputConfig {
    pub length: usize,
    pub pool_size: usize,
    pub entropy_bits: f64,
}

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

fn tree_glyphs(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("├─", "└─")
    } else {
        ("|-", "`-")
    }
}

fn tone_style(tone: Tone, color_support: bool) -> Style {
    if !color_support {
        return Style::new();
    }
    match tone {
        Tone::Red => Style::new().red(),
        Tone::Orange => Style::new().color256(208),
        Tone::Amber => Style::new().yellow(),
        Tone::Green => Style::new().green(),
    }
}

fn status_style(secure: bool, color_support: bool) -> Style {
    if !color_support {
        Style::new()
    } else if secure {
        Style::new().green()
    } else {
        Style::new().yellow()
    }
}

fn validate_control_characters(s: &str, input_name: &str) -> Result<String> {
    let control_chars: Vec<usize> = s
        .chars()
        .enumerate()
        .filter(|(_, c)| c.is_control())
        .map(|(pos, _)| pos)
        .collect();

    if !control_chars.is_empty() {
        let term = Term::stderr();

        term.write_line(&format!(
            "WARNING: {} contains {} control character(s) at position(s): {}",
            input_name,
            control_chars.len(),
            control_chars
                .iter()
                .map(|pos| pos.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ))?;
        term.write_str("Continue anyway? [y/N]: ")?;
        term.flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;
        let response = response.trim().to_lowercase();

        term.clear_last_lines(2)?;

        if response != "y" && response != "yes" {
            anyhow::bail!("Aborted");
        }
    }

    Ok(s.to_string())
}

/// Checks a typed password without altering it; strength is rated on the exact input.
fn validate_input(s: &str, input_name: &str) -> Result<Zeroizing<String>> {
    if s.len() > MAX_INPUT_BYTES {
        anyhow::bail!(
            "{} too long ({} bytes, maximum is {})",
            input_name,
            s.len(),
            MAX_INPUT_BYTES
        );
    }

    Ok(Zeroizing::new(validate_control_characters(s, input_name)?))
}

/// Reads a password to rate without echoing it.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    print!("In [0]: ");
    io::stdout().flush()?;

    let password = Zeroizing::new(read_password().context("Failed to read password")?);
    validate_input(&password, "Password")
}

fn strength_status(strength: &StrengthResult, unicode_support: bool) -> &'static str {
    let (check_ok, check_warn) = get_status_symbols(unicode_support);
    if strength.strength >= Strength::Strong {
        check_ok
    } else {
        check_warn
    }
}

pub fn display_password(
    index: usize,
    password: &Zeroizing<String>,
    config: &OutputConfig,
    strength: &StrengthResult,
    options: &DisplayOptions,
) {
    if options.quiet {
        println!("{}", &**password);
        return;
    }

    println!("Out[{}]:\n{}\n", index, &**password);
    display_stats(config, options);
    display_strength(strength, options);
}

fn display_stats(config: &OutputConfig, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let (branch, _) = tree_glyphs(options.unicode_support);

    let entropy_secure = config.entropy_bits >= MIN_SAFE_ENTROPY;
    let length_secure = config.length >= MIN_SAFE_LENGTH;

    let entropy_style = status_style(entropy_secure, options.color_support);
    let length_style = status_style(length_secure, options.color_support);

    println!("Stats:");

    println!(
        "  {} Length     {} {} {}",
        branch,
        length_style.apply_to(format!(
            "[{}]",
            if length_secure { check_ok } else { check_warn }
        )),
        length_style.apply_to(config.length),
        if config.length == 1 { "char" } else { "chars" }
    );

    println!("  {} Charset    {} chars", branch, config.pool_size);

    println!(
        "  {} Entropy    {} {} bits",
        branch,
        entropy_style.apply_to(format!(
            "[{}]",
            if entropy_secure { check_ok } else { check_warn }
        )),
        entropy_style.apply_to(format!("{:.1}", config.entropy_bits))
    );
}

pub fn display_strength(strength: &StrengthResult, options: &DisplayOptions) {
    let (check_ok, _) = get_status_symbols(options.unicode_support);
    let (branch, last) = tree_glyphs(options.unicode_support);
    let style = tone_style(strength.tone(), options.color_support);
    let pipe = if options.unicode_support { "│" } else { "|" };

    println!(
        "  {} Strength   {} ({}/5)",
        branch,
        style.apply_to(strength.label()),
        strength.score
    );

    let checks = strength.checks.describe();
    for (i, (name, passed)) in checks.iter().enumerate() {
        let prefix = if i == checks.len() - 1 { last } else { branch };
        let check_style = status_style(*passed, options.color_support);
        println!(
            "  {}  {} {} {}",
            pipe,
            prefix,
            check_style.apply_to(format!("[{}]", if *passed { check_ok } else { " " })),
            name
        );
    }

    println!(
        "\n{} Strength: {}",
        style.apply_to(format!(
            "[{}]",
            strength_status(strength, options.unicode_support)
        )),
        style.apply_to(strength.label())
    );
}
