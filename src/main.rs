//! Number normalization CLI.
//!
//! This binary is a thin front end for the dialplan library: it builds the
//! country directory (built-in defaults, repeatable flags, or a file) and
//! normalizes a single dialled number using the caller's number as context.

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use dialplan::{domain::number, CallingCodeTable, NumberNormalizer, PrefixTable};

/// Dialled Number Normalizer
///
/// Convert a dialled number to international format, inferring the national
/// dialling rules from the caller's own number.
#[derive(Parser)]
#[command(name = "dialplan")]
#[command(version, long_about = None)]
struct Cli {
    /// Dialled number to normalize (national or international form)
    #[arg(value_name = "DIALLED")]
    dialled: String,

    /// Caller's own number in international form (e.g. +441614960178)
    #[arg(short, long, value_name = "NUMBER")]
    caller: String,

    /// Directory entry as CC=CODE:PREFIX (e.g. GB=44:0); can be repeated
    #[arg(long, value_name = "SPEC")]
    country: Vec<String>,

    /// Load directory entries from a file of "CC CODE PREFIX" lines
    #[arg(short, long, value_name = "FILE")]
    directory: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// One parsed directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CountrySpec {
    country: String,
    calling_code: u32,
    trunk_prefix: String,
}

/// Pattern for `CC=CODE:PREFIX` country specs.
fn country_spec_pattern() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^([A-Za-z]{2,3})=([0-9]{1,4}):([0-9]*)$").expect("Valid country spec regex")
    });
    &PATTERN
}

/// Parses a `--country` flag value.
fn parse_country_spec(spec: &str) -> Result<CountrySpec> {
    let caps = country_spec_pattern().captures(spec.trim()).with_context(|| {
        format!(
            "Malformed country spec '{}', expected CC=CODE:PREFIX (e.g. GB=44:0)",
            spec
        )
    })?;

    let calling_code = caps[2]
        .parse()
        .with_context(|| format!("Calling code out of range in spec '{}'", spec))?;

    Ok(CountrySpec {
        country: caps[1].to_uppercase(),
        calling_code,
        trunk_prefix: caps[3].to_string(),
    })
}

/// Loads directory entries from a whitespace-separated file.
///
/// Each non-blank, non-comment line holds `CC CODE PREFIX`; the prefix field
/// may be omitted for countries without a trunk prefix.
fn load_directory_file(path: &Path) -> Result<Vec<CountrySpec>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read directory file {}", path.display()))?;

    let mut entries = Vec::new();
    for (line_no, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 || fields.len() > 3 {
            anyhow::bail!(
                "{}:{}: expected 'CC CODE PREFIX', got '{}'",
                path.display(),
                line_no + 1,
                line
            );
        }

        let calling_code = fields[1].parse().with_context(|| {
            format!(
                "{}:{}: bad calling code '{}'",
                path.display(),
                line_no + 1,
                fields[1]
            )
        })?;

        entries.push(CountrySpec {
            country: fields[0].to_uppercase(),
            calling_code,
            trunk_prefix: fields.get(2).copied().unwrap_or("").to_string(),
        });
    }

    Ok(entries)
}

/// Built-in directory used when neither --directory nor --country is given.
fn default_directory() -> Vec<CountrySpec> {
    let defaults = [("GB", 44, "0"), ("US", 1, "1"), ("FR", 33, "0"), ("DE", 49, "0")];

    defaults
        .iter()
        .map(|(country, calling_code, trunk_prefix)| CountrySpec {
            country: country.to_string(),
            calling_code: *calling_code,
            trunk_prefix: trunk_prefix.to_string(),
        })
        .collect()
}

/// Builds the two lookup tables from CLI inputs.
///
/// File entries come first, then `--country` flags in order, so a flag can
/// override a file entry for the same country.
fn build_directory(
    directory: Option<&Path>,
    country_flags: &[String],
) -> Result<(CallingCodeTable, PrefixTable)> {
    let mut specs = Vec::new();

    if let Some(path) = directory {
        specs.extend(load_directory_file(path)?);
    }
    for raw in country_flags {
        specs.push(parse_country_spec(raw)?);
    }
    if specs.is_empty() {
        specs = default_directory();
    }

    let mut calling_codes = CallingCodeTable::new();
    let mut prefixes = PrefixTable::new();
    for spec in specs {
        calling_codes.insert(spec.country.clone(), spec.calling_code);
        prefixes.insert(spec.country, spec.trunk_prefix);
    }

    Ok((calling_codes, prefixes))
}

/// Normalization command handler.
struct NormalizeHandler {
    calling_codes: CallingCodeTable,
    prefixes: PrefixTable,
    verbose: bool,
}

impl NormalizeHandler {
    fn new(calling_codes: CallingCodeTable, prefixes: PrefixTable, verbose: bool) -> Self {
        Self {
            calling_codes,
            prefixes,
            verbose,
        }
    }

    /// Validates the inputs, runs the normalizer, and prints the result.
    fn run(&self, dialled: &str, caller: &str) -> Result<()> {
        if !number::is_well_formed(dialled) {
            anyhow::bail!(
                "Dialled number '{}' is not a dial string (digits with an optional leading '+')",
                dialled
            );
        }
        if !number::international_pattern().is_match(caller) {
            anyhow::bail!(
                "Caller number '{}' must be in international form ('+' followed by digits)",
                caller
            );
        }

        if self.verbose {
            println!("Directory: {} country(ies)", self.calling_codes.len());
            println!("Caller:    {}", caller);
        }

        let normalizer = NumberNormalizer::new(&self.calling_codes, &self.prefixes);
        let formatted = normalizer
            .parse(dialled, caller)
            .with_context(|| "Normalization failed")?;

        if self.verbose && formatted == dialled && !number::is_international(dialled) {
            println!("No directory match; returning the number unchanged");
        }

        println!("{}", formatted);
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (calling_codes, prefixes) = build_directory(cli.directory.as_deref(), &cli.country)?;
    let handler = NormalizeHandler::new(calling_codes, prefixes, cli.verbose);
    handler.run(&cli.dialled, &cli.caller)
}
