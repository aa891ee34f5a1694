//! Registration Validator - command-line front end
//!
//! Reads a registration form submission as JSON, runs the validation pipeline
//! and prints the decision. Also exposes the input masks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use registration_validator::{
    intercept, BufferedView, Config, FormValidationPipeline, MaskedField, PipelineReport,
    RegistrationForm,
};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "registration-validator")]
#[command(version, about = "Validate and mask registration form input", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a form submission given as a JSON object
    Validate {
        /// Read the submission from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Year used for the age check (overrides FORM_REFERENCE_YEAR)
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(1000..=9999))]
        year: Option<i32>,
    },

    /// Apply a display mask to a raw value
    Mask {
        /// Which input the value belongs to
        field: MaskKind,

        /// Raw value as typed
        value: String,
    },

    /// List the rules this validator enforces
    Features,
}

#[derive(Clone, clap::ValueEnum)]
enum MaskKind {
    /// CPF: DDD.DDD.DDD-DD
    NationalId,
    /// Mobile phone: (DD) D DDDD-DDDD
    Phone,
    /// CEP: DDDDD-DDD
    PostalCode,
}

impl From<MaskKind> for MaskedField {
    fn from(kind: MaskKind) -> Self {
        match kind {
            MaskKind::NationalId => MaskedField::NationalId,
            MaskKind::Phone => MaskedField::Phone,
            MaskKind::PostalCode => MaskedField::PostalCode,
        }
    }
}

const FEATURES: &[&str] = &[
    "Name, Birth Date, Email, CPF, Password and Confirm Password are required",
    "Applicants must be at least 18 years old (by birth year)",
    "Email domain must be on the accepted list",
    "Phone is optional; when given it must be (DD) 9 DDDD-DDDD with a valid area code",
    "CPF must have 11 digits and valid check digits",
    "Password needs at least 8 characters and 2 special characters",
    "Confirm Password must match Password",
    "Masks for CPF, phone and CEP",
];

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging (stderr only so stdout carries just the report)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Config::log_level_from_env()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validate { file, year } => validate(file, year),
        Commands::Mask { field, value } => {
            println!("{}", MaskedField::from(field).on_input(&value));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Features => {
            println!("Implemented rules:");
            for feature in FEATURES {
                println!("- {}", feature);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn validate(file: Option<PathBuf>, year: Option<i32>) -> Result<ExitCode> {
    let config = Config::from_env().context("Failed to load configuration")?;

    let form = match &file {
        Some(path) => {
            let reader = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            RegistrationForm::from_json_reader(BufReader::new(reader))?
        }
        None => RegistrationForm::from_json_reader(io::stdin().lock())?,
    };

    let current_year = year.unwrap_or_else(|| config.current_year());
    debug!("Validating submission against year {}", current_year);

    let pipeline = FormValidationPipeline::new(current_year);
    let mut view = BufferedView::new();
    let result = intercept(&pipeline, &form, &mut view);
    let accepted = result.is_ok();

    for message in &view.acknowledgments {
        eprintln!("{}", message);
    }

    let report = PipelineReport::from(result);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if accepted {
        info!("Submission may proceed");
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_flag_accepts_four_digit_years() {
        let cli = Cli::try_parse_from(["registration-validator", "validate", "--year", "2026"])
            .unwrap();
        match cli.command {
            Commands::Validate { year, .. } => assert_eq!(year, Some(2026)),
            _ => panic!("Expected the validate command"),
        }
    }

    #[test]
    fn test_year_flag_rejects_out_of_range_years() {
        for year in ["-5", "999", "10000", "2147483647"] {
            assert!(
                Cli::try_parse_from(["registration-validator", "validate", "--year", year])
                    .is_err(),
                "{} should be rejected",
                year
            );
        }
    }

    #[test]
    fn test_mask_parses_without_configuration() {
        let cli = Cli::try_parse_from(["registration-validator", "mask", "phone", "11988887777"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Mask { .. }));
    }
}
