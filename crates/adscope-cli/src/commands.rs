//! Command execution logic.

use crate::cli::ClassifyArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use adscope_classifier::AdClassifier;
use adscope_domain::AdMetadata;
use adscope_llm::GeminiProvider;
use std::fs;
use std::io::Read;
use tracing::debug;

/// Execute the classify command.
pub async fn execute_classify(
    args: ClassifyArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let metadata = assemble_metadata(&args)?;
    let api_key = args.api_key.clone().ok_or(CliError::MissingApiKey)?;

    debug!(
        ads_name = %metadata.ads_name,
        model = %config.classifier.model,
        "starting classification"
    );

    let provider = GeminiProvider::new(api_key)
        .with_model(&config.classifier.model)
        .with_temperature(config.classifier.temperature)
        .with_max_output_tokens(config.classifier.max_output_tokens)
        .with_timeout(config.classifier.request_timeout());

    let classifier = AdClassifier::new(provider, config.classifier.clone());
    let record = classifier.classify(metadata).await?;

    let rendered = formatter.format_record(&record)?;
    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote result to {}", path.display()))
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Build the ad metadata from `--file` / `--stdin` JSON plus flag overrides.
fn assemble_metadata(args: &ClassifyArgs) -> Result<AdMetadata> {
    let mut metadata = match (&args.file, args.stdin) {
        (Some(_), true) => {
            return Err(CliError::InvalidInput(
                "--file and --stdin are mutually exclusive".into(),
            ))
        }
        (Some(path), false) => parse_metadata_json(&fs::read_to_string(path)?)?,
        (None, true) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            parse_metadata_json(&buffer)?
        }
        (None, false) => AdMetadata::default(),
    };

    apply_overrides(&mut metadata, args);

    if metadata.ads_name.is_empty() && metadata.ads_summary.is_empty() {
        return Err(CliError::InvalidInput(
            "No ad text given. Provide --name / --summary, --file, or --stdin.".into(),
        ));
    }

    Ok(metadata)
}

fn parse_metadata_json(text: &str) -> Result<AdMetadata> {
    serde_json::from_str(text)
        .map_err(|e| CliError::InvalidInput(format!("Invalid ad metadata JSON: {}", e)))
}

fn apply_overrides(metadata: &mut AdMetadata, args: &ClassifyArgs) {
    let overrides = [
        (&args.idx, &mut metadata.ads_idx),
        (&args.code, &mut metadata.ads_code),
        (&args.name, &mut metadata.ads_name),
        (&args.summary, &mut metadata.ads_summary),
        (&args.guide, &mut metadata.ads_guide),
        (&args.limit, &mut metadata.ads_limit),
        (&args.reward_price, &mut metadata.ads_reward_price),
        (&args.age_min, &mut metadata.ads_age_min),
        (&args.age_max, &mut metadata.ads_age_max),
        (&args.sdate, &mut metadata.ads_sdate),
        (&args.edate, &mut metadata.ads_edate),
        (&args.ad_type, &mut metadata.ad_type),
        (&args.category, &mut metadata.ad_type_category),
    ];
    for (value, field) in overrides {
        if let Some(value) = value {
            *field = value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn classify_args(argv: &[&str]) -> ClassifyArgs {
        let mut full = vec!["adscope", "classify"];
        full.extend_from_slice(argv);
        let cli = crate::cli::Cli::parse_from(full);
        let crate::cli::Command::Classify(args) = cli.command;
        args
    }

    #[test]
    fn test_assemble_metadata_from_flags() {
        let args = classify_args(&["--name", "Coin Quest", "--summary", "Earn coins"]);
        let metadata = assemble_metadata(&args).unwrap();
        assert_eq!(metadata.ads_name, "Coin Quest");
        assert_eq!(metadata.ads_summary, "Earn coins");
        assert_eq!(metadata.ads_idx, "");
    }

    #[test]
    fn test_assemble_metadata_requires_ad_text() {
        let args = classify_args(&["--idx", "42"]);
        let err = assemble_metadata(&args).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }

    #[test]
    fn test_file_and_stdin_conflict() {
        let args = classify_args(&["--file", "/tmp/ad.json", "--stdin"]);
        let err = assemble_metadata(&args).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }

    #[test]
    fn test_flags_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ad.json");
        fs::write(
            &path,
            r#"{"ads_name": "Old Name", "ads_summary": "Earn coins", "ads_idx": "7"}"#,
        )
        .unwrap();

        let args = classify_args(&[
            "--file",
            path.to_str().unwrap(),
            "--name",
            "New Name",
        ]);
        let metadata = assemble_metadata(&args).unwrap();
        assert_eq!(metadata.ads_name, "New Name");
        assert_eq!(metadata.ads_summary, "Earn coins");
        assert_eq!(metadata.ads_idx, "7");
    }

    #[test]
    fn test_invalid_json_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ad.json");
        fs::write(&path, "not json").unwrap();

        let args = classify_args(&["--file", path.to_str().unwrap()]);
        let err = assemble_metadata(&args).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }
}
