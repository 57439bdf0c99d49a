use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use tiny_imagenet_ingest::core::operations::{split_output_path, write_examples_jsonl, write_json};
use tiny_imagenet_ingest::infrastructure::setup_logging;
use tiny_imagenet_ingest::{DatasetBuilder, DatasetSplit, IngestConfig, IngestResult, LoggingConfig};

/// Index an extracted Tiny-ImageNet archive into JSON Lines splits
#[derive(Debug, Parser)]
#[command(name = "tiny-imagenet-ingest", version)]
struct Args {
    /// Directory the archive was extracted into (contains tiny-imagenet-200/)
    #[arg(long, env = "TINY_IMAGENET_EXTRACTED")]
    extracted_path: PathBuf,

    /// JSON config file; defaults to the platform config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory for <split>.jsonl and dataset_info.json
    #[arg(long, default_value = "tiny_imagenet_out")]
    output: PathBuf,

    /// Split to build (train, validation or val); all splits when omitted
    #[arg(long)]
    split: Option<DatasetSplit>,

    #[arg(long, default_value = "info")]
    log_level: String,

    /// Also write a timestamped log file into this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn run(args: Args) -> IngestResult<()> {
    let mut config = match &args.config {
        Some(path) => IngestConfig::load_from(path)?,
        None => IngestConfig::load()?,
    };
    config.extracted_path = args.extracted_path;

    let builder = DatasetBuilder::new(config);
    let splits = match args.split {
        Some(split) => vec![split],
        None => DatasetSplit::all(),
    };
    let (labels, generators) = builder.split_generators(&splits)?;

    for generator in &generators {
        let path = split_output_path(&args.output, generator.split.as_str());
        write_examples_jsonl(&path, generator.examples())?;
    }

    let info = builder.info(&labels, &generators);
    write_json(&args.output.join("dataset_info.json"), &info)?;

    info!(
        "Done: {} splits, {} classes, output in {:?}",
        generators.len(),
        labels.len(),
        args.output
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let logging = LoggingConfig {
        level: args.log_level.clone(),
        log_dir: args.log_dir.clone(),
    };
    if let Err(e) = setup_logging(&logging) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Ingestion failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_fixture(extracted: &Path) {
        let root = extracted.join("tiny-imagenet-200");
        for (class_id, file) in [("n1", "a.JPEG"), ("n1", "b.JPEG"), ("n2", "c.JPEG")] {
            let images = root.join("train").join(class_id).join("images");
            fs::create_dir_all(&images).unwrap();
            fs::write(images.join(file), "").unwrap();
        }
        fs::create_dir_all(root.join("val/images")).unwrap();
        fs::write(root.join("val/val_annotations.txt"), "val_0.JPEG n1 0 0 9 9\n").unwrap();
        fs::write(root.join("wnids.txt"), "n1\nn2\n").unwrap();
        fs::write(root.join("words.txt"), "n1\tOne\nn2\tTwo\n").unwrap();
    }

    fn args(extracted: &Path, config: &Path, output: &Path, extra: &[&str]) -> Args {
        let mut argv = vec![
            "tiny-imagenet-ingest".to_string(),
            "--extracted-path".to_string(),
            extracted.display().to_string(),
            "--config".to_string(),
            config.display().to_string(),
            "--output".to_string(),
            output.display().to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["tiny-imagenet-ingest", "--extracted-path", "/data"]).unwrap();
        assert_eq!(args.extracted_path, PathBuf::from("/data"));
        assert_eq!(args.split, None);
        assert_eq!(args.output, PathBuf::from("tiny_imagenet_out"));
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_split_arg_parses_through_dataset_split() {
        let args = Args::try_parse_from([
            "tiny-imagenet-ingest",
            "--extracted-path",
            "/data",
            "--split",
            "val",
        ])
        .unwrap();
        assert_eq!(args.split, Some(DatasetSplit::Validation));

        let bad = Args::try_parse_from([
            "tiny-imagenet-ingest",
            "--extracted-path",
            "/data",
            "--split",
            "test",
        ]);
        assert!(bad.is_err());
    }

    #[test]
    fn test_run_writes_selected_split_and_info() {
        let dir = tempfile::tempdir().unwrap();
        let extracted = dir.path().join("extracted");
        write_fixture(&extracted);

        // The config points elsewhere; --extracted-path must win
        let config = dir.path().join("config.json");
        fs::write(
            &config,
            r#"{ "extracted_path": "/does/not/exist", "expected_num_classes": 2 }"#,
        )
        .unwrap();
        let output = dir.path().join("out");

        run(args(&extracted, &config, &output, &["--split", "train"])).unwrap();

        let train = fs::read_to_string(output.join("train.jsonl")).unwrap();
        let keys: Vec<String> = train
            .lines()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                value["key"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(keys, vec!["n1/a.JPEG", "n1/b.JPEG", "n2/c.JPEG"]);
        assert!(!output.join("validation.jsonl").exists());

        let info: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output.join("dataset_info.json")).unwrap())
                .unwrap();
        let splits = info["splits"].as_array().unwrap();
        assert_eq!(splits.len(), 1);
        assert_eq!(splits[0]["name"], "train");
        assert_eq!(splits[0]["num_examples"], 3);
        assert_eq!(info["features"]["label"]["num_classes"], 2);
    }

    #[test]
    fn test_run_all_splits() {
        let dir = tempfile::tempdir().unwrap();
        let extracted = dir.path().join("extracted");
        write_fixture(&extracted);
        let config = dir.path().join("config.json");
        fs::write(&config, r#"{ "expected_num_classes": 2 }"#).unwrap();
        let output = dir.path().join("out");

        run(args(&extracted, &config, &output, &[])).unwrap();

        let validation = fs::read_to_string(output.join("validation.jsonl")).unwrap();
        assert_eq!(validation.lines().count(), 1);
        assert!(validation.contains("\"n1/val_0.JPEG\""));
        assert_eq!(fs::read_to_string(output.join("train.jsonl")).unwrap().lines().count(), 3);
    }

    #[test]
    fn test_run_fails_on_missing_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.json");
        fs::write(&config, "{}").unwrap();
        let output = dir.path().join("out");

        let result = run(args(&dir.path().join("missing"), &config, &output, &[]));
        assert!(result.is_err());
        assert!(!output.join("dataset_info.json").exists());
    }
}
