use std::io::{self, Read};

use amenity_cli::input::{
    DEFAULT_MAX_BYTES, PolicyOverrides, is_stdin, read_catalog, read_limited, resolve_policy,
};
use amenity_cli::report::{NormalizedLabel, render_json, render_normalized, render_tables};
use amenity_core::sample::{SAMPLE_AMBER, SAMPLE_PMG};
use amenity_core::{AmenityAnalyzer, MatchPolicy, parse_labels};
use amenity_map::Normalizer;
use amenity_model::AmenityAnalysis;
use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use crate::cli::{CompareArgs, NormalizeArgs, OutputFormatArg, PolicyArgs, ReportArgs, SampleArgs};

pub fn run_compare(args: &CompareArgs) -> Result<AmenityAnalysis> {
    let span = info_span!("compare", pmg = %args.pmg.display(), amber = %args.amber.display());
    let _guard = span.enter();

    if is_stdin(&args.pmg) && is_stdin(&args.amber) {
        bail!("only one catalog can be read from stdin");
    }
    let policy = policy_from_args(&args.policy)?;
    let pmg = read_catalog(&args.pmg, args.max_bytes).context("load PMG catalog")?;
    let amber = read_catalog(&args.amber, args.max_bytes).context("load Amber catalog")?;

    let analyzer = AmenityAnalyzer::new(&policy);
    let analysis = analyzer.analyze(&pmg, &amber);
    log_outcome(&analyzer, &analysis);
    print_analysis(&analysis, &args.report)?;
    Ok(analysis)
}

pub fn run_sample(args: &SampleArgs) -> Result<AmenityAnalysis> {
    let span = info_span!("sample");
    let _guard = span.enter();

    let policy = policy_from_args(&args.policy)?;
    let analyzer = AmenityAnalyzer::new(&policy);
    let analysis = analyzer.analyze(SAMPLE_PMG, SAMPLE_AMBER);
    log_outcome(&analyzer, &analysis);
    print_analysis(&analysis, &args.report)?;
    Ok(analysis)
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let policy = policy_from_args(&args.policy)?;
    let normalizer = Normalizer::new(&policy);
    let labels = if args.labels.is_empty() {
        read_stdin_labels()?
    } else {
        args.labels.clone()
    };
    let rows: Vec<NormalizedLabel> = labels
        .into_iter()
        .map(|label| NormalizedLabel {
            normalized: normalizer.normalize(&label),
            label,
        })
        .collect();
    match args.format {
        OutputFormatArg::Table => println!("{}", render_normalized(&rows)),
        OutputFormatArg::Json => println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("serialize labels")?
        ),
    }
    Ok(())
}

/// Exit status for an analysis under `--fail-on-issues`.
pub fn exit_code_for(analysis: &AmenityAnalysis, report: &ReportArgs) -> i32 {
    if report.fail_on_issues && !analysis.is_in_sync() {
        1
    } else {
        0
    }
}

fn policy_from_args(args: &PolicyArgs) -> Result<MatchPolicy> {
    resolve_policy(
        args.policy_file.as_deref(),
        PolicyOverrides {
            threshold: args.threshold,
            stopwords: args.stopwords.clone(),
            fold_plurals: args.fold_plurals,
        },
    )
}

fn print_analysis(analysis: &AmenityAnalysis, report: &ReportArgs) -> Result<()> {
    match report.format {
        OutputFormatArg::Table => print!("{}", render_tables(analysis)),
        OutputFormatArg::Json => println!("{}", render_json(analysis)?),
    }
    Ok(())
}

fn log_outcome(analyzer: &AmenityAnalyzer, analysis: &AmenityAnalysis) {
    info!(
        threshold = analyzer.threshold(),
        coverage = analysis.totals.coverage,
        missing = analysis.missing_from_amber.len(),
        unexpected = analysis.unexpected_in_amber.len(),
        duplicates = analysis.duplicates_in_pmg.len() + analysis.duplicates_in_amber.len(),
        typos = analysis.potential_typos.len(),
        "analysis complete"
    );
}

fn read_stdin_labels() -> Result<Vec<String>> {
    read_labels(io::stdin().lock()).context("read labels from stdin")
}

fn read_labels<R: Read>(reader: R) -> Result<Vec<String>> {
    let text = read_limited(reader, DEFAULT_MAX_BYTES)?;
    Ok(parse_labels(&text))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Command};

    fn unique_temp_dir(name: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!(
            "amenity-qa-commands-{}-{}-{}",
            name,
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_catalog(dir: &Path, name: &str, text: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path.display().to_string()
    }

    fn compare_args(args: &[&str]) -> CompareArgs {
        let argv = ["amenity-qa", "compare"].iter().chain(args);
        match Cli::try_parse_from(argv).expect("parse compare args").command {
            Command::Compare(args) => args,
            _ => panic!("expected compare command"),
        }
    }

    #[test]
    fn compare_rejects_two_stdin_catalogs() {
        let error = run_compare(&compare_args(&["-", "-"])).unwrap_err();
        assert!(error.to_string().contains("only one catalog"));
    }

    #[test]
    fn compare_reads_catalog_files() {
        let dir = unique_temp_dir("files");
        let pmg = write_catalog(&dir, "pmg.txt", "Gym\nSwimming Pool\n");
        let amber = write_catalog(&dir, "amber.txt", "gym\nSwiming Pool\n");

        let args = compare_args(&[&pmg, &amber, "--format", "json"]);
        let analysis = run_compare(&args).expect("compare files");

        assert_eq!(analysis.totals.pmg_total, 2);
        assert_eq!(analysis.totals.amber_total, 2);
        assert_eq!(analysis.missing_from_amber.len(), 1);
        assert_eq!(analysis.unexpected_in_amber.len(), 1);
        assert_eq!(analysis.potential_typos.len(), 1);
        assert!(!analysis.is_in_sync());
    }

    #[test]
    fn compare_enforces_max_bytes() {
        let dir = unique_temp_dir("limit");
        let pmg = write_catalog(&dir, "pmg.txt", "Gym\nPool\nSpa\n");
        let amber = write_catalog(&dir, "amber.txt", "Gym\n");

        let args = compare_args(&[&pmg, &amber, "--max-bytes", "8"]);
        let error = run_compare(&args).unwrap_err();
        let message = format!("{error:#}");
        assert!(message.contains("load PMG catalog"));
        assert!(message.contains("8 byte limit"));

        let args = compare_args(&[&amber, &pmg, "--max-bytes", "8"]);
        let error = run_compare(&args).unwrap_err();
        assert!(format!("{error:#}").contains("load Amber catalog"));
    }

    #[test]
    fn compare_reports_missing_file() {
        let dir = unique_temp_dir("missing");
        let amber = write_catalog(&dir, "amber.txt", "Gym\n");
        let absent = dir.join("absent.txt").display().to_string();

        let error = run_compare(&compare_args(&[&absent, &amber])).unwrap_err();
        assert!(format!("{error:#}").contains("absent.txt"));
    }

    #[test]
    fn fail_on_issues_sets_exit_code_only_on_disagreement() {
        let dir = unique_temp_dir("exit");
        let pmg = write_catalog(&dir, "pmg.txt", "Gym\nPool\n");
        let same = write_catalog(&dir, "same.txt", "pool\nGYM\n");
        let other = write_catalog(&dir, "other.txt", "Gym\nSpa\n");

        let args = compare_args(&[&pmg, &other, "--format", "json"]);
        let analysis = run_compare(&args).expect("compare");
        assert_eq!(exit_code_for(&analysis, &args.report), 0);

        let args = compare_args(&[&pmg, &other, "--format", "json", "--fail-on-issues"]);
        let analysis = run_compare(&args).expect("compare");
        assert_eq!(exit_code_for(&analysis, &args.report), 1);

        let args = compare_args(&[&pmg, &same, "--format", "json", "--fail-on-issues"]);
        let analysis = run_compare(&args).expect("compare");
        assert!(analysis.is_in_sync());
        assert_eq!(exit_code_for(&analysis, &args.report), 0);
    }

    #[test]
    fn label_reader_skips_blank_lines_and_enforces_limit() {
        let labels = read_labels(" Gym \r\n\nPool & Spa\n".as_bytes()).expect("read labels");
        assert_eq!(labels, vec!["Gym", "Pool & Spa"]);

        let oversized = "a".repeat(usize::try_from(DEFAULT_MAX_BYTES).unwrap() + 1);
        let error = read_labels(oversized.as_bytes()).unwrap_err();
        assert!(error.to_string().contains("byte limit"));
    }

    #[test]
    fn invalid_threshold_flag_is_an_error() {
        let args = compare_args(&["pmg.txt", "amber.txt", "--threshold", "1.5"]);
        let error = run_compare(&args).unwrap_err();
        assert!(format!("{error:#}").contains("invalid match policy"));
    }
}
