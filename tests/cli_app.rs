use clap::Parser;
use separation_benchmark::app::{self, AppError};
use separation_benchmark::cli::Cli;
use separation_benchmark::config::{self, ChartFormat, Config};
use separation_benchmark::extraction::Extractant;

fn run_to_string(args: &[&str]) -> Result<String, AppError> {
    let cli = Cli::parse_from(args);
    let cfg = Config::default();
    let tr = app::translator_for(&cli, &cfg);
    let mut out = Vec::new();
    app::run(&cli, &cfg, &tr, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn default_command_prints_both_reports() {
    let text = run_to_string(&["separation_benchmark", "--lang", "en"]).expect("run");
    assert!(text.contains("STRATEGIC MATERIALS AUDIT"));
    assert!(text.contains("COMPLIANCE SIDE STREAM AUDIT"));
}

#[test]
fn stages_command() {
    let text = run_to_string(&["separation_benchmark", "-L", "en", "stages", "--beta", "2.5"])
        .expect("run");
    assert!(text.contains("Theoretical Stages: 9.9357"), "{text}");
    assert!(text.contains("Practical Stages (~90% eff): 12"), "{text}");
}

#[test]
fn stages_command_near_unit_beta_reports_full_count() {
    let text = run_to_string(&[
        "separation_benchmark",
        "-L",
        "en",
        "stages",
        "--beta",
        "1.000000000001",
    ])
    .expect("run");
    let practical: u64 = text
        .lines()
        .find_map(|line| line.strip_prefix("Practical Stages (~90% eff): "))
        .expect("practical stage line")
        .trim()
        .parse()
        .expect("integer stage count");
    assert!(practical > u64::from(u32::MAX), "{text}");
}

#[test]
fn stages_command_rejects_unit_beta() {
    let err = run_to_string(&["separation_benchmark", "stages", "--beta", "1"])
        .expect_err("beta = 1");
    assert!(matches!(err, AppError::Calc(_)), "{err}");
}

#[test]
fn lifetime_command() {
    let text = run_to_string(&[
        "separation_benchmark",
        "--lang=en",
        "lifetime",
        "--new=-85",
        "--temperature",
        "24.85",
        "--temperature-unit",
        "C",
    ])
    .expect("run");
    assert!(text.contains("Temperature: 298.00 K"), "{text}");
    assert!(text.contains("1.027104e7"), "{text}");
    assert!(text.contains("Estimated lifetime (h): 493,0"), "{text}");
}

#[test]
fn lifetime_command_rejects_unknown_unit() {
    let err = run_to_string(&[
        "separation_benchmark",
        "lifetime",
        "--new=-85",
        "--energy-unit",
        "btu",
    ])
    .expect_err("unknown unit");
    assert!(matches!(err, AppError::Conversion(_)), "{err}");
}

#[test]
fn convert_command() {
    let text = run_to_string(&[
        "separation_benchmark",
        "-L",
        "en",
        "convert",
        "temperature",
        "25",
        "--from",
        "C",
        "--to",
        "K",
    ])
    .expect("run");
    assert_eq!(text.trim(), "Result: 25 °C = 298.150000 K");

    let text = run_to_string(&[
        "separation_benchmark",
        "-L",
        "en",
        "convert",
        "energy",
        "-20",
        "--from",
        "kcal/mol",
        "--to",
        "kJ/mol",
    ])
    .expect("run");
    assert!(text.contains("= -83.680000 kJ/mol"), "{text}");

    let err = run_to_string(&[
        "separation_benchmark",
        "convert",
        "pressure",
        "1",
        "--from",
        "bar",
        "--to",
        "Pa",
    ])
    .expect_err("unknown quantity");
    assert!(matches!(err, AppError::Conversion(_)));
}

#[test]
fn config_is_created_and_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("benchmark.toml");

    let created = config::load_or_default(&path).expect("create");
    assert!(path.exists());
    assert_eq!(created, Config::default());

    let mut edited = created.clone();
    edited.language = "ko".into();
    edited.extraction.scenario.stage_efficiency = 0.75;
    edited
        .extraction
        .extractants
        .push(Extractant::new("Cyanex 572", 4.0, "vendor data"));
    edited.charts.formats = vec![ChartFormat::Png];
    edited.save(&path).expect("save");

    let reloaded = config::load_or_default(&path).expect("reload");
    assert_eq!(reloaded, edited);
}

#[test]
fn partial_config_fills_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("benchmark.toml");
    std::fs::write(
        &path,
        "language = \"en\"\n[extraction.scenario]\ntarget_purity = 0.99\n",
    )
    .expect("write");
    let cfg = config::load_or_default(&path).expect("load");
    assert_eq!(cfg.language, "en");
    assert_eq!(cfg.extraction.scenario.target_purity, 0.99);
    assert_eq!(cfg.extraction.scenario.feed_purity, 0.10);
    assert_eq!(cfg.extraction.extractants.len(), 2);
    assert_eq!(cfg.adsorption.candidates.len(), 3);
}

#[test]
fn broken_config_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("benchmark.toml");
    std::fs::write(&path, "language = [").expect("write");
    assert!(matches!(
        config::load_or_default(&path),
        Err(config::ConfigError::Parse(_))
    ));
}
