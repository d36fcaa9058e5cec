use separation_benchmark::charts::{self, ChartData, Figure};
use separation_benchmark::config::{ChartFormat, Config};

fn small_config() -> Config {
    let mut cfg = Config::default();
    cfg.charts.width = 480;
    cfg.charts.height = 320;
    cfg.charts.sweep_points = 200;
    cfg
}

#[test]
fn generates_every_figure_in_both_formats() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = small_config();
    let written = charts::generate_all(&cfg, dir.path()).expect("charts");
    assert_eq!(written.len(), Figure::ALL.len() * 2);

    for path in &written {
        assert!(path.exists(), "{}", path.display());
        match path.extension().and_then(|e| e.to_str()) {
            Some("png") => {
                let img = image::open(path).expect("decode png");
                assert_eq!((img.width(), img.height()), (480, 320));
            }
            Some("svg") => {
                let svg = std::fs::read_to_string(path).expect("read svg");
                assert!(svg.contains("<svg"));
            }
            other => panic!("unexpected extension {other:?}"),
        }
    }

    let curve = std::fs::read_to_string(dir.path().join("separation_efficiency_curve.svg"))
        .expect("curve svg");
    assert!(curve.contains("Rare Earth Separation Efficiency"));
    assert!(curve.contains("Janus Ligand"));
}

#[test]
fn png_only_configuration() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = small_config();
    cfg.charts.formats = vec![ChartFormat::Png];
    let written = charts::generate_all(&cfg, &dir.path().join("out")).expect("charts");
    assert_eq!(written.len(), 4);
    assert!(dir.path().join("out").join("supply_chain_risk.png").exists());
}

#[test]
fn invalid_purity_fails_before_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = small_config();
    cfg.extraction.scenario.feed_purity = 0.9999;
    let err = charts::generate_all(&cfg, dir.path()).expect_err("bad purity");
    assert!(matches!(err, charts::ChartError::Calc(_)));
    assert!(ChartData::from_config(&cfg).is_err());
}
