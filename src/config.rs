use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::adsorption::{self, Adsorbent, AdsorptionScenario};
use crate::extraction::{self, Extractant, ExtractionScenario};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "benchmark.toml";

/// 희토류 분리 비교 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub scenario: ExtractionScenario,
    /// 첫 줄이 기준, 마지막 줄이 후보 기술
    pub extractants: Vec<Extractant>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            scenario: ExtractionScenario::default(),
            extractants: extraction::default_extractants(),
        }
    }
}

/// PFAS 흡착 비교 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdsorptionConfig {
    /// 기준 흡착제의 파과 시간 [h]. 절대 수명 추정에 사용.
    pub reference_lifetime_hours: f64,
    pub scenario: AdsorptionScenario,
    pub reference: Adsorbent,
    pub candidates: Vec<Adsorbent>,
}

impl Default for AdsorptionConfig {
    fn default() -> Self {
        Self {
            reference_lifetime_hours: adsorption::REFERENCE_LIFETIME_HOURS,
            scenario: AdsorptionScenario::default(),
            reference: adsorption::default_reference(),
            candidates: adsorption::default_candidates(),
        }
    }
}

/// 차트 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    /// 축/라벨을 포함한 벡터 그림
    Svg,
    /// 데이터만 그린 래스터 그림
    Png,
}

impl ChartFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Svg => "svg",
            ChartFormat::Png => "png",
        }
    }
}

/// 차트 생성 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub output_dir: PathBuf,
    pub formats: Vec<ChartFormat>,
    pub width: u32,
    pub height: u32,
    /// β 스윕 구간 10^start ~ 10^end
    pub sweep_start_exponent: f64,
    pub sweep_end_exponent: f64,
    pub sweep_points: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("assets/images"),
            formats: vec![ChartFormat::Svg, ChartFormat::Png],
            width: 1200,
            height: 700,
            sweep_start_exponent: 0.0,
            sweep_end_exponent: 5.0,
            sweep_points: 1000,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 보고서 언어 (auto/ko/en)
    pub language: String,
    /// 언어팩(TOML) 디렉터리
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_pack_dir: Option<String>,
    pub extraction: ExtractionConfig,
    pub adsorption: AdsorptionConfig,
    pub charts: ChartConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            extraction: ExtractionConfig::default(),
            adsorption: AdsorptionConfig::default(),
            charts: ChartConfig::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        log::debug!("설정 로드: {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        log::info!("기본 설정 파일 생성: {}", path.display());
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML 파일로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}
