use std::io::Write;

use thiserror::Error;

use crate::adsorption;
use crate::charts::{self, ChartError};
use crate::cli::{Cli, Command};
use crate::config::{self, Config, ConfigError};
use crate::conversion::{self, ConversionError, QuantityKind};
use crate::error::CalcError;
use crate::extraction;
use crate::i18n::{self, keys, Translator};
use crate::report;
use crate::units;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/터미널 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 계산 입력 오류
    #[error("계산 오류: {0}")]
    Calc(#[from] CalcError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 차트 생성 오류
    #[error("차트 오류: {0}")]
    Chart(#[from] ChartError),
}

/// CLI 인자와 설정으로 번역기를 만든다. CLI 플래그가 설정보다 우선한다.
pub fn translator_for(cli: &Cli, config: &Config) -> Translator {
    let lang = i18n::resolve_language(
        cli.lang.as_deref().unwrap_or("auto"),
        Some(config.language.as_str()),
    );
    Translator::new_with_pack(&lang, config.language_pack_dir.as_deref())
}

/// 설정 파일을 로드한 뒤 명령을 실행하고 결과를 표준 출력에 쓴다.
pub fn start(cli: &Cli) -> Result<(), AppError> {
    let cfg = config::load_or_default(&cli.config)?;
    let tr = translator_for(cli, &cfg);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli, &cfg, &tr, &mut out)?;
    out.flush()?;
    Ok(())
}

/// 명령 하나를 실행한다. 명령이 없으면 두 보고서를 모두 출력한다.
pub fn run(cli: &Cli, config: &Config, tr: &Translator, out: &mut dyn Write) -> Result<(), AppError> {
    let command = cli
        .command
        .clone()
        .unwrap_or(Command::All { details: false });

    match command {
        Command::Extraction { details } => write_extraction(config, tr, details, out)?,
        Command::Adsorption => write_adsorption(config, tr, out)?,
        Command::All { details } => {
            write_extraction(config, tr, details, out)?;
            writeln!(out)?;
            write_adsorption(config, tr, out)?;
        }
        Command::Stages {
            beta,
            target,
            feed,
            efficiency,
        } => {
            let breakdown = extraction::stage_breakdown(beta, target, feed)?;
            let practical = extraction::practical_stages(breakdown.stages, efficiency)?;
            write!(
                out,
                "{}",
                report::render_stage_calculation(&breakdown, practical, efficiency, tr)
            )?;
        }
        Command::Lifetime {
            binding_new,
            reference,
            temperature,
            temperature_unit,
            energy_unit,
            reference_lifetime,
        } => {
            let t_unit = conversion::parse_temperature_unit(&temperature_unit)?;
            let e_unit = conversion::parse_molar_energy_unit(&energy_unit)?;
            let estimate = adsorption::estimate_lifetime(
                units::to_kj_per_mol(binding_new, e_unit),
                units::to_kj_per_mol(reference, e_unit),
                reference_lifetime.unwrap_or(config.adsorption.reference_lifetime_hours),
                units::to_kelvin(temperature, t_unit),
            )?;
            write!(out, "{}", report::render_lifetime_calculation(&estimate, tr))?;
        }
        Command::Convert {
            kind,
            value,
            from,
            to,
        } => {
            let kind: QuantityKind = kind.parse()?;
            let result = conversion::convert(kind, value, &from, &to)?;
            writeln!(
                out,
                "{} {value} {} = {result:.6} {}",
                tr.t(keys::CONVERSION_RESULT),
                conversion::unit_symbol(kind, &from)?,
                conversion::unit_symbol(kind, &to)?
            )?;
        }
        Command::Charts { output } => {
            let dir = output.unwrap_or_else(|| config.charts.output_dir.clone());
            for path in charts::generate_all(config, &dir)? {
                writeln!(out, "{} {}", tr.t(keys::CHART_WRITTEN), path.display())?;
            }
        }
    }
    Ok(())
}

fn write_extraction(
    config: &Config,
    tr: &Translator,
    details: bool,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let audit =
        extraction::audit_extractants(&config.extraction.scenario, &config.extraction.extractants)?;
    write!(out, "{}", report::render_extraction_report(&audit, tr, details))?;
    Ok(())
}

fn write_adsorption(config: &Config, tr: &Translator, out: &mut dyn Write) -> Result<(), AppError> {
    let cfg = &config.adsorption;
    let audit = adsorption::audit_adsorbents(&cfg.scenario, &cfg.reference, &cfg.candidates)?;
    let screening = adsorption::fluorocatcher_screening();
    write!(
        out,
        "{}",
        report::render_adsorption_report(&audit, &screening, tr)
    )?;
    Ok(())
}
