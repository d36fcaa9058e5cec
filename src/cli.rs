//! 명령행 인터페이스 정의.
//!
//! - `extraction` 희토류 분리 감사 보고서
//! - `adsorption` PFAS 흡착 감사 보고서
//! - `all` 두 보고서 모두 (기본값)
//! - `stages` 단수 한 번 계산
//! - `lifetime` 수명 배수 한 번 계산
//! - `convert` 온도/몰당 에너지 단위 변환
//! - `charts` 그림 생성

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::adsorption::{DEFAULT_TEMPERATURE_K, REFERENCE_BINDING_KJ_MOL};
use crate::config::DEFAULT_CONFIG_PATH;
use crate::extraction::{DEFAULT_FEED_PURITY, DEFAULT_STAGE_EFFICIENCY, DEFAULT_TARGET_PURITY};

/// 분리 공정 벤치마크 계산기
///
/// Kremser 단수 식과 아레니우스 상대 수명 모델로 기준 기술과 후보 기술을 비교한다.
#[derive(Parser, Debug)]
#[command(name = "separation_benchmark")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// 설정 파일 경로 (없으면 기본값으로 생성)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// 보고서 언어 (ko/en/auto)
    #[arg(short = 'L', long, global = true)]
    pub lang: Option<String>,

    /// 로그 상세도 (-v: info, -vv: debug)
    #[arg(short = 'v', long = "verbose-log", global = true, action = clap::ArgAction::Count)]
    pub log_level: u8,

    /// 실행할 명령
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// 사용 가능한 명령.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// 희토류(Nd/Fe) 분리 감사 보고서
    Extraction {
        /// Kremser 계산 중간값 출력
        #[arg(short, long)]
        details: bool,
    },

    /// PFAS 흡착제 감사 보고서
    Adsorption,

    /// 두 보고서 모두 출력
    All {
        /// Kremser 계산 중간값 출력
        #[arg(short, long)]
        details: bool,
    },

    /// 이론/실제 단수 계산
    Stages {
        /// 분리계수 β (> 1)
        #[arg(short, long)]
        beta: f64,

        /// 목표 순도 (0~1)
        #[arg(short, long, default_value_t = DEFAULT_TARGET_PURITY)]
        target: f64,

        /// 원료 순도 (0~1)
        #[arg(short, long, default_value_t = DEFAULT_FEED_PURITY)]
        feed: f64,

        /// 단 효율 (0~1]
        #[arg(short, long, default_value_t = DEFAULT_STAGE_EFFICIENCY)]
        efficiency: f64,
    },

    /// 기준 흡착제 대비 상대 수명 계산
    Lifetime {
        /// 신규 흡착제 결합에너지
        #[arg(long = "new", allow_negative_numbers = true)]
        binding_new: f64,

        /// 기준 흡착제 결합에너지
        #[arg(short, long, allow_negative_numbers = true, default_value_t = REFERENCE_BINDING_KJ_MOL)]
        reference: f64,

        /// 온도
        #[arg(short, long, allow_negative_numbers = true, default_value_t = DEFAULT_TEMPERATURE_K)]
        temperature: f64,

        /// 온도 단위 (K, C, F, R)
        #[arg(long, default_value = "K")]
        temperature_unit: String,

        /// 결합에너지 단위 (kJ/mol, kcal/mol, eV, Ha ...)
        #[arg(long, default_value = "kJ/mol")]
        energy_unit: String,

        /// 기준 흡착제 수명 [h] (기본값은 설정 파일의 adsorption.reference_lifetime_hours)
        #[arg(long)]
        reference_lifetime: Option<f64>,
    },

    /// 단위 변환 (temperature, energy)
    Convert {
        /// 물리량 종류
        kind: String,

        /// 변환할 값
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// 원래 단위
        #[arg(long)]
        from: String,

        /// 목표 단위
        #[arg(long)]
        to: String,
    },

    /// 그림 생성
    Charts {
        /// 출력 디렉터리 (기본값은 설정 파일의 charts.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_defaults() {
        let cli = Cli::parse_from(["separation_benchmark"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("benchmark.toml"));
        assert_eq!(cli.log_level, 0);
    }

    #[test]
    fn lifetime_accepts_negative_energies() {
        let cli = Cli::parse_from([
            "separation_benchmark",
            "-vv",
            "lifetime",
            "--new=-85",
            "--reference=-45",
        ]);
        assert_eq!(cli.log_level, 2);
        match cli.command {
            Some(Command::Lifetime {
                binding_new,
                reference,
                temperature,
                ..
            }) => {
                assert_eq!(binding_new, -85.0);
                assert_eq!(reference, -45.0);
                assert_eq!(temperature, 298.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn stages_uses_default_purities() {
        let cli = Cli::parse_from(["separation_benchmark", "stages", "--beta", "2.5"]);
        assert_eq!(
            cli.command,
            Some(Command::Stages {
                beta: 2.5,
                target: 0.999,
                feed: 0.1,
                efficiency: 0.9,
            })
        );
    }
}
