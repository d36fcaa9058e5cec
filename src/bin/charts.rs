//! 벤치마크 그림 4종을 한 번에 생성한다.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use separation_benchmark::config::{self, DEFAULT_CONFIG_PATH};
use separation_benchmark::{charts, logging};

/// 벤치마크 그림 생성기
#[derive(Parser, Debug)]
#[command(name = "separation_benchmark_charts")]
#[command(version, about, long_about = None)]
struct Args {
    /// 설정 파일 경로
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 출력 디렉터리 (기본값은 설정 파일의 charts.output_dir)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 로그 상세도
    #[arg(short = 'v', long = "verbose-log", action = clap::ArgAction::Count)]
    log_level: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    // 생성된 파일 목록은 info 로그로 출력한다
    logging::init(args.log_level.max(1));
    if let Err(err) = try_run(&args) {
        eprintln!("오류: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn try_run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::load_or_default(&args.config)?;
    let dir = args
        .output
        .clone()
        .unwrap_or_else(|| cfg.charts.output_dir.clone());
    let written = charts::generate_all(&cfg, &dir)?;
    log::info!("{}개 파일 생성 완료: {}", written.len(), dir.display());
    Ok(())
}
