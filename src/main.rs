use std::process::ExitCode;

use clap::Parser;
use separation_benchmark::cli::Cli;
use separation_benchmark::i18n::{self, keys, Translator};
use separation_benchmark::{app, logging};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level);
    if let Err(err) = app::start(&cli) {
        // 설정 로드 자체가 실패했을 수 있으므로 CLI/시스템 언어만 본다
        let lang = i18n::resolve_language(cli.lang.as_deref().unwrap_or("auto"), None);
        eprintln!("{}: {err}", Translator::new(&lang).t(keys::ERROR_PREFIX));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
