//! 터미널 로거 초기화.

use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// `-v` 개수에 따른 로그 수준. 0: warn, 1: info, 2 이상: debug
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// 표준 에러로 로그를 출력하는 로거를 설치한다. 이미 설치되어 있으면 무시한다.
pub fn init(verbosity: u8) {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    let _ = TermLogger::init(
        level_for(verbosity),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
