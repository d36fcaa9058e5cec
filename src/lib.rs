//! 분리 공정 벤치마크 계산 라이브러리.
//!
//! 희토류 용매추출 단수(Kremser)와 PFAS 흡착제 상대 수명(아레니우스)을 계산하고
//! 보고서/그림으로 만든다. 핵심 계산은 CLI 없이도 사용할 수 있다.

pub mod adsorption;
pub mod app;
pub mod boltzmann;
pub mod charts;
pub mod cli;
pub mod config;
pub mod conversion;
pub mod error;
pub mod extraction;
pub mod i18n;
pub mod logging;
pub mod report;
pub mod units;

pub use adsorption::lifetime_factor;
pub use error::CalcError;
pub use extraction::stage_count;
