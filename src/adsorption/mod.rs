//! PFAS 흡착 수명 계산 모듈 모음.

pub mod audit;
pub mod lifetime;
pub mod screening;

pub use audit::*;
pub use lifetime::*;
pub use screening::*;
