//! 향류 액-액 추출 단수 계산 모듈 모음.

pub mod audit;
pub mod kremser;
pub mod sweep;

pub use audit::*;
pub use kremser::*;
pub use sweep::*;
