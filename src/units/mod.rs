//! 단위 정의 및 변환 모듈 모음.

pub mod molar_energy;
pub mod temperature;

pub use molar_energy::{convert_molar_energy, to_kj_per_mol, MolarEnergyUnit};
pub use temperature::{convert_temperature, to_kelvin, TemperatureUnit};
