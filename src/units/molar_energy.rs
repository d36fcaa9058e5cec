use serde::{Deserialize, Serialize};

/// 몰당 에너지 단위. 내부 기준은 kJ/mol 이다.
///
/// eV, Hartree 는 입자 하나당 값을 아보가드로 수로 환산한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MolarEnergyUnit {
    KilojoulePerMol,
    JoulePerMol,
    KilocaloriePerMol,
    Electronvolt,
    Hartree,
}

const KJ_PER_KCAL: f64 = 4.184;
const KJ_MOL_PER_EV: f64 = 96.485_332;
const KJ_MOL_PER_HARTREE: f64 = 2_625.499_64;

impl MolarEnergyUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            MolarEnergyUnit::KilojoulePerMol => "kJ/mol",
            MolarEnergyUnit::JoulePerMol => "J/mol",
            MolarEnergyUnit::KilocaloriePerMol => "kcal/mol",
            MolarEnergyUnit::Electronvolt => "eV",
            MolarEnergyUnit::Hartree => "Ha",
        }
    }
}

/// kJ/mol 로 변환한다.
pub fn to_kj_per_mol(value: f64, unit: MolarEnergyUnit) -> f64 {
    match unit {
        MolarEnergyUnit::KilojoulePerMol => value,
        MolarEnergyUnit::JoulePerMol => value / 1000.0,
        MolarEnergyUnit::KilocaloriePerMol => value * KJ_PER_KCAL,
        MolarEnergyUnit::Electronvolt => value * KJ_MOL_PER_EV,
        MolarEnergyUnit::Hartree => value * KJ_MOL_PER_HARTREE,
    }
}

/// kJ/mol 값을 원하는 단위로 변환한다.
pub fn from_kj_per_mol(value: f64, unit: MolarEnergyUnit) -> f64 {
    match unit {
        MolarEnergyUnit::KilojoulePerMol => value,
        MolarEnergyUnit::JoulePerMol => value * 1000.0,
        MolarEnergyUnit::KilocaloriePerMol => value / KJ_PER_KCAL,
        MolarEnergyUnit::Electronvolt => value / KJ_MOL_PER_EV,
        MolarEnergyUnit::Hartree => value / KJ_MOL_PER_HARTREE,
    }
}

/// 몰당 에너지를 변환한다.
pub fn convert_molar_energy(value: f64, from: MolarEnergyUnit, to: MolarEnergyUnit) -> f64 {
    from_kj_per_mol(to_kj_per_mol(value, from), to)
}
