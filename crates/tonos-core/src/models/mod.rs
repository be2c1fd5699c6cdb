pub mod baseline;
pub mod eye;
pub mod factors;
pub mod record;
pub mod result;
pub mod target;

pub use baseline::{BaselineIop, BaselineSource, DEFAULT_UNTREATED_BASELINE_MMHG};
pub use eye::{Eye, PerEye};
pub use factors::{
    AgeRange, Cct, CentralField, CupDiscRatio, FamilyHistory, Finding, MeanDeviation, Myopia,
    Notching, OcularModifier, PatientFactor, SystemicFactor, parse_label,
};
pub use record::{EyeRiskFactors, RiskFactorRecord, SharedRiskFactors};
pub use result::{DomainScores, RiskTier, TrbsResult};
pub use target::{EyeTarget, TargetRecord};
