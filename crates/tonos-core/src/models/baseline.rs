use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Documented system default when no untreated measurement exists.
pub const DEFAULT_UNTREATED_BASELINE_MMHG: f64 = 21.0;

/// Where a baseline pressure came from. Callers warn before acting on a
/// `Default` baseline; `Derived` means current treated IOP plus the
/// medication-count adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BaselineSource {
    Measured,
    Default,
    Derived,
}

/// An untreated baseline IOP for one eye, tagged with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BaselineIop {
    pub value_mmhg: f64,
    pub source: BaselineSource,
}

impl BaselineIop {
    pub fn measured(value_mmhg: f64) -> Self {
        Self {
            value_mmhg,
            source: BaselineSource::Measured,
        }
    }

    pub fn derived(value_mmhg: f64) -> Self {
        Self {
            value_mmhg,
            source: BaselineSource::Derived,
        }
    }

    /// The fallback baseline used when no measurement is available.
    /// Absence of data yields this, never an error.
    pub fn system_default() -> Self {
        Self {
            value_mmhg: DEFAULT_UNTREATED_BASELINE_MMHG,
            source: BaselineSource::Default,
        }
    }
}
