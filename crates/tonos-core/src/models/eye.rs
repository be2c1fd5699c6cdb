use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which eye a measurement or finding belongs to, in the usual clinical
/// abbreviations: OD (oculus dexter, right) and OS (oculus sinister, left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum Eye {
    Od,
    Os,
}

impl std::fmt::Display for Eye {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Eye::Od => write!(f, "OD"),
            Eye::Os => write!(f, "OS"),
        }
    }
}

impl Eye {
    pub const BOTH: [Eye; 2] = [Eye::Od, Eye::Os];
}

/// A pair of values, one per eye.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PerEye<T> {
    pub od: T,
    pub os: T,
}

impl<T> PerEye<T> {
    pub fn new(od: T, os: T) -> Self {
        Self { od, os }
    }

    /// Build a pair by evaluating `f` once per eye.
    pub fn from_fn(mut f: impl FnMut(Eye) -> T) -> Self {
        Self {
            od: f(Eye::Od),
            os: f(Eye::Os),
        }
    }

    pub fn get(&self, eye: Eye) -> &T {
        match eye {
            Eye::Od => &self.od,
            Eye::Os => &self.os,
        }
    }

    pub fn get_mut(&mut self, eye: Eye) -> &mut T {
        match eye {
            Eye::Od => &mut self.od,
            Eye::Os => &mut self.os,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PerEye<U> {
        PerEye {
            od: f(self.od),
            os: f(self.os),
        }
    }
}
