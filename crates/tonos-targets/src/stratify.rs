//! Visit-level risk stratification, the follow-up side of the target
//! workflow: IOP control, structural (OCT RNFL) and functional (visual
//! field) trends roll up into a 0-100 risk score, a risk level, and a
//! follow-up recommendation.
//!
//! All pure functions over one patient's measurement history; the caller
//! re-runs them whenever a new measurement lands.

use serde::{Deserialize, Serialize};

use crate::status::{TargetStatus, classify_iop};

/// Trend of a structural or functional series across visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Progression {
    /// Fewer than two prior measurements; no trend yet.
    Baseline,
    Stable,
    Marginal,
    Progressive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiseaseSeverity {
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Adherence {
    Good,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// Severity of IOP overage against the final target: three points per
/// mmHg above, capped at 30. At or below target is zero.
pub fn iop_severity(measured_mmhg: f64, final_target_mmhg: f64) -> u8 {
    if classify_iop(measured_mmhg, final_target_mmhg) != TargetStatus::AboveTarget {
        return 0;
    }
    let overage = measured_mmhg - final_target_mmhg;
    ((overage * 3.0) as u8).min(30)
}

fn annualized_change(current: f64, previous: &[f64], months_between_visits: u32) -> Option<f64> {
    if previous.len() < 2 {
        return None;
    }
    let last = previous[previous.len() - 1];
    let per_month = (current - last) / f64::from(months_between_visits.max(1));
    Some(per_month * 12.0)
}

/// Assess OCT RNFL thinning. The red flag is loss above 2 µm/year.
///
/// Returns the trend and its severity contribution (0-25).
pub fn assess_rnfl_progression(
    current_microns: f64,
    previous_microns: &[f64],
    months_between_visits: u32,
) -> (Progression, u8) {
    let Some(annual) = annualized_change(current_microns, previous_microns, months_between_visits)
    else {
        return (Progression::Baseline, 0);
    };
    let annual_loss = annual.abs();
    if annual_loss > 2.0 {
        (Progression::Progressive, ((annual_loss * 5.0) as u8).min(25))
    } else if annual_loss > 1.0 {
        (Progression::Marginal, 10)
    } else {
        (Progression::Stable, 0)
    }
}

/// Assess visual-field mean deviation. MD grows more negative as the
/// field worsens, so the red flag is the measured value rising above the
/// trend by more than 1 dB/year.
///
/// Returns the trend and its severity contribution (0-25).
pub fn assess_vf_progression(
    current_md_db: f64,
    previous_md_db: &[f64],
    months_between_visits: u32,
) -> (Progression, u8) {
    let Some(annual) = annualized_change(current_md_db, previous_md_db, months_between_visits)
    else {
        return (Progression::Baseline, 0);
    };
    if annual > 1.0 {
        (Progression::Progressive, ((annual * 10.0) as u8).min(25))
    } else if annual > 0.5 {
        (Progression::Marginal, 10)
    } else {
        (Progression::Stable, 0)
    }
}

/// Everything one stratification run reads.
#[derive(Debug, Clone, PartialEq)]
pub struct StratificationInputs {
    pub iop_severity: u8,
    pub rnfl: (Progression, u8),
    pub vf: (Progression, u8),
    pub disease_severity: DiseaseSeverity,
    /// Peak-to-trough IOP spread across recent visits, mmHg.
    pub pressure_fluctuation_mmhg: f64,
    pub adherence: Adherence,
}

/// One run's outcome: level, composite score, and the reasons that drove
/// it, in the order the domains were weighed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    pub risk_score: u8,
    pub reasons: Vec<String>,
}

/// Roll the domain severities up into a 0-100 score and level.
///
/// Weights: IOP control 40, RNFL 25, VF 20, disease severity 10,
/// fluctuation 5, with poor adherence adding a flat 15. Levels: <30 Low,
/// <70 Moderate, else High.
pub fn calculate_risk(inputs: &StratificationInputs) -> RiskAssessment {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    score += f64::from(inputs.iop_severity) * 1.3;
    if inputs.iop_severity > 0 {
        if inputs.iop_severity >= 20 {
            reasons.push("IOP significantly above target".to_string());
        } else {
            reasons.push("IOP above target range".to_string());
        }
    }

    let (rnfl_status, rnfl_severity) = inputs.rnfl;
    score += f64::from(rnfl_severity);
    match rnfl_status {
        Progression::Progressive => {
            reasons.push("Significant RNFL thinning detected".to_string());
        }
        Progression::Marginal => {
            reasons.push("Marginal RNFL changes observed".to_string());
        }
        _ => {}
    }

    let (vf_status, vf_severity) = inputs.vf;
    score += f64::from(vf_severity);
    match vf_status {
        Progression::Progressive => {
            reasons.push("Visual field deterioration".to_string());
        }
        Progression::Marginal => {
            reasons.push("Borderline VF changes".to_string());
        }
        _ => {}
    }

    score += match inputs.disease_severity {
        DiseaseSeverity::Mild => 0.0,
        DiseaseSeverity::Moderate => 3.0,
        DiseaseSeverity::Severe => 10.0,
    };
    if inputs.disease_severity == DiseaseSeverity::Severe {
        reasons.push("Severe glaucoma at baseline".to_string());
    }

    if inputs.pressure_fluctuation_mmhg > 5.0 {
        score += (inputs.pressure_fluctuation_mmhg as u8).min(5) as f64;
        reasons.push(format!(
            "High IOP fluctuation ({:.1} mmHg)",
            inputs.pressure_fluctuation_mmhg
        ));
    }

    if inputs.adherence == Adherence::Poor {
        score += 15.0;
        reasons.push("Poor medication adherence reported".to_string());
    }

    let risk_score = (score as u8).min(100);
    let risk_level = match risk_score {
        0..=29 => RiskLevel::Low,
        30..=69 => RiskLevel::Moderate,
        _ => RiskLevel::High,
    };

    if reasons.is_empty() {
        reasons.push("Stable glaucoma control".to_string());
    }

    RiskAssessment {
        risk_level,
        risk_score,
        reasons,
    }
}

/// Follow-up interval and actions for a (level, severity) pair.
pub fn recommend_followup(
    risk_level: RiskLevel,
    disease_severity: DiseaseSeverity,
) -> (u16, Vec<&'static str>) {
    use DiseaseSeverity::{Mild, Severe};
    use RiskLevel::{High, Low};
    match (risk_level, disease_severity) {
        (Low, Mild) => (180, vec!["Routine follow-up", "Annual VF and OCT"]),
        (Low, DiseaseSeverity::Moderate) => (120, vec!["Routine follow-up", "Annual VF and OCT"]),
        (Low, Severe) => (90, vec!["3-monthly follow-up", "Semi-annual VF and OCT"]),
        (RiskLevel::Moderate, Mild) => (
            120,
            vec![
                "4-monthly follow-up",
                "Annual VF and OCT",
                "Review medications",
            ],
        ),
        (RiskLevel::Moderate, DiseaseSeverity::Moderate) => (
            90,
            vec![
                "3-monthly follow-up",
                "Semi-annual VF and OCT",
                "Consider medication change",
            ],
        ),
        (RiskLevel::Moderate, Severe) => (
            60,
            vec![
                "2-monthly follow-up",
                "Quarterly VF and OCT",
                "Urgently review therapy",
            ],
        ),
        (High, Mild) => (
            60,
            vec![
                "2-monthly follow-up",
                "Semi-annual VF and OCT",
                "Urgent medication review",
            ],
        ),
        (High, DiseaseSeverity::Moderate) => (
            30,
            vec![
                "Monthly follow-up",
                "Quarterly VF and OCT",
                "Consider laser/surgery",
            ],
        ),
        (High, Severe) => (
            14,
            vec![
                "Urgent follow-up",
                "Monthly visits",
                "Urgent surgical consultation",
            ],
        ),
    }
}
