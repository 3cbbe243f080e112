//! Per-unit batch reporting.
//!
//! A batch translating many units reports success or failure per unit and
//! never aborts the whole batch on one unit's failure. The report types are
//! serializable so host tooling can surface them.

use serde::Serialize;

use crate::errors::ConvertError;

/// Outcome of translating one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum UnitOutcome {
    Converted,
    Failed { error: String },
}

/// One entry in a batch report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitReport {
    /// Host-supplied unit name (typically the file path).
    pub unit: String,
    pub outcome: UnitOutcome,
}

impl UnitReport {
    pub fn converted(unit: impl Into<String>) -> Self {
        UnitReport {
            unit: unit.into(),
            outcome: UnitOutcome::Converted,
        }
    }

    pub fn failed(unit: impl Into<String>, error: &ConvertError) -> Self {
        UnitReport {
            unit: unit.into(),
            outcome: UnitOutcome::Failed {
                error: error.to_string(),
            },
        }
    }
}

/// Summary of a whole batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub units: Vec<UnitReport>,
}

impl BatchReport {
    pub fn push(&mut self, report: UnitReport) {
        self.units.push(report);
    }

    pub fn converted_count(&self) -> usize {
        self.units
            .iter()
            .filter(|u| u.outcome == UnitOutcome::Converted)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.units.len() - self.converted_count()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
