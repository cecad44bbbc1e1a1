//! Analysis report types
//!
//! The output contract parsed from the model's reply. Wire shape is
//! camelCase JSON; enum values are enforced by typed deserialization, the
//! score range by [`AnalysisReport::check_score`].

use serde::{Deserialize, Serialize};

/// Structured result of analyzing one contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Extracted contract terms, in document order.
    pub contract_terms: Vec<ContractTerm>,

    /// Problems the auditor flagged, in order of appearance.
    pub potential_issues: Vec<PotentialIssue>,

    /// Overall fairness score, 0-100.
    pub trustworthiness_score: u8,

    /// Free-text assessment for the buyer.
    pub summary: String,
}

/// One extracted term and its assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractTerm {
    pub term: String,
    pub value: String,
    pub flag: TermFlag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// One flagged issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PotentialIssue {
    pub title: String,
    pub description: String,
    pub severity: IssueSeverity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// Assessment flag for a contract term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermFlag {
    Normal,
    Warning,
    High,
    Good,
}

/// Severity of a flagged issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    High,
    Warning,
    Good,
}

/// Qualitative band for a trustworthiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// 0-59: significant problems.
    Poor,
    /// 60-79: acceptable, with terms deserving attention.
    Caution,
    /// 80-100: fair contract.
    Good,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=59 => Self::Poor,
            60..=79 => Self::Caution,
            _ => Self::Good,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Caution => "caution",
            Self::Good => "good",
        }
    }
}

impl AnalysisReport {
    /// Enforce the score invariant: 0-100 inclusive.
    ///
    /// Deserialization already rejects negatives and anything above 255;
    /// this closes the 101-255 gap. An out-of-range score is a malformed
    /// reply, not a report to forward.
    pub fn check_score(&self) -> Result<(), u8> {
        if self.trustworthiness_score > 100 {
            return Err(self.trustworthiness_score);
        }
        Ok(())
    }

    /// Band for the report's score.
    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.trustworthiness_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report_json() -> &'static str {
        r#"{
            "contractTerms": [
                {"term": "Purchase price", "value": "$24,500", "flag": "normal"},
                {"term": "Interest rate (APR)", "value": "14.9%", "flag": "high",
                 "details": "well above market average"}
            ],
            "potentialIssues": [
                {"title": "Mandatory arbitration", "description": "Clause 12 waives court access",
                 "severity": "warning", "recommendation": "Ask to strike the clause"}
            ],
            "trustworthinessScore": 62,
            "summary": "Mostly standard terms, but the financing rate is high."
        }"#
    }

    #[test]
    fn test_parses_camel_case_wire_shape() {
        let report: AnalysisReport = serde_json::from_str(sample_report_json()).unwrap();
        assert_eq!(report.contract_terms.len(), 2);
        assert_eq!(report.contract_terms[0].flag, TermFlag::Normal);
        assert_eq!(report.contract_terms[1].flag, TermFlag::High);
        assert_eq!(report.contract_terms[0].details, None);
        assert_eq!(report.potential_issues[0].severity, IssueSeverity::Warning);
        assert_eq!(report.trustworthiness_score, 62);
    }

    #[test]
    fn test_serializes_back_to_camel_case() {
        let report: AnalysisReport = serde_json::from_str(sample_report_json()).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("contractTerms").is_some());
        assert!(value.get("trustworthinessScore").is_some());
        assert!(value["contractTerms"][0].get("details").is_none());
    }

    #[test]
    fn test_unknown_flag_value_rejected() {
        let json = r#"{"term": "Price", "value": "$1", "flag": "severe"}"#;
        assert!(serde_json::from_str::<ContractTerm>(json).is_err());
    }

    #[test]
    fn test_negative_score_rejected_by_deserialization() {
        let json = sample_report_json().replace("62", "-5");
        assert!(serde_json::from_str::<AnalysisReport>(&json).is_err());
    }

    #[test]
    fn test_check_score_closes_u8_gap() {
        let mut report: AnalysisReport = serde_json::from_str(sample_report_json()).unwrap();
        assert!(report.check_score().is_ok());

        report.trustworthiness_score = 101;
        assert_eq!(report.check_score(), Err(101));
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Caution);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Caution);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Good);
    }
}
