//! Prompt assets
//!
//! The instruction text sent with every analysis request. It is a static
//! asset: nothing in it is derived from the uploaded file.

/// Auditor instruction for vehicle purchase contracts.
///
/// Asks for ONLY a JSON object in the report shape, enumerates the allowed
/// `flag`/`severity` values, and defines the score bands used for
/// qualitative interpretation.
pub const CONTRACT_AUDIT_PROMPT: &str = r#"You are an experienced auditor of vehicle purchase contracts. Examine the attached contract document (image or PDF) and assess how fair and trustworthy it is for the buyer.

Respond with ONLY a JSON object in exactly this shape:

{
  "contractTerms": [
    {
      "term": "name of the term, e.g. 'Purchase price', 'Interest rate (APR)', 'Warranty'",
      "value": "the value as written in the contract",
      "flag": "normal | warning | high | good",
      "details": "optional short note on why this term was flagged"
    }
  ],
  "potentialIssues": [
    {
      "title": "short issue title",
      "description": "what the problem is and where it appears in the contract",
      "severity": "high | warning | good",
      "recommendation": "optional concrete advice for the buyer"
    }
  ],
  "trustworthinessScore": 75,
  "summary": "2-3 sentences summarizing the overall assessment for the buyer"
}

RULES:
- "flag" MUST be one of: normal, warning, high, good
- "severity" MUST be one of: high, warning, good
- "trustworthinessScore" MUST be an integer from 0 to 100:
  - 0-59: poor - significant problems, the buyer should be cautious
  - 60-79: caution - acceptable but with terms that deserve attention
  - 80-100: good - fair contract with standard terms
- Extract EVERY major term you can read: price, fees, interest rate, down payment, monthly payment, loan term, warranty, return policy, arbitration clauses
- Flag add-on products, undisclosed fees, above-market interest rates, as-is clauses, and mandatory arbitration as issues
- If part of the document is unreadable, say so in the summary rather than guessing

Return ONLY the JSON object, no other text."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_enumerates_allowed_values() {
        assert!(CONTRACT_AUDIT_PROMPT.contains("normal | warning | high | good"));
        assert!(CONTRACT_AUDIT_PROMPT.contains("high | warning | good"));
    }

    #[test]
    fn test_prompt_defines_score_bands() {
        assert!(CONTRACT_AUDIT_PROMPT.contains("0-59"));
        assert!(CONTRACT_AUDIT_PROMPT.contains("60-79"));
        assert!(CONTRACT_AUDIT_PROMPT.contains("80-100"));
    }

    #[test]
    fn test_prompt_demands_json_only() {
        assert!(CONTRACT_AUDIT_PROMPT.contains("ONLY the JSON object"));
    }
}
