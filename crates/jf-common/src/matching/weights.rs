/// Category weights for the fit score. A fully satisfied category contributes
/// exactly its weight, so the six categories sum to 100 on a perfect match.
pub const STANDARD_WEIGHTS: ScoreWeights = ScoreWeights {
    required_skills: 30.0,
    preferred_skills: 10.0,
    tools: 10.0,
    experience: 25.0,
    education: 15.0,
    eligibility: 10.0,
};

/// Deduction applied when the job both requires a visa and disallows remote
/// work. The only deduction path in the engine.
pub const VISA_NO_REMOTE_PENALTY: f64 = 5.0;

#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    pub required_skills: f64,
    pub preferred_skills: f64,
    pub tools: f64,
    pub experience: f64,
    pub education: f64,
    pub eligibility: f64,
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.required_skills
            + self.preferred_skills
            + self.tools
            + self.experience
            + self.education
            + self.eligibility
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one_hundred() {
        assert!((STANDARD_WEIGHTS.sum() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn visa_penalty_stays_below_eligibility_weight() {
        assert!(VISA_NO_REMOTE_PENALTY < STANDARD_WEIGHTS.eligibility);
    }
}
