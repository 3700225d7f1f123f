//! Published staking terms.
//!
//! The backend applies the real figures; these only drive the terms panel
//! and the reward preview next to the stake form.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StakingTerms {
    pub apy_percent: f64,
    pub term_days: u32,
    /// Platform fee, as a share of the reward.
    pub commission_percent: f64,
    /// Share of the accrued reward lost when unstaking before the term ends.
    pub early_withdrawal_penalty_percent: f64,
    /// Share of a referral's stake credited to the referrer.
    pub referral_bonus_percent: f64,
}

pub const TERMS: StakingTerms = StakingTerms {
    apy_percent: 12.0,
    term_days: 30,
    commission_percent: 0.5,
    early_withdrawal_penalty_percent: 10.0,
    referral_bonus_percent: 5.0,
};

impl StakingTerms {
    pub fn daily_reward(&self, amount: f64) -> f64 {
        amount * self.apy_percent / 100.0 / 365.0
    }

    pub fn projected_reward(&self, amount: f64, days: u32) -> f64 {
        self.daily_reward(amount) * f64::from(days)
    }

    /// Reward for holding `amount` through one full term.
    pub fn term_reward(&self, amount: f64) -> f64 {
        self.projected_reward(amount, self.term_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_reward_matches_apy() {
        let daily = TERMS.daily_reward(365.0);
        assert!((daily - 0.12).abs() < 1e-9);
    }

    #[test]
    fn test_term_reward() {
        let reward = TERMS.term_reward(1000.0);
        assert!((reward - 1000.0 * 0.12 / 365.0 * 30.0).abs() < 1e-9);
        assert_eq!(TERMS.projected_reward(1000.0, 0), 0.0);
    }
}
