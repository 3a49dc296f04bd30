use serde::Serialize;

use crate::models::Tier;

#[derive(Debug, Clone, Serialize)]
pub struct LoyaltyTier {
    pub tier: Tier,
    pub description: String,
    pub required_points: u32,
    pub benefits: Vec<String>,
}

/// Where a points balance sits in the loyalty program.
#[derive(Debug, Clone, Serialize)]
pub struct TierStanding {
    pub points: u32,
    pub current: LoyaltyTier,
    pub next: Option<LoyaltyTier>,
    /// Percent of the way from `current` to `next`; 100 at the top tier.
    pub progress: f64,
}

impl TierStanding {
    /// `tiers` must be ordered by ascending `required_points` and start at 0.
    pub fn for_points(tiers: &[LoyaltyTier], points: u32) -> Option<TierStanding> {
        let index = tiers.iter().rposition(|t| points >= t.required_points)?;
        let current = tiers[index].clone();
        let next = tiers.get(index + 1).cloned();
        let progress = match &next {
            Some(next) => {
                let span = f64::from(next.required_points - current.required_points);
                f64::from(points - current.required_points) / span * 100.0
            }
            None => 100.0,
        };
        Some(TierStanding {
            points,
            current,
            next,
            progress,
        })
    }

    pub fn points_to_next(&self) -> Option<u32> {
        self.next.as_ref().map(|n| n.required_points - self.points)
    }

    pub fn progress_display(&self) -> String {
        format!("{:.0}", self.progress)
    }

    pub fn headline(&self) -> String {
        match &self.next {
            Some(next) => format!(
                "{} points until {}",
                next.required_points - self.points,
                next.tier.label()
            ),
            None => "Maximum tier achieved!".to_string(),
        }
    }

    pub fn is_current(&self, tier: &LoyaltyTier) -> bool {
        self.current.tier == tier.tier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn storefront_balance_is_silver() {
        let standing = TierStanding::for_points(&fixtures::loyalty_tiers(), 2500).unwrap();
        assert_eq!(standing.current.tier, Tier::Silver);
        assert_eq!(standing.next.as_ref().map(|t| t.tier), Some(Tier::Gold));
        assert_eq!(standing.points_to_next(), Some(2500));
        assert!((standing.progress - 37.5).abs() < f64::EPSILON);
        assert_eq!(standing.headline(), "2500 points until Gold");
    }

    #[test]
    fn boundaries_promote_exactly_at_required_points() {
        let tiers = fixtures::loyalty_tiers();
        assert_eq!(TierStanding::for_points(&tiers, 999).unwrap().current.tier, Tier::Bronze);
        assert_eq!(TierStanding::for_points(&tiers, 1000).unwrap().current.tier, Tier::Silver);
        let top = TierStanding::for_points(&tiers, 5000).unwrap();
        assert_eq!(top.current.tier, Tier::Gold);
        assert!(top.next.is_none());
        assert_eq!(top.progress, 100.0);
        assert_eq!(top.headline(), "Maximum tier achieved!");
    }

    #[test]
    fn empty_program_has_no_standing() {
        assert!(TierStanding::for_points(&[], 10).is_none());
    }
}
