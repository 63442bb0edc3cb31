use serde::{Deserialize, Serialize};

use crate::models::itinerary::Activity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight for the activity's rating
    pub rating_weight: f32,
    /// Weight for how much of the per-day budget the activity leaves
    pub affordability_weight: f32,
    /// Weight for matching the traveler's interests
    pub interest_weight: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            rating_weight: 0.4,
            affordability_weight: 0.4,
            interest_weight: 0.2,
        }
    }
}

impl ScoringWeights {
    /// Create weights from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            rating_weight: std::env::var("ACTIVITY_RATING_WEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.rating_weight),
            affordability_weight: std::env::var("ACTIVITY_AFFORDABILITY_WEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.affordability_weight),
            interest_weight: std::env::var("ACTIVITY_INTEREST_WEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.interest_weight),
        }
    }
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct ScoreBreakdown {
    pub rating_score: f32,
    pub affordability_score: f32,
    pub interest_score: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredActivity {
    pub activity: Activity,
    pub total_score: f32,
    pub score_breakdown: ScoreBreakdown,
}

#[derive(Default)]
pub struct ActivityScorer {
    pub weights: ScoringWeights,
}

impl ActivityScorer {
    pub fn new() -> Self {
        Self {
            weights: ScoringWeights::from_env(),
        }
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Score one activity against the traveler's interests and the day's
    /// budget. Each sub-score lands in [0, 1].
    pub fn score_activity(
        &self,
        activity: &Activity,
        interests: &[String],
        per_day_budget: i64,
    ) -> ScoredActivity {
        let rating_score = (activity.rating / 5.0).clamp(0.0, 1.0);

        // Over-budget activities contribute zero, not a negative score;
        // max(budget, 1) keeps a zero budget from dividing by zero.
        let affordability_score =
            (1.0 - activity.price as f32 / per_day_budget.max(1) as f32).max(0.0);

        let interest_score = if self.matches_interest(activity, interests) {
            1.0
        } else {
            // Neutral default so good activities outside the stated
            // interests are not zeroed out.
            0.5
        };

        let total_score = rating_score * self.weights.rating_weight
            + affordability_score * self.weights.affordability_weight
            + interest_score * self.weights.interest_weight;

        ScoredActivity {
            activity: activity.clone(),
            total_score,
            score_breakdown: ScoreBreakdown {
                rating_score,
                affordability_score,
                interest_score,
            },
        }
    }

    /// Rank activities best-first. The sort is stable: equal scores keep
    /// their input order. Truncation to a per-day cap is the caller's job.
    pub fn rank(
        &self,
        activities: Vec<Activity>,
        interests: &[String],
        per_day_budget: i64,
    ) -> Vec<Activity> {
        let mut scored: Vec<ScoredActivity> = activities
            .iter()
            .map(|activity| self.score_activity(activity, interests, per_day_budget))
            .collect();

        // Sort by score descending
        scored.sort_by(|a, b| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored.into_iter().map(|s| s.activity).collect()
    }

    fn matches_interest(&self, activity: &Activity, interests: &[String]) -> bool {
        let name = activity.name.to_lowercase();
        let description = activity.description.to_lowercase();

        interests.iter().any(|interest| {
            let interest = interest.to_lowercase();
            !interest.is_empty() && (name.contains(&interest) || description.contains(&interest))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn activity(name: &str, desc: &str, price: i64, rating: f32) -> Activity {
        Activity {
            name: name.to_string(),
            description: desc.to_string(),
            price,
            duration: "2 hours".to_string(),
            rating,
            time: "9:00 AM".to_string(),
        }
    }

    fn interests(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_perfect_activity_scores_one() {
        let scorer = ActivityScorer::default();
        let free_beach_walk = activity("Sunset Beach Walk", "stroll along the shore", 0, 5.0);

        let scored = scorer.score_activity(&free_beach_walk, &interests(&["Beach"]), 1000);
        assert!((scored.total_score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_interest_match_is_case_insensitive_substring() {
        let scorer = ActivityScorer::default();
        let tour = activity("Street Food Tour", "markets and snacks", 800, 4.6);

        let matched = scorer.score_activity(&tour, &interests(&["food"]), 1000);
        assert_eq!(matched.score_breakdown.interest_score, 1.0);

        let unmatched = scorer.score_activity(&tour, &interests(&["History"]), 1000);
        assert_eq!(unmatched.score_breakdown.interest_score, 0.5);
    }

    #[test]
    fn test_description_can_carry_the_interest_match() {
        let scorer = ActivityScorer::default();
        let show = activity("Evening Show", "classical dance and culture", 500, 4.5);
        let scored = scorer.score_activity(&show, &interests(&["Culture"]), 1000);
        assert_eq!(scored.score_breakdown.interest_score, 1.0);
    }

    #[test]
    fn test_over_budget_activity_clamps_affordability_to_zero() {
        let scorer = ActivityScorer::default();
        let splurge = activity("Fine Dining", "tasting menu", 3000, 4.8);
        let scored = scorer.score_activity(&splurge, &[], 1000);
        assert_eq!(scored.score_breakdown.affordability_score, 0.0);
    }

    #[test]
    fn test_zero_budget_does_not_divide_by_zero() {
        let scorer = ActivityScorer::default();
        let free = activity("Temple Visit", "quiet morning", 0, 4.7);
        let scored = scorer.score_activity(&free, &[], 0);
        assert_eq!(scored.score_breakdown.affordability_score, 1.0);
    }

    #[test]
    fn test_rank_orders_best_first() {
        let scorer = ActivityScorer::default();
        let ranked = scorer.rank(
            vec![
                activity("Fine Dining", "tasting menu", 3000, 4.8),
                activity("Sunset Beach Walk", "free stroll", 0, 4.8),
            ],
            &interests(&["Beach"]),
            1000,
        );
        assert_eq!(ranked[0].name, "Sunset Beach Walk");
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let scorer = ActivityScorer::default();
        let ranked = scorer.rank(
            vec![
                activity("Museum Visit", "artifacts", 300, 4.5),
                activity("Heritage Walk", "old town", 300, 4.5),
            ],
            &[],
            1000,
        );
        assert_eq!(ranked[0].name, "Museum Visit");
        assert_eq!(ranked[1].name, "Heritage Walk");
    }

    #[test]
    fn test_rank_empty_input_yields_empty_output() {
        let scorer = ActivityScorer::default();
        assert!(scorer.rank(vec![], &interests(&["Beach"]), 1000).is_empty());
    }

    #[test]
    #[serial]
    fn test_weights_from_env_override_defaults() {
        std::env::set_var("ACTIVITY_RATING_WEIGHT", "0.6");
        let weights = ScoringWeights::from_env();
        std::env::remove_var("ACTIVITY_RATING_WEIGHT");

        assert_eq!(weights.rating_weight, 0.6);
        assert_eq!(weights.affordability_weight, 0.4);
        assert_eq!(weights.interest_weight, 0.2);
    }

    #[test]
    #[serial]
    fn test_weights_from_env_ignores_garbage() {
        std::env::set_var("ACTIVITY_RATING_WEIGHT", "not-a-number");
        let weights = ScoringWeights::from_env();
        std::env::remove_var("ACTIVITY_RATING_WEIGHT");

        assert_eq!(weights.rating_weight, 0.4);
    }
}
