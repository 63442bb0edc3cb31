use serde::Serialize;

use crate::models::itinerary::Itinerary;

const CHECK_COUNT: usize = 5;

/// Structural and budget checks evaluated over an assembled itinerary.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VerificationChecks {
    pub has_flights: bool,
    pub has_hotel: bool,
    pub has_activities: bool,
    pub budget_allocated: bool,
    pub within_budget: bool,
    pub all_passed: bool,
}

impl VerificationChecks {
    fn passed_count(&self) -> usize {
        [
            self.has_flights,
            self.has_hotel,
            self.has_activities,
            self.budget_allocated,
            self.within_budget,
        ]
        .iter()
        .filter(|&&check| check)
        .count()
    }
}

/// Budget compliance summary for the assembled itinerary.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BudgetStatus {
    pub is_valid: bool,
    pub total_spent: i64,
    pub remaining: i64,
    pub over_budget: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Verification {
    pub checks: VerificationChecks,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub quality_score: f32,
    pub budget_status: BudgetStatus,
}

pub struct ItineraryValidator;

impl ItineraryValidator {
    /// Verify itinerary completeness and budget compliance.
    ///
    /// Never fails and never mutates the itinerary: an over-budget or
    /// incomplete itinerary is reported, not rejected. The quality score is
    /// the share of passing checks; `all_passed` is reported alongside but
    /// not itself scored.
    pub fn verify(itinerary: &Itinerary) -> Verification {
        let remaining = itinerary.budget.as_ref().map(|b| b.remaining).unwrap_or(0);

        let mut checks = VerificationChecks {
            has_flights: itinerary.flights.is_some(),
            has_hotel: itinerary.hotel.is_some(),
            has_activities: itinerary
                .daily_plans
                .iter()
                .any(|day| !day.activities.is_empty()),
            budget_allocated: itinerary.budget.is_some(),
            within_budget: remaining >= 0,
            all_passed: false,
        };
        checks.all_passed = checks.passed_count() == CHECK_COUNT;

        let mut issues = Vec::new();
        if !checks.has_flights {
            issues.push("Missing flight information".to_string());
        }
        if !checks.has_hotel {
            issues.push("Missing hotel information".to_string());
        }
        if !checks.has_activities {
            issues.push("No activities planned".to_string());
        }
        if !checks.within_budget {
            issues.push("Budget exceeded".to_string());
        }

        let quality_score = checks.passed_count() as f32 / CHECK_COUNT as f32 * 100.0;

        let total_spent = itinerary
            .budget
            .as_ref()
            .map(|b| b.flights + b.hotel + b.activities)
            .unwrap_or(0);

        Verification {
            checks,
            issues,
            suggestions: Vec::new(),
            quality_score,
            budget_status: BudgetStatus {
                is_valid: remaining >= 0,
                total_spent,
                remaining,
                over_budget: (-remaining).max(0),
            },
        }
    }

    /// Second pass: map each reported issue to a canned remediation and
    /// flag thin days.
    pub fn suggest_improvements(
        itinerary: &Itinerary,
        verification: &Verification,
    ) -> Vec<String> {
        let mut suggestions = Vec::new();

        if verification.quality_score < 100.0 {
            for issue in &verification.issues {
                let issue = issue.to_lowercase();
                if issue.contains("flight") {
                    suggestions.push("Consider adding flight options".to_string());
                } else if issue.contains("hotel") {
                    suggestions.push("Add accommodation details".to_string());
                } else if issue.contains("activities") {
                    suggestions.push("Include more activities".to_string());
                } else if issue.contains("budget") {
                    suggestions.push("Reduce activity costs or adjust budget".to_string());
                }
            }
        }

        if !itinerary.daily_plans.is_empty()
            && itinerary
                .daily_plans
                .iter()
                .any(|day| day.activities.len() < 2)
        {
            suggestions.push("Some days have too few activities".to_string());
        }

        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::itinerary::{
        Activity, BudgetBreakdown, DailyPlan, Flight, FlightPair, Hotel,
    };

    fn flight(price: i64) -> Flight {
        Flight {
            airline: "IndiGo 6E-2345".to_string(),
            departure: "2025-12-01 08:30 AM".to_string(),
            arrival: "2025-12-01 11:45 AM".to_string(),
            price,
            duration: "3h 15m".to_string(),
        }
    }

    fn activity(price: i64) -> Activity {
        Activity {
            name: "Fort Tour".to_string(),
            description: "ramparts and views".to_string(),
            price,
            duration: "3 hours".to_string(),
            rating: 4.8,
            time: "9:00 AM".to_string(),
        }
    }

    fn complete_itinerary() -> Itinerary {
        let day1 = DailyPlan::new(
            1,
            "Dec 01".to_string(),
            vec![activity(500), activity(300)],
        );
        let day2 = DailyPlan::new(2, "Dec 02".to_string(), vec![activity(400), activity(200)]);

        Itinerary {
            destination: "Jaipur".to_string(),
            days: 2,
            flights: Some(FlightPair {
                outbound: flight(1500),
                return_flight: flight(1500),
            }),
            hotel: Some(Hotel::new(
                "Heritage Grand Palace".to_string(),
                4.5,
                1750,
                1,
                vec!["Free WiFi".to_string()],
                "2.5 km from city center".to_string(),
            )),
            daily_plans: vec![day1, day2],
            budget: Some(BudgetBreakdown::new(10000, 3000, 1750, 1400)),
        }
    }

    #[test]
    fn test_complete_in_budget_itinerary_is_perfect() {
        let verification = ItineraryValidator::verify(&complete_itinerary());

        assert!(verification.checks.all_passed);
        assert_eq!(verification.quality_score, 100.0);
        assert!(verification.issues.is_empty());
        assert!(verification.budget_status.is_valid);
        assert_eq!(verification.budget_status.over_budget, 0);
    }

    #[test]
    fn test_missing_hotel_is_reported() {
        let mut itinerary = complete_itinerary();
        itinerary.hotel = None;

        let verification = ItineraryValidator::verify(&itinerary);
        assert!(!verification.checks.has_hotel);
        assert!(!verification.checks.all_passed);
        assert!(verification.quality_score < 100.0);
        assert!(verification
            .issues
            .iter()
            .any(|issue| issue.to_lowercase().contains("hotel")));
    }

    #[test]
    fn test_over_budget_itinerary_scores_eighty() {
        let mut itinerary = complete_itinerary();
        itinerary.budget = Some(BudgetBreakdown::new(10000, 4000, 4000, 2500));

        let verification = ItineraryValidator::verify(&itinerary);
        assert!(!verification.checks.within_budget);
        assert_eq!(verification.quality_score, 80.0);
        assert_eq!(verification.budget_status.over_budget, 500);
        assert_eq!(verification.budget_status.remaining, -500);
        assert!(verification.issues.contains(&"Budget exceeded".to_string()));
    }

    #[test]
    fn test_empty_days_fail_activity_check() {
        let mut itinerary = complete_itinerary();
        for day in &mut itinerary.daily_plans {
            day.activities.clear();
            day.recompute_total();
        }

        let verification = ItineraryValidator::verify(&itinerary);
        assert!(!verification.checks.has_activities);
        assert!(verification
            .issues
            .contains(&"No activities planned".to_string()));
    }

    #[test]
    fn test_verify_is_idempotent() {
        let itinerary = complete_itinerary();
        assert_eq!(
            ItineraryValidator::verify(&itinerary),
            ItineraryValidator::verify(&itinerary)
        );
    }

    #[test]
    fn test_issue_order_is_fixed() {
        let mut itinerary = complete_itinerary();
        itinerary.flights = None;
        itinerary.hotel = None;
        itinerary.budget = Some(BudgetBreakdown::new(100, 400, 0, 0));

        let verification = ItineraryValidator::verify(&itinerary);
        assert_eq!(
            verification.issues,
            vec![
                "Missing flight information",
                "Missing hotel information",
                "Budget exceeded",
            ]
        );
    }

    #[test]
    fn test_suggestions_map_issues_to_remediations() {
        let mut itinerary = complete_itinerary();
        itinerary.hotel = None;
        itinerary.budget = Some(BudgetBreakdown::new(100, 400, 0, 0));

        let verification = ItineraryValidator::verify(&itinerary);
        let suggestions = ItineraryValidator::suggest_improvements(&itinerary, &verification);

        assert!(suggestions.contains(&"Add accommodation details".to_string()));
        assert!(suggestions.contains(&"Reduce activity costs or adjust budget".to_string()));
    }

    #[test]
    fn test_thin_days_are_flagged() {
        let mut itinerary = complete_itinerary();
        itinerary.daily_plans[1].activities.truncate(1);
        itinerary.daily_plans[1].recompute_total();

        let verification = ItineraryValidator::verify(&itinerary);
        let suggestions = ItineraryValidator::suggest_improvements(&itinerary, &verification);
        assert!(suggestions.contains(&"Some days have too few activities".to_string()));
    }

    #[test]
    fn test_perfect_itinerary_yields_no_suggestions() {
        let itinerary = complete_itinerary();
        let verification = ItineraryValidator::verify(&itinerary);
        assert!(ItineraryValidator::suggest_improvements(&itinerary, &verification).is_empty());
    }
}
