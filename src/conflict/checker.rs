//! Rule composition.

use std::sync::Arc;

use super::{rules, Candidate, PlacementContext, PlacementRule};

/// An ordered set of placement rules.
///
/// A candidate is admitted when every rule admits it. Rules are evaluated
/// in insertion order and evaluation stops at the first rejection.
#[derive(Clone)]
pub struct ConflictChecker {
    rules: Vec<Arc<dyn PlacementRule>>,
}

impl ConflictChecker {
    /// Creates a checker with no rules (admits everything).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The exam hard constraints: capacity, room free, no student clash,
    /// daily load. Cheap checks come first.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(rules::RoomCapacity)
            .with_rule(rules::RoomFree)
            .with_rule(rules::NoStudentClash)
            .with_rule(rules::DailyLoad)
    }

    /// Appends a rule.
    pub fn with_rule<R: PlacementRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Whether every rule admits the candidate.
    pub fn admits(&self, candidate: &Candidate<'_>, context: &PlacementContext<'_>) -> bool {
        self.first_rejection(candidate, context).is_none()
    }

    /// Name of the first rule that rejects the candidate.
    pub fn first_rejection(
        &self,
        candidate: &Candidate<'_>,
        context: &PlacementContext<'_>,
    ) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|r| !r.admits(candidate, context))
            .map(|r| r.name())
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }
}

impl Default for ConflictChecker {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for ConflictChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConflictChecker")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classroom, Enrollment, ExamSlot, Session, SlotCatalog};
    use crate::policy::SchedulingPolicy;
    use chrono::NaiveDate;

    fn slot(ordinal: usize) -> ExamSlot {
        SlotCatalog::default().templates()[ordinal]
            .on(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap())
    }

    #[derive(Debug)]
    struct RejectAll;

    impl PlacementRule for RejectAll {
        fn name(&self) -> &'static str {
            "RejectAll"
        }

        fn admits(&self, _: &Candidate<'_>, _: &PlacementContext<'_>) -> bool {
            false
        }
    }

    #[test]
    fn test_first_rejection_follows_rule_order() {
        let mut enrollment = Enrollment::new();
        for s in ["S1", "S2"] {
            enrollment.insert(s, "A");
            enrollment.insert(s, "B");
        }
        let policy = SchedulingPolicy::default();
        let sessions = vec![Session::new("A", "R1", slot(0))];
        let ctx = PlacementContext {
            sessions: &sessions,
            enrollment: &enrollment,
            policy: &policy,
        };

        let tiny = Classroom::new("R1", 1);
        let roomy = Classroom::new("R2", 10);
        let s0 = slot(0);
        let s1 = slot(1);
        let s2 = slot(2);
        let checker = ConflictChecker::standard();

        let c = Candidate::new("B", &tiny, &s0);
        assert_eq!(checker.first_rejection(&c, &ctx), Some("RoomCapacity"));

        let c = Candidate::new("B", &roomy, &s0);
        assert_eq!(checker.first_rejection(&c, &ctx), Some("NoStudentClash"));

        let c = Candidate::new("B", &roomy, &s1);
        assert_eq!(checker.first_rejection(&c, &ctx), Some("DailyLoad"));

        let c = Candidate::new("B", &roomy, &s2);
        assert!(checker.admits(&c, &ctx));
    }

    #[test]
    fn test_empty_checker_admits_everything() {
        let enrollment = Enrollment::new();
        let policy = SchedulingPolicy::default();
        let ctx = PlacementContext {
            sessions: &[],
            enrollment: &enrollment,
            policy: &policy,
        };
        let room = Classroom::new("R", 0);
        let s = slot(0);
        let c = Candidate::new("X", &room, &s);
        assert!(ConflictChecker::new().admits(&c, &ctx));
        assert!(!ConflictChecker::new().with_rule(RejectAll).admits(&c, &ctx));
    }

    #[test]
    fn test_debug_lists_rules() {
        let dbg = format!("{:?}", ConflictChecker::standard());
        assert!(dbg.contains("RoomCapacity"));
        assert!(dbg.contains("DailyLoad"));
    }
}
