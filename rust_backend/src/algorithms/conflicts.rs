use std::ops::Range;

use serde::Serialize;

use crate::models::{Period, Section, SectionNumber, Weekday, WEEKDAY_COUNT};

/// Two half-open minute intervals overlap.
///
/// Touching endpoints do not overlap: a class ending at 10:00 and another
/// starting at 10:00 can both be taken.
pub fn intervals_overlap(a: &Range<u16>, b: &Range<u16>) -> bool {
    a.start < b.end && a.end > b.start
}

/// Two periods meet on the same day at overlapping times.
pub fn periods_conflict(a: &Period, b: &Period) -> bool {
    a.day() == b.day() && intervals_overlap(&a.minutes(), &b.minutes())
}

/// Incremental conflict detection over one candidate combination.
///
/// Accepted intervals are kept in one bucket per weekday. Each new period is
/// compared against its day's bucket and appended on success, so checking a
/// combination is quadratic in its period count. Combinations are a handful of
/// courses with a few periods each.
#[derive(Debug, Clone, Default)]
pub struct ConflictChecker {
    buckets: [Vec<Range<u16>>; WEEKDAY_COUNT],
}

impl ConflictChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `period` overlaps anything accepted so far.
    pub fn conflicts_with(&self, period: &Period) -> bool {
        let interval = period.minutes();
        self.buckets[period.day().index()]
            .iter()
            .any(|accepted| intervals_overlap(accepted, &interval))
    }

    /// Accept `period` if it does not conflict.
    ///
    /// Returns `false` and leaves the checker unchanged on conflict.
    pub fn try_insert(&mut self, period: &Period) -> bool {
        if self.conflicts_with(period) {
            return false;
        }
        self.buckets[period.day().index()].push(period.minutes());
        true
    }

    /// Accepted intervals for a day, in insertion order.
    pub fn accepted(&self, day: Weekday) -> &[Range<u16>] {
        &self.buckets[day.index()]
    }

    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Vec::clear);
    }
}

/// Whether any two periods in the sequence conflict.
pub fn has_conflict<'a, I>(periods: I) -> bool
where
    I: IntoIterator<Item = &'a Period>,
{
    let mut checker = ConflictChecker::new();
    periods.into_iter().any(|period| !checker.try_insert(period))
}

/// A pair of sections whose periods overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionConflict {
    pub first: SectionNumber,
    pub second: SectionNumber,
    pub day: Weekday,
    pub first_period: Range<u16>,
    pub second_period: Range<u16>,
}

/// List every overlapping period pair across `sections`.
///
/// Used to explain why a fully explicit selection produced no combinations.
/// Pairs inside a single section are reported too.
pub fn find_conflicts(sections: &[&Section]) -> Vec<SectionConflict> {
    let flattened: Vec<(&Section, &Period)> = sections
        .iter()
        .flat_map(|&section| section.periods.iter().map(move |p| (section, p)))
        .collect();

    let mut conflicts = Vec::new();
    for (i, (first, a)) in flattened.iter().enumerate() {
        for (second, b) in &flattened[i + 1..] {
            if periods_conflict(a, b) {
                conflicts.push(SectionConflict {
                    first: first.number,
                    second: second.number,
                    day: a.day(),
                    first_period: a.minutes(),
                    second_period: b.minutes(),
                });
            }
        }
    }
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeOfDay;
    use proptest::prelude::*;

    fn period(day: Weekday, start: (u8, u8), end: (u8, u8)) -> Period {
        Period::new(
            day,
            "R-100",
            TimeOfDay::new(start.0, start.1).unwrap(),
            TimeOfDay::new(end.0, end.1).unwrap(),
        )
        .unwrap()
    }

    fn section(number: u32, periods: Vec<Period>) -> Section {
        Section {
            title: "Chemistry".to_string(),
            number: SectionNumber::new(number),
            teacher: "Curie".to_string(),
            periods,
        }
    }

    #[test]
    fn test_touching_endpoints_do_not_conflict() {
        let a = period(Weekday::Monday, (9, 0), (10, 0));
        let b = period(Weekday::Monday, (10, 0), (11, 0));
        assert!(!periods_conflict(&a, &b));
        assert!(!has_conflict([&a, &b]));
    }

    #[test]
    fn test_partial_overlap_conflicts() {
        let a = period(Weekday::Monday, (9, 0), (10, 30));
        let b = period(Weekday::Monday, (10, 0), (11, 0));
        assert!(periods_conflict(&a, &b));
        assert!(has_conflict([&a, &b]));
    }

    #[test]
    fn test_containment_conflicts() {
        let outer = period(Weekday::Wednesday, (8, 0), (12, 0));
        let inner = period(Weekday::Wednesday, (9, 0), (9, 30));
        assert!(periods_conflict(&outer, &inner));
        assert!(periods_conflict(&inner, &outer));
    }

    #[test]
    fn test_different_days_never_conflict() {
        let a = period(Weekday::Monday, (9, 0), (11, 0));
        let b = period(Weekday::Tuesday, (9, 0), (11, 0));
        assert!(!periods_conflict(&a, &b));
    }

    #[test]
    fn test_checker_rejects_without_recording() {
        let mut checker = ConflictChecker::new();
        assert!(checker.try_insert(&period(Weekday::Thursday, (13, 0), (14, 30))));
        assert!(!checker.try_insert(&period(Weekday::Thursday, (14, 0), (15, 0))));
        assert_eq!(checker.accepted(Weekday::Thursday), &[780..870]);

        assert!(checker.try_insert(&period(Weekday::Thursday, (14, 30), (15, 0))));
        assert_eq!(checker.accepted(Weekday::Thursday).len(), 2);
        assert!(checker.accepted(Weekday::Friday).is_empty());

        checker.clear();
        assert!(checker.accepted(Weekday::Thursday).is_empty());
    }

    #[test]
    fn test_find_conflicts_reports_pairs() {
        let a = section(1, vec![period(Weekday::Monday, (9, 0), (10, 30))]);
        let b = section(
            2,
            vec![
                period(Weekday::Monday, (10, 0), (11, 0)),
                period(Weekday::Friday, (9, 0), (10, 0)),
            ],
        );

        let conflicts = find_conflicts(&[&a, &b]);
        assert_eq!(
            conflicts,
            vec![SectionConflict {
                first: SectionNumber::new(1),
                second: SectionNumber::new(2),
                day: Weekday::Monday,
                first_period: 540..630,
                second_period: 600..660,
            }]
        );
    }

    #[test]
    fn test_find_conflicts_empty_when_compatible() {
        let a = section(1, vec![period(Weekday::Monday, (9, 0), (10, 0))]);
        let b = section(2, vec![period(Weekday::Monday, (10, 0), (11, 0))]);
        assert!(find_conflicts(&[&a, &b]).is_empty());
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            s1 in 0u16..1400, d1 in 1u16..40,
            s2 in 0u16..1400, d2 in 1u16..40,
        ) {
            let a = s1..s1 + d1;
            let b = s2..s2 + d2;
            prop_assert_eq!(intervals_overlap(&a, &b), intervals_overlap(&b, &a));
        }

        #[test]
        fn prop_adjacent_intervals_never_overlap(s in 0u16..1300, d1 in 1u16..60, d2 in 1u16..60) {
            let a = s..s + d1;
            let b = s + d1..s + d1 + d2;
            prop_assert!(!intervals_overlap(&a, &b));
        }
    }
}
