use crate::types::{MockTest, PracticeSession};
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

pub const RECENT_SESSIONS: usize = 10;
pub const RECENT_TESTS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct SubjectStats {
    pub attempted: u64,
    pub correct: u64,
    pub accuracy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_questions: u64,
    pub total_correct: u64,
    pub overall_accuracy: f64,
    pub subject_stats: BTreeMap<String, SubjectStats>,
    pub tests_attempted: usize,
    pub avg_test_score: f64,
    /// Seconds across practice sessions and tests.
    pub total_study_time: u64,
    pub study_time_hours: f64,
    pub recent_sessions: Vec<PracticeSession>,
    pub recent_tests: Vec<MockTest>,
}

/// Percentage of `part` in `whole`; zero when nothing was attempted.
fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn tail<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items[items.len().saturating_sub(n)..].to_vec()
}

/// Summarize one user's practice sessions and mock tests.
///
/// Both slices are expected in insertion order; the "recent" lists are taken
/// from their tails.
pub fn summarize(sessions: &[PracticeSession], tests: &[MockTest]) -> AnalyticsSummary {
    let mut total_questions = 0u64;
    let mut total_correct = 0u64;
    let mut subject_stats: BTreeMap<String, SubjectStats> = BTreeMap::new();

    for session in sessions {
        let attempted = u64::from(session.questions_attempted);
        let correct = u64::from(session.questions_correct);
        total_questions += attempted;
        total_correct += correct;

        let subject = if session.subject.trim().is_empty() {
            "Unknown"
        } else {
            session.subject.as_str()
        };
        let entry = subject_stats.entry(subject.to_string()).or_default();
        entry.attempted += attempted;
        entry.correct += correct;
    }

    for stats in subject_stats.values_mut() {
        stats.accuracy = round1(percentage(stats.correct, stats.attempted));
    }

    let avg_test_score = if tests.is_empty() {
        0.0
    } else {
        tests.iter().map(|t| t.score).sum::<f64>() / tests.len() as f64
    };

    let total_study_time = sessions.iter().map(|s| s.time_spent).sum::<u64>()
        + tests.iter().map(|t| t.time_spent).sum::<u64>();

    AnalyticsSummary {
        total_questions,
        total_correct,
        overall_accuracy: round1(percentage(total_correct, total_questions)),
        subject_stats,
        tests_attempted: tests.len(),
        avg_test_score: round1(avg_test_score),
        total_study_time,
        study_time_hours: round1(total_study_time as f64 / 3600.0),
        recent_sessions: tail(sessions, RECENT_SESSIONS),
        recent_tests: tail(tests, RECENT_TESTS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{new_id, now, TestType};

    fn session(subject: &str, attempted: u32, correct: u32, time_spent: u64) -> PracticeSession {
        PracticeSession {
            id: new_id(),
            user_id: "u1".into(),
            subject: subject.into(),
            chapter: "Any".into(),
            questions_attempted: attempted,
            questions_correct: correct,
            time_spent,
            created_at: now(),
        }
    }

    fn test(score: f64, time_spent: u64) -> MockTest {
        MockTest {
            id: new_id(),
            user_id: "u1".into(),
            test_type: TestType::Full,
            subject: None,
            chapter: None,
            total_questions: 180,
            correct_answers: 120,
            score,
            time_spent,
            accuracy: 66.7,
            weak_chapters: vec![],
            created_at: now(),
        }
    }

    #[test]
    fn empty_history_has_zero_accuracy() {
        let summary = summarize(&[], &[]);
        assert_eq!(summary.overall_accuracy, 0.0);
        assert_eq!(summary.avg_test_score, 0.0);
        assert_eq!(summary.tests_attempted, 0);
        assert!(summary.subject_stats.is_empty());
    }

    #[test]
    fn seven_of_ten_is_seventy_percent() {
        let summary = summarize(&[session("Physics", 10, 7, 600)], &[]);
        assert_eq!(summary.total_questions, 10);
        assert_eq!(summary.total_correct, 7);
        assert_eq!(summary.overall_accuracy, 70.0);
        assert_eq!(summary.subject_stats["Physics"].accuracy, 70.0);
    }

    #[test]
    fn subject_with_no_attempts_reports_zero() {
        let summary = summarize(&[session("Biology", 0, 0, 0)], &[]);
        assert_eq!(summary.subject_stats["Biology"].accuracy, 0.0);
    }

    #[test]
    fn per_subject_totals_and_rounding() {
        let sessions = vec![
            session("Physics", 3, 1, 100),
            session("Chemistry", 4, 4, 100),
            session("Physics", 3, 1, 100),
        ];
        let summary = summarize(&sessions, &[]);
        let physics = &summary.subject_stats["Physics"];
        assert_eq!((physics.attempted, physics.correct), (6, 2));
        assert_eq!(physics.accuracy, 33.3);
        assert_eq!(summary.subject_stats["Chemistry"].accuracy, 100.0);
        assert_eq!(summary.overall_accuracy, 60.0);
    }

    #[test]
    fn study_time_and_test_average() {
        let summary = summarize(&[session("Physics", 1, 1, 1800)], &[test(500.0, 5400), test(601.0, 0)]);
        assert_eq!(summary.total_study_time, 7200);
        assert_eq!(summary.study_time_hours, 2.0);
        assert_eq!(summary.avg_test_score, 550.5);
        assert_eq!(summary.tests_attempted, 2);
    }

    #[test]
    fn recent_lists_keep_the_latest_entries() {
        let sessions: Vec<_> = (0..12).map(|i| session("Physics", i, 0, 0)).collect();
        let tests: Vec<_> = (0..7).map(|i| test(i as f64, 0)).collect();
        let summary = summarize(&sessions, &tests);
        assert_eq!(summary.recent_sessions.len(), RECENT_SESSIONS);
        assert_eq!(summary.recent_sessions[0].questions_attempted, 2);
        assert_eq!(summary.recent_tests.len(), RECENT_TESTS);
        assert_eq!(summary.recent_tests[4].score, 6.0);
    }
}
