use async_trait::async_trait;
use neethub_core::Result;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// Collections the backend persists into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Questions,
    DailyQuestions,
    PracticeSessions,
    MockTests,
    SyllabusProgress,
    PregeneratedQuestions,
    StudyPlans,
    ChatMessages,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Questions => "questions",
            Collection::DailyQuestions => "daily_questions",
            Collection::PracticeSessions => "practice_sessions",
            Collection::MockTests => "mock_tests",
            Collection::SyllabusProgress => "syllabus_progress",
            Collection::PregeneratedQuestions => "pregenerated_questions",
            Collection::StudyPlans => "study_plans",
            Collection::ChatMessages => "chat_messages",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Gte,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: &'static str,
    pub op: CompareOp,
    pub value: Value,
}

/// Conjunction of top-level field comparisons.
///
/// Field names are static so they can only come from code, never from a
/// request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<Condition>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: &'static str, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition {
            field,
            op: CompareOp::Eq,
            value: value.into(),
        });
        self
    }

    pub fn gte(mut self, field: &'static str, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition {
            field,
            op: CompareOp::Gte,
            value: value.into(),
        });
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Evaluate against a stored document.
    pub fn matches(&self, doc: &Value) -> bool {
        self.conditions.iter().all(|c| {
            let Some(actual) = doc.get(c.field) else {
                return false;
            };
            match c.op {
                CompareOp::Eq => actual == &c.value,
                CompareOp::Gte => matches!(
                    compare_values(actual, &c.value),
                    Some(Ordering::Greater | Ordering::Equal)
                ),
            }
        })
    }
}

/// Ordering between two scalar JSON values of the same kind.
pub fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindOptions {
    pub sort: Option<(&'static str, SortOrder)>,
    pub limit: Option<usize>,
}

impl FindOptions {
    /// Insertion order, capped.
    pub fn limit(limit: usize) -> Self {
        Self {
            sort: None,
            limit: Some(limit),
        }
    }

    pub fn newest_first(field: &'static str, limit: usize) -> Self {
        Self {
            sort: Some((field, SortOrder::Descending)),
            limit: Some(limit),
        }
    }
}

/// Schema-less document persistence.
///
/// Documents are JSON objects carrying their own string `id`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert(&self, collection: Collection, doc: Value) -> Result<()>;

    /// Insert several documents, returning how many were written.
    async fn insert_many(&self, collection: Collection, docs: Vec<Value>) -> Result<usize> {
        let mut written = 0;
        for doc in docs {
            self.insert(collection, doc).await?;
            written += 1;
        }
        Ok(written)
    }

    async fn find_one(&self, collection: Collection, filter: &Filter) -> Result<Option<Value>>;

    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
        options: &FindOptions,
    ) -> Result<Vec<Value>>;

    /// Merge `set` into the first matching document. Returns whether a
    /// document matched.
    async fn update_one(&self, collection: Collection, filter: &Filter, set: Value) -> Result<bool>;

    async fn count(&self, collection: Collection, filter: &Filter) -> Result<usize>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<()>;

    fn backend_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filter_matches_equality_and_lower_bound() {
        let doc = json!({"subject": "Physics", "chapter": "Optics", "questionCount": 12});
        let f = Filter::new()
            .eq("subject", "Physics")
            .eq("chapter", "Optics")
            .gte("questionCount", 10);
        assert!(f.matches(&doc));
        assert!(!Filter::new().gte("questionCount", 13).matches(&doc));
        assert!(!Filter::new().eq("subject", "Biology").matches(&doc));
    }

    #[test]
    fn missing_field_never_matches() {
        assert!(!Filter::new().eq("email", "a@x.com").matches(&json!({"name": "A"})));
    }

    #[test]
    fn mismatched_kinds_do_not_compare() {
        assert_eq!(compare_values(&json!("10"), &json!(10)), None);
        assert!(!Filter::new().gte("n", 1).matches(&json!({"n": "5"})));
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(Filter::new().matches(&json!({})));
    }
}
