use crate::traits::{Collection, DocumentStore, Filter, FindOptions};
use neethub_core::{
    ChatMessage, DailyQuestion, MockTest, PracticeSession, PreGeneratedQuestions, Question,
    Result, StudyPlan, SyllabusProgress, User,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

pub const SESSION_LIST_LIMIT: usize = 100;
pub const TEST_LIST_LIMIT: usize = 100;
pub const PROGRESS_LIST_LIMIT: usize = 1000;
pub const CHAT_HISTORY_LIMIT: usize = 50;
pub const STUDY_PLAN_LIST_LIMIT: usize = 10;
/// Sessions and tests read per user when building analytics.
pub const ANALYTICS_FETCH_LIMIT: usize = 1000;

/// Typed access to the collections.
#[derive(Clone)]
pub struct NeetStore {
    backend: Arc<dyn DocumentStore>,
}

fn decode<T: DeserializeOwned>(doc: Value) -> Result<T> {
    Ok(serde_json::from_value(doc)?)
}

fn decode_all<T: DeserializeOwned>(docs: Vec<Value>) -> Result<Vec<T>> {
    docs.into_iter().map(decode).collect()
}

fn encode<T: Serialize>(record: &T) -> Result<Value> {
    Ok(serde_json::to_value(record)?)
}

impl NeetStore {
    pub fn new(backend: Arc<dyn DocumentStore>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &Arc<dyn DocumentStore> {
        &self.backend
    }

    pub async fn ping(&self) -> Result<()> {
        self.backend.ping().await
    }

    async fn insert<T: Serialize>(&self, collection: Collection, record: &T) -> Result<()> {
        self.backend.insert(collection, encode(record)?).await
    }

    async fn find_one<T: DeserializeOwned>(
        &self,
        collection: Collection,
        filter: Filter,
    ) -> Result<Option<T>> {
        self.backend
            .find_one(collection, &filter)
            .await?
            .map(decode)
            .transpose()
    }

    async fn find<T: DeserializeOwned>(
        &self,
        collection: Collection,
        filter: Filter,
        options: FindOptions,
    ) -> Result<Vec<T>> {
        decode_all(self.backend.find(collection, &filter, &options).await?)
    }

    // Users

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.find_one(Collection::Users, Filter::new().eq("email", email))
            .await
    }

    pub async fn get_user(&self, id: &str) -> Result<Option<User>> {
        self.find_one(Collection::Users, Filter::new().eq("id", id))
            .await
    }

    pub async fn insert_user(&self, user: &User) -> Result<()> {
        self.insert(Collection::Users, user).await
    }

    // Questions

    pub async fn insert_questions(&self, questions: &[Question]) -> Result<usize> {
        let docs = questions.iter().map(encode).collect::<Result<Vec<_>>>()?;
        self.backend.insert_many(Collection::Questions, docs).await
    }

    pub async fn count_questions(&self) -> Result<usize> {
        self.backend
            .count(Collection::Questions, &Filter::new())
            .await
    }

    pub async fn find_daily_question(&self, date: &str) -> Result<Option<DailyQuestion>> {
        self.find_one(Collection::DailyQuestions, Filter::new().eq("date", date))
            .await
    }

    pub async fn insert_daily_question(&self, daily: &DailyQuestion) -> Result<()> {
        self.insert(Collection::DailyQuestions, daily).await
    }

    /// First stored set for the subject and chapter holding at least
    /// `min_count` questions.
    pub async fn find_pregenerated(
        &self,
        subject: &str,
        chapter: &str,
        min_count: usize,
    ) -> Result<Option<PreGeneratedQuestions>> {
        self.find_one(
            Collection::PregeneratedQuestions,
            Filter::new()
                .eq("subject", subject)
                .eq("chapter", chapter)
                .gte("questionCount", min_count as u64),
        )
        .await
    }

    pub async fn insert_pregenerated(&self, set: &PreGeneratedQuestions) -> Result<()> {
        self.insert(Collection::PregeneratedQuestions, set).await
    }

    // Practice and tests

    pub async fn insert_session(&self, session: &PracticeSession) -> Result<()> {
        self.insert(Collection::PracticeSessions, session).await
    }

    pub async fn list_sessions(&self, user_id: &str, limit: usize) -> Result<Vec<PracticeSession>> {
        self.find(
            Collection::PracticeSessions,
            Filter::new().eq("userId", user_id),
            FindOptions::limit(limit),
        )
        .await
    }

    pub async fn insert_test(&self, test: &MockTest) -> Result<()> {
        self.insert(Collection::MockTests, test).await
    }

    pub async fn list_tests(&self, user_id: &str, limit: usize) -> Result<Vec<MockTest>> {
        self.find(
            Collection::MockTests,
            Filter::new().eq("userId", user_id),
            FindOptions::limit(limit),
        )
        .await
    }

    // Syllabus

    pub async fn find_progress(
        &self,
        user_id: &str,
        class_type: &str,
        subject_id: &str,
        chapter_id: &str,
        topic_id: &str,
    ) -> Result<Option<SyllabusProgress>> {
        self.find_one(
            Collection::SyllabusProgress,
            Filter::new()
                .eq("userId", user_id)
                .eq("classType", class_type)
                .eq("subjectId", subject_id)
                .eq("chapterId", chapter_id)
                .eq("topicId", topic_id),
        )
        .await
    }

    pub async fn insert_progress(&self, progress: &SyllabusProgress) -> Result<()> {
        self.insert(Collection::SyllabusProgress, progress).await
    }

    /// Write the status and timestamp of an existing record.
    pub async fn update_progress(&self, progress: &SyllabusProgress) -> Result<bool> {
        let set = json!({
            "status": encode(&progress.status)?,
            "updatedAt": neethub_core::timestamp::format(&progress.updated_at),
        });
        self.backend
            .update_one(
                Collection::SyllabusProgress,
                &Filter::new().eq("id", progress.id.as_str()),
                set,
            )
            .await
    }

    pub async fn list_progress(&self, user_id: &str) -> Result<Vec<SyllabusProgress>> {
        self.find(
            Collection::SyllabusProgress,
            Filter::new().eq("userId", user_id),
            FindOptions::limit(PROGRESS_LIST_LIMIT),
        )
        .await
    }

    // Buddy

    pub async fn insert_chat(&self, message: &ChatMessage) -> Result<()> {
        self.insert(Collection::ChatMessages, message).await
    }

    pub async fn chat_history(&self, user_id: &str) -> Result<Vec<ChatMessage>> {
        self.find(
            Collection::ChatMessages,
            Filter::new().eq("userId", user_id),
            FindOptions::newest_first("createdAt", CHAT_HISTORY_LIMIT),
        )
        .await
    }

    // Study plans

    pub async fn insert_study_plan(&self, plan: &StudyPlan) -> Result<()> {
        self.insert(Collection::StudyPlans, plan).await
    }

    pub async fn list_study_plans(&self, user_id: &str) -> Result<Vec<StudyPlan>> {
        self.find(
            Collection::StudyPlans,
            Filter::new().eq("userId", user_id),
            FindOptions::newest_first("createdAt", STUDY_PLAN_LIST_LIMIT),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_storage::MemoryDocumentStore;
    use neethub_core::{new_id, now, PrepLevel, ProgressStatus, QuestionDraft};

    fn store() -> NeetStore {
        NeetStore::new(Arc::new(MemoryDocumentStore::new()))
    }

    fn question(subject: &str) -> Question {
        QuestionDraft {
            question: "Which organelle is the powerhouse of the cell?".into(),
            options: vec![
                "Mitochondria".into(),
                "Ribosome".into(),
                "Nucleus".into(),
                "Golgi body".into(),
            ],
            correct_answer: 0,
            explanation: "ATP synthesis".into(),
            subject: subject.into(),
            chapter: "Cell".into(),
            topic: "Organelles".into(),
            difficulty: "easy".into(),
        }
        .into_question()
    }

    #[tokio::test]
    async fn users_are_found_by_email_and_id() {
        let store = store();
        let user = User {
            id: new_id(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
            prep_level: PrepLevel::Dropper,
            weak_areas: vec![],
            created_at: now(),
        };
        store.insert_user(&user).await.unwrap();

        assert_eq!(
            store.find_user_by_email("asha@example.com").await.unwrap(),
            Some(user.clone())
        );
        assert_eq!(store.get_user(&user.id).await.unwrap(), Some(user));
        assert!(store.get_user("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn pregenerated_lookup_requires_enough_questions() {
        let store = store();
        let questions: Vec<Question> = (0..5).map(|_| question("Biology")).collect();
        store
            .insert_pregenerated(&PreGeneratedQuestions {
                id: new_id(),
                subject: "Biology".into(),
                chapter: "Cell".into(),
                question_count: questions.len(),
                questions,
                created_at: now(),
            })
            .await
            .unwrap();

        assert!(store
            .find_pregenerated("Biology", "Cell", 5)
            .await
            .unwrap()
            .is_some());
        assert!(store
            .find_pregenerated("Biology", "Cell", 6)
            .await
            .unwrap()
            .is_none());
        assert!(store
            .find_pregenerated("Physics", "Cell", 1)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn progress_update_changes_status_only() {
        let store = store();
        let mut progress = SyllabusProgress {
            id: new_id(),
            user_id: "u1".into(),
            class_type: "class11".into(),
            subject_id: "physics".into(),
            chapter_id: "kinematics".into(),
            topic_id: "projectile".into(),
            status: ProgressStatus::InProgress,
            updated_at: now(),
        };
        store.insert_progress(&progress).await.unwrap();

        progress.status = ProgressStatus::Completed;
        assert!(store.update_progress(&progress).await.unwrap());

        let stored = store
            .find_progress("u1", "class11", "physics", "kinematics", "projectile")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, ProgressStatus::Completed);
        assert_eq!(stored.id, progress.id);
        assert_eq!(store.list_progress("u1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn chat_history_is_newest_first_and_capped() {
        let store = store();
        for i in 0..(CHAT_HISTORY_LIMIT + 5) {
            let mut message = ChatMessage {
                id: new_id(),
                user_id: "u1".into(),
                message: format!("q{}", i),
                response: "a".into(),
                created_at: now(),
            };
            message.created_at += chrono::Duration::seconds(i as i64);
            store.insert_chat(&message).await.unwrap();
        }
        let history = store.chat_history("u1").await.unwrap();
        assert_eq!(history.len(), CHAT_HISTORY_LIMIT);
        assert_eq!(history[0].message, format!("q{}", CHAT_HISTORY_LIMIT + 4));
    }

    #[tokio::test]
    async fn questions_are_counted_after_bulk_insert() {
        let store = store();
        let batch = vec![question("Physics"), question("Chemistry")];
        assert_eq!(store.insert_questions(&batch).await.unwrap(), 2);
        assert_eq!(store.count_questions().await.unwrap(), 2);
    }
}
