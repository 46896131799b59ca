//! In-memory owner of the live user profile.
//!
//! `ProfileManager` is the single writer: every mutation goes through it,
//! and every successful mutation rewrites the persisted blob before
//! returning. It is constructed once at process start and handed to
//! whichever layer needs it; there is no ambient global instance.

use thiserror::Error;
use uuid::Uuid;

use crate::config::{self, AppConfig};
use crate::models::{Exam, Topic, UserProfile};
use crate::storage::ProfileStorage;

/// Failures surfaced by store mutations. Lookup misses and boundary
/// validation leave both the in-memory and persisted state untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no exam with id {0}")]
    ExamNotFound(Uuid),
    #[error("no topic with id {topic_id} in exam {exam_id}")]
    TopicNotFound { exam_id: Uuid, topic_id: Uuid },
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

/// Manages the profile, configuration, and storage.
pub struct ProfileManager {
    config: AppConfig,
    storage: ProfileStorage,
    profile: UserProfile,
}

impl ProfileManager {
    /// Loads config and the persisted profile from the standard workspace.
    /// A missing or unreadable blob starts an empty profile; onboarding
    /// fills in the name afterwards.
    pub fn new() -> anyhow::Result<Self> {
        let storage = ProfileStorage::open()?;
        let config = config::load_or_default()?;
        Ok(Self::with_storage(storage, config))
    }

    /// Manager over an explicit gateway, for callers that resolve the
    /// workspace themselves.
    pub fn with_storage(storage: ProfileStorage, config: AppConfig) -> Self {
        let profile = storage.load();
        Self {
            config,
            storage,
            profile,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn exams(&self) -> &[Exam] {
        &self.profile.exams
    }

    pub fn exam(&self, exam_id: Uuid) -> Option<&Exam> {
        self.profile.exam(exam_id)
    }

    // Reads immediately after a mutation observe the new state; the blob
    // is rewritten synchronously before the mutation returns. A write
    // failure leaves the in-memory state authoritative and the persisted
    // copy stale, which is logged rather than surfaced.
    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.profile) {
            log::warn!("Profile save failed, persisted copy is stale: {:#}", err);
        }
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyField("name"));
        }
        self.profile.name = name.to_string();
        self.persist();
        Ok(())
    }

    pub fn set_email(&mut self, email: &str) -> Result<(), StoreError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(StoreError::EmptyField("email"));
        }
        self.profile.email = Some(email.to_string());
        self.persist();
        Ok(())
    }

    pub fn clear_email(&mut self) {
        self.profile.email = None;
        self.persist();
    }

    pub fn add_exam(&mut self, exam: Exam) -> Result<(), StoreError> {
        if exam.subject.trim().is_empty() {
            return Err(StoreError::EmptyField("subject"));
        }
        self.profile.exams.push(exam);
        self.persist();
        Ok(())
    }

    /// Applies `mutate` to the exam with the given id.
    pub fn update_exam(
        &mut self,
        exam_id: Uuid,
        mutate: impl FnOnce(&mut Exam),
    ) -> Result<(), StoreError> {
        let exam = self
            .profile
            .exam_mut(exam_id)
            .ok_or(StoreError::ExamNotFound(exam_id))?;
        mutate(exam);
        self.persist();
        Ok(())
    }

    /// Removes the exam and, transitively, all of its topics.
    pub fn remove_exam(&mut self, exam_id: Uuid) -> Result<Exam, StoreError> {
        let index = self
            .profile
            .exams
            .iter()
            .position(|e| e.id == exam_id)
            .ok_or(StoreError::ExamNotFound(exam_id))?;
        let removed = self.profile.exams.remove(index);
        self.persist();
        Ok(removed)
    }

    /// Topic with a fresh id and the configured default estimate.
    pub fn new_topic(&self, name: impl Into<String>) -> Topic {
        Topic::with_estimate(name, self.config.study.default_estimated_minutes)
    }

    pub fn add_topic(&mut self, exam_id: Uuid, topic: Topic) -> Result<(), StoreError> {
        if topic.name.trim().is_empty() {
            return Err(StoreError::EmptyField("topic name"));
        }
        let exam = self
            .profile
            .exam_mut(exam_id)
            .ok_or(StoreError::ExamNotFound(exam_id))?;
        exam.topics.push(topic);
        self.persist();
        Ok(())
    }

    /// Applies `mutate` to one topic, located by exam id then topic id.
    pub fn update_topic(
        &mut self,
        exam_id: Uuid,
        topic_id: Uuid,
        mutate: impl FnOnce(&mut Topic),
    ) -> Result<(), StoreError> {
        let exam = self
            .profile
            .exam_mut(exam_id)
            .ok_or(StoreError::ExamNotFound(exam_id))?;
        let topic = exam
            .topics
            .iter_mut()
            .find(|t| t.id == topic_id)
            .ok_or(StoreError::TopicNotFound { exam_id, topic_id })?;
        mutate(topic);
        self.persist();
        Ok(())
    }

    /// Removes one topic without touching its owning exam.
    pub fn remove_topic(&mut self, exam_id: Uuid, topic_id: Uuid) -> Result<Topic, StoreError> {
        let exam = self
            .profile
            .exam_mut(exam_id)
            .ok_or(StoreError::ExamNotFound(exam_id))?;
        let index = exam
            .topics
            .iter()
            .position(|t| t.id == topic_id)
            .ok_or(StoreError::TopicNotFound { exam_id, topic_id })?;
        let removed = exam.topics.remove(index);
        self.persist();
        Ok(removed)
    }
}
