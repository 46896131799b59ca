use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::timeutil;

/// Qualitative study-readiness tag for a topic.
///
/// The three values are labels, not a numeric scale. The set is fixed;
/// persisted blobs use the lowercase names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PreparationLevel {
    Red,
    Yellow,
    Green,
}

impl PreparationLevel {
    pub const ALL: [PreparationLevel; 3] = [
        PreparationLevel::Red,
        PreparationLevel::Yellow,
        PreparationLevel::Green,
    ];

    /// Fixed display color (iOS system palette).
    pub fn color(&self) -> &'static str {
        match self {
            PreparationLevel::Red => "#ff3b30",
            PreparationLevel::Yellow => "#ffcc00",
            PreparationLevel::Green => "#34c759",
        }
    }

    /// Human-readable description of the readiness the tag stands for.
    pub fn label(&self) -> &'static str {
        match self {
            PreparationLevel::Red => "not studied",
            PreparationLevel::Yellow => "in progress",
            PreparationLevel::Green => "well prepared",
        }
    }
}

/// One study unit within an exam.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: Uuid,
    pub name: String,
    pub preparation_level: PreparationLevel,
    /// Estimated study time in minutes. Older blobs without this field
    /// load with the 60-minute default.
    #[serde(default = "default_estimated_minutes")]
    pub estimated_minutes: u32,
    #[serde(default)]
    pub notes: String,
}

fn default_estimated_minutes() -> u32 {
    60
}

impl Topic {
    /// New topic with a fresh id and the standard defaults: level red,
    /// 60-minute estimate, empty notes. Callers reject blank names before
    /// constructing.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_estimate(name, default_estimated_minutes())
    }

    pub fn with_estimate(name: impl Into<String>, estimated_minutes: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            preparation_level: PreparationLevel::Red,
            estimated_minutes,
            notes: String::new(),
        }
    }
}

/// One scheduled examination with its study topics.
///
/// `date` and `time` are edited independently; the combined instant is
/// always derived through [`Exam::full_date_time`], never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exam {
    pub id: Uuid,
    pub subject: String,
    /// Calendar date of the exam; only year/month/day are meaningful.
    pub date: DateTime<Utc>,
    /// Time-of-day of the exam; only hour/minute are meaningful.
    pub time: DateTime<Utc>,
    /// Insertion order is display order.
    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl Exam {
    pub fn new(subject: impl Into<String>, date: DateTime<Utc>, time: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject: subject.into(),
            date,
            time,
            topics: Vec::new(),
        }
    }

    /// The exam's scheduled instant: `date`'s calendar day combined with
    /// `time`'s hour and minute. Falls back to `date` unmodified if the
    /// composition is not a valid instant.
    pub fn full_date_time(&self) -> DateTime<Utc> {
        timeutil::combine(self.date, self.time).unwrap_or(self.date)
    }

    pub fn topic(&self, topic_id: Uuid) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == topic_id)
    }
}
