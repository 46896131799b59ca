//! Derived study statistics computed over exam snapshots.
//!
//! Everything here is pure and stateless: counts, minute totals, weighted
//! progress fractions and the one duration-formatting rule shared by every
//! rendering call site. Nothing in this module is ever persisted.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::models::{Exam, PreparationLevel};

/// Minute-weighted share of each preparation level within one exam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreparationProgress {
    pub green: f64,
    pub yellow: f64,
    pub red: f64,
}

impl PreparationProgress {
    pub const ZERO: PreparationProgress = PreparationProgress {
        green: 0.0,
        yellow: 0.0,
        red: 0.0,
    };
}

/// Topic count per preparation level across every exam.
///
/// All three levels are always present in the result; levels without any
/// topic report zero.
pub fn level_counts(exams: &[Exam]) -> BTreeMap<PreparationLevel, usize> {
    let mut counts: BTreeMap<PreparationLevel, usize> =
        PreparationLevel::ALL.iter().map(|l| (*l, 0)).collect();
    for exam in exams {
        for topic in &exam.topics {
            *counts.entry(topic.preparation_level).or_insert(0) += 1;
        }
    }
    counts
}

/// Sum of estimated study minutes over every topic in every exam.
pub fn total_estimated_minutes(exams: &[Exam]) -> u64 {
    exams
        .iter()
        .flat_map(|e| &e.topics)
        .map(|t| u64::from(t.estimated_minutes))
        .sum()
}

/// Each level's share of the exam's total estimated minutes.
///
/// An exam whose topics total zero minutes (or has no topics) yields all
/// zeros rather than dividing by zero. Otherwise the three fractions sum
/// to 1.0 up to floating-point error.
pub fn preparation_progress(exam: &Exam) -> PreparationProgress {
    let total: u64 = exam
        .topics
        .iter()
        .map(|t| u64::from(t.estimated_minutes))
        .sum();
    if total == 0 {
        return PreparationProgress::ZERO;
    }
    let minutes_at = |level: PreparationLevel| -> u64 {
        exam.topics
            .iter()
            .filter(|t| t.preparation_level == level)
            .map(|t| u64::from(t.estimated_minutes))
            .sum()
    };
    let share = |level| minutes_at(level) as f64 / total as f64;
    PreparationProgress {
        green: share(PreparationLevel::Green),
        yellow: share(PreparationLevel::Yellow),
        red: share(PreparationLevel::Red),
    }
}

/// Renders a minute count for display: minutes only under an hour, hours
/// only on exact multiples, hours and minutes otherwise.
///
/// Single source of truth for duration rendering (topic estimates, exam
/// totals and the statistics screen all go through here).
pub fn format_duration(minutes: u64) -> String {
    if minutes < 60 {
        format!("{} Min.", minutes)
    } else if minutes % 60 == 0 {
        format!("{} Std.", minutes / 60)
    } else {
        format!("{} Std. {} Min.", minutes / 60, minutes % 60)
    }
}

/// Distinct calendar days having at least one exam, for marking on a
/// calendar widget.
pub fn exam_dates(exams: &[Exam]) -> BTreeSet<NaiveDate> {
    exams
        .iter()
        .map(|e| e.full_date_time().date_naive())
        .collect()
}
