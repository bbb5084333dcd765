//! Severity - Probability bucketing
//!
//! Maps the classifier's positive-class probability onto four ordered
//! buckets with display colors. Derived solely from the probability; the
//! hazard label never feeds into it.

use serde::{Deserialize, Serialize};

/// Ordered severity buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Extreme,
}

impl Severity {
    /// Bucket a probability. Half-open intervals, lower bound inclusive:
    /// [0, 0.30) LOW, [0.30, 0.60) MEDIUM, [0.60, 0.85) HIGH, [0.85, 1] EXTREME.
    ///
    /// Total over all of f32: below-range input buckets LOW, above-range
    /// (and NaN, which fails every comparison) falls through to EXTREME.
    pub fn bucket(probability: f32) -> Self {
        if probability < 0.30 {
            Severity::Low
        } else if probability < 0.60 {
            Severity::Medium
        } else if probability < 0.85 {
            Severity::High
        } else {
            Severity::Extreme
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Extreme => "EXTREME",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Severity::Low => "#22c55e",     // Green
            Severity::Medium => "#facc15",  // Yellow
            Severity::High => "#f97316",    // Orange
            Severity::Extreme => "#dc2626", // Red
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================
