use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Quality assessment of one piece of cognitive output. Each component
/// is in [0.0, 1.0].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CognitiveScore {
    pub clarity: f64,
    pub coherence: f64,
    pub usefulness: f64,
    pub confidence: f64,
    pub correctness: f64,

    #[serde(default)]
    pub notes: Option<String>,
}

impl CognitiveScore {
    pub fn new(
        clarity: f64,
        coherence: f64,
        usefulness: f64,
        confidence: f64,
        correctness: f64,
    ) -> Self {
        Self {
            clarity,
            coherence,
            usefulness,
            confidence,
            correctness,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Arithmetic mean of all five components.
    pub fn overall(&self) -> f64 {
        (self.clarity + self.coherence + self.usefulness + self.confidence + self.correctness)
            / 5.0
    }

    pub fn to_value(&self) -> Value {
        json!({
            "clarity": self.clarity,
            "coherence": self.coherence,
            "usefulness": self.usefulness,
            "confidence": self.confidence,
            "correctness": self.correctness,
            "overall": self.overall(),
            "notes": self.notes,
        })
    }
}

/// Per-dimension weights. Typed fields make unknown weight keys a
/// compile-time impossibility; a zero weight simply drops a dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    #[serde(default)]
    pub clarity: f64,
    #[serde(default)]
    pub coherence: f64,
    #[serde(default)]
    pub usefulness: f64,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub correctness: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.clarity + self.coherence + self.usefulness + self.confidence + self.correctness
    }
}

/// Named weighting of score dimensions for one cognitive context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringProfile {
    pub name: &'static str,
    pub weights: ScoringWeights,
}

impl ScoringProfile {
    /// Weighted mean of the components. A profile whose weights sum to
    /// zero scores 0.0 rather than dividing by zero.
    pub fn score(&self, score: &CognitiveScore) -> f64 {
        let total = self.weights.total();
        if total == 0.0 {
            return 0.0;
        }
        let weighted = self.weights.clarity * score.clarity
            + self.weights.coherence * score.coherence
            + self.weights.usefulness * score.usefulness
            + self.weights.confidence * score.confidence
            + self.weights.correctness * score.correctness;
        weighted / total
    }
}

/// Balanced weighting across all dimensions.
pub const DEFAULT_PROFILE: ScoringProfile = ScoringProfile {
    name: "default",
    weights: ScoringWeights {
        clarity: 1.0,
        coherence: 1.0,
        usefulness: 1.0,
        confidence: 1.0,
        correctness: 1.0,
    },
};

/// Plans live or die on coherence and usefulness.
pub const PLANNING_PROFILE: ScoringProfile = ScoringProfile {
    name: "planning",
    weights: ScoringWeights {
        clarity: 0.5,
        coherence: 2.0,
        usefulness: 2.0,
        confidence: 1.0,
        correctness: 1.5,
    },
};

/// Diagnosis weights correctness above everything else.
pub const DIAGNOSTIC_PROFILE: ScoringProfile = ScoringProfile {
    name: "diagnostic",
    weights: ScoringWeights {
        clarity: 1.0,
        coherence: 1.0,
        usefulness: 0.5,
        confidence: 1.5,
        correctness: 3.0,
    },
};

/// Generated content is judged mostly on clarity and usefulness.
pub const GENERATION_PROFILE: ScoringProfile = ScoringProfile {
    name: "generation",
    weights: ScoringWeights {
        clarity: 2.0,
        coherence: 1.0,
        usefulness: 2.0,
        confidence: 0.5,
        correctness: 1.0,
    },
};

/// Every canonical profile, keyed by name.
pub const SCORING_PROFILES: &[(&str, &ScoringProfile)] = &[
    ("default", &DEFAULT_PROFILE),
    ("planning", &PLANNING_PROFILE),
    ("diagnostic", &DIAGNOSTIC_PROFILE),
    ("generation", &GENERATION_PROFILE),
];

pub fn profile_by_name(name: &str) -> Option<&'static ScoringProfile> {
    SCORING_PROFILES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, profile)| *profile)
}
