use serde::{Deserialize, Serialize};

use super::{Dimension, Score};

/// Six weighted design priorities. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreVector {
    latency: Score,
    load: Score,
    cost: Score,
    performance: Score,
    security: Score,
    scale: Score,
}

impl ScoreVector {
    /// Build from raw values; each one is clamped to [0, 100].
    pub fn new(latency: i64, load: i64, cost: i64, performance: i64, security: i64, scale: i64) -> Self {
        Self {
            latency: Score::new(latency),
            load: Score::new(load),
            cost: Score::new(cost),
            performance: Score::new(performance),
            security: Score::new(security),
            scale: Score::new(scale),
        }
    }

    /// Every dimension set to the same value.
    pub fn uniform(value: i64) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    pub fn latency(&self) -> Score {
        self.latency
    }

    pub fn load(&self) -> Score {
        self.load
    }

    pub fn cost(&self) -> Score {
        self.cost
    }

    pub fn performance(&self) -> Score {
        self.performance
    }

    pub fn security(&self) -> Score {
        self.security
    }

    pub fn scale(&self) -> Score {
        self.scale
    }

    /// Look up a dimension.
    pub fn get(&self, dimension: Dimension) -> Score {
        match dimension {
            Dimension::Latency => self.latency,
            Dimension::Load => self.load,
            Dimension::Cost => self.cost,
            Dimension::Performance => self.performance,
            Dimension::Security => self.security,
            Dimension::Scale => self.scale,
        }
    }

    /// Copy with one dimension replaced (clamped).
    pub fn with(mut self, dimension: Dimension, value: i64) -> Self {
        let score = Score::new(value);
        match dimension {
            Dimension::Latency => self.latency = score,
            Dimension::Load => self.load = score,
            Dimension::Cost => self.cost = score,
            Dimension::Performance => self.performance = score,
            Dimension::Security => self.security = score,
            Dimension::Scale => self.scale = score,
        }
        self
    }

    /// Iterate `(dimension, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, Score)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }
}

impl Default for ScoreVector {
    /// The starting priorities presented to a new user.
    fn default() -> Self {
        Self::new(60, 70, 50, 75, 85, 80)
    }
}

impl From<[i64; 6]> for ScoreVector {
    /// Canonical order: latency, load, cost, performance, security, scale.
    fn from(values: [i64; 6]) -> Self {
        let [latency, load, cost, performance, security, scale] = values;
        Self::new(latency, load, cost, performance, security, scale)
    }
}
