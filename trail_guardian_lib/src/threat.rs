use std::fmt;

/// Display tier of a threat score, used for marker colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatTier {
    Low,
    Elevated,
    Severe,
}

impl ThreatTier {
    pub const SEVERE_THRESHOLD: f64 = 70.;
    pub const ELEVATED_THRESHOLD: f64 = 40.;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::SEVERE_THRESHOLD {
            ThreatTier::Severe
        } else if score >= Self::ELEVATED_THRESHOLD {
            ThreatTier::Elevated
        } else {
            ThreatTier::Low
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ThreatTier::Low => "green",
            ThreatTier::Elevated => "orange",
            ThreatTier::Severe => "red",
        }
    }
}

/// Coarser advisory level, with the recommendation shown to hikers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatLevel {
    Low,
    Moderate,
    High,
    Extreme,
}

impl ThreatLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 81. {
            ThreatLevel::Extreme
        } else if score >= 61. {
            ThreatLevel::High
        } else if score >= 31. {
            ThreatLevel::Moderate
        } else {
            ThreatLevel::Low
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            ThreatLevel::Extreme => "TRAIL CLOSURE RECOMMENDED - Extreme fire danger",
            ThreatLevel::High => "HIGH RISK - Avoid this trail",
            ThreatLevel::Moderate => "MODERATE RISK - Exercise caution",
            ThreatLevel::Low => "LOW RISK - Trail appears safe",
        }
    }
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ThreatLevel::Low => "LOW",
            ThreatLevel::Moderate => "MODERATE",
            ThreatLevel::High => "HIGH",
            ThreatLevel::Extreme => "EXTREME",
        };
        f.write_str(label)
    }
}
