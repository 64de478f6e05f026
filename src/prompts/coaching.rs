//! Coach persona and answer verbosity
//!
//! Each variant maps to one fixed instruction sentence injected into the
//! analysis prompt. Unrecognised names never fail: they resolve to an explicit
//! fallback variant.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Instruction used by personas without a dedicated sentence
pub const FALLBACK_PERSONA_INSTRUCTION: &str = "Be supportive and practical.";

/// Coaching style of the analysis
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Persona {
    #[default]
    Motivational,
    Technical,
    Hypertrophy,
    Endurance,
    Strength,
    /// No persona selected
    General,
    /// A persona name with no dedicated instruction
    Custom(String),
}

impl Persona {
    /// Every persona with a dedicated instruction, in menu order
    pub const BUILT_IN: [Persona; 5] = [
        Persona::Motivational,
        Persona::Technical,
        Persona::Hypertrophy,
        Persona::Endurance,
        Persona::Strength,
    ];

    /// Resolve a persona by name, case-insensitively
    ///
    /// Blank names give [`Persona::General`]; unknown names give
    /// [`Persona::Custom`].
    ///
    /// # Examples
    ///
    /// ```
    /// use hevy_coach::prompts::Persona;
    ///
    /// assert_eq!(Persona::from_name("strength"), Persona::Strength);
    /// assert_eq!(Persona::from_name(""), Persona::General);
    /// assert_eq!(Persona::from_name("Yoga"), Persona::Custom("Yoga".to_string()));
    /// ```
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Self::General,
            "motivational" => Self::Motivational,
            "technical" => Self::Technical,
            "hypertrophy" => Self::Hypertrophy,
            "endurance" => Self::Endurance,
            "strength" => Self::Strength,
            "general" => Self::General,
            _ => Self::Custom(trimmed.to_string()),
        }
    }

    /// Display name of the persona
    pub fn name(&self) -> &str {
        match self {
            Self::Motivational => "Motivational",
            Self::Technical => "Technical",
            Self::Hypertrophy => "Hypertrophy",
            Self::Endurance => "Endurance",
            Self::Strength => "Strength",
            Self::General => "General",
            Self::Custom(name) => name,
        }
    }

    /// Instruction sentence for this persona
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Motivational => {
                "Be highly encouraging and focus on mindset, effort, and consistency."
            }
            Self::Technical => {
                "Give detailed, technical feedback on form, technique, and training principles."
            }
            Self::Hypertrophy => "Focus on muscle growth, volume, and hypertrophy-specific advice.",
            Self::Endurance => {
                "Emphasize stamina, cardiovascular improvements, and endurance training tips."
            }
            Self::Strength => {
                "Highlight strength gains, progressive overload, and powerlifting principles."
            }
            Self::General | Self::Custom(_) => FALLBACK_PERSONA_INSTRUCTION,
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Persona {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for Persona {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Persona> for String {
    fn from(persona: Persona) -> Self {
        persona.name().to_string()
    }
}

/// Level of detail requested from the coach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Verbosity {
    Short,
    #[default]
    Normal,
    Detailed,
    VeryDetailed,
}

impl Verbosity {
    /// Every verbosity level, shortest first
    pub const ALL: [Verbosity; 4] = [
        Verbosity::Short,
        Verbosity::Normal,
        Verbosity::Detailed,
        Verbosity::VeryDetailed,
    ];

    /// Resolve a verbosity by name, falling back to [`Verbosity::Normal`]
    ///
    /// Matching ignores case and treats spaces, `-` and `_` alike, so
    /// `"Very Detailed"`, `"very-detailed"` and `"very_detailed"` all resolve
    /// to [`Verbosity::VeryDetailed`].
    pub fn from_name(name: &str) -> Self {
        let key: String = name
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();
        match key.as_str() {
            "short" => Self::Short,
            "normal" => Self::Normal,
            "detailed" => Self::Detailed,
            "verydetailed" => Self::VeryDetailed,
            _ => {
                if !key.is_empty() {
                    tracing::warn!("Unknown verbosity '{}', using Normal", name);
                }
                Self::Normal
            }
        }
    }

    /// Display name of the level
    pub fn name(&self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Normal => "Normal",
            Self::Detailed => "Detailed",
            Self::VeryDetailed => "Very Detailed",
        }
    }

    /// Instruction sentence for this level
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Short => "Keep the feedback very brief (2-3 sentences).",
            Self::Normal => "Keep the feedback concise and practical.",
            Self::Detailed => {
                "Provide a thorough, multi-paragraph analysis with specific examples."
            }
            Self::VeryDetailed => {
                "Give an in-depth, highly detailed analysis, including technical breakdowns and actionable steps."
            }
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Verbosity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for Verbosity {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Verbosity> for String {
    fn from(verbosity: Verbosity) -> Self {
        verbosity.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_from_name_is_case_insensitive() {
        assert_eq!(Persona::from_name("HYPERTROPHY"), Persona::Hypertrophy);
        assert_eq!(Persona::from_name(" technical "), Persona::Technical);
    }

    #[test]
    fn test_unknown_persona_falls_back() {
        let persona = Persona::from_name("Mobility");
        assert_eq!(persona, Persona::Custom("Mobility".to_string()));
        assert_eq!(persona.instruction(), FALLBACK_PERSONA_INSTRUCTION);
        assert_eq!(persona.name(), "Mobility");
    }

    #[test]
    fn test_blank_persona_is_general() {
        assert_eq!(Persona::from_name("   "), Persona::General);
        assert_eq!(Persona::General.instruction(), FALLBACK_PERSONA_INSTRUCTION);
    }

    #[test]
    fn test_built_in_personas_have_distinct_instructions() {
        let mut instructions: Vec<&str> =
            Persona::BUILT_IN.iter().map(|p| p.instruction()).collect();
        instructions.push(FALLBACK_PERSONA_INSTRUCTION);
        let mut deduped = instructions.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), instructions.len());
    }

    #[test]
    fn test_persona_default_is_motivational() {
        assert_eq!(Persona::default(), Persona::Motivational);
    }

    #[test]
    fn test_persona_yaml_round_trip() {
        let persona: Persona = serde_yaml::from_str("Strength").unwrap();
        assert_eq!(persona, Persona::Strength);
        let yaml = serde_yaml::to_string(&Persona::Custom("Yoga".to_string())).unwrap();
        assert!(yaml.contains("Yoga"));
    }

    #[test]
    fn test_verbosity_name_variants() {
        assert_eq!(Verbosity::from_name("Very Detailed"), Verbosity::VeryDetailed);
        assert_eq!(Verbosity::from_name("very-detailed"), Verbosity::VeryDetailed);
        assert_eq!(Verbosity::from_name("very_detailed"), Verbosity::VeryDetailed);
        assert_eq!(Verbosity::from_name("short"), Verbosity::Short);
    }

    #[test]
    fn test_unknown_verbosity_uses_normal() {
        assert_eq!(Verbosity::from_name("novel"), Verbosity::Normal);
        assert_eq!(Verbosity::from_name(""), Verbosity::Normal);
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_parse_via_from_str() {
        let verbosity: Verbosity = "Detailed".parse().unwrap();
        assert_eq!(verbosity, Verbosity::Detailed);
        assert_eq!(verbosity.to_string(), "Detailed");
    }
}
