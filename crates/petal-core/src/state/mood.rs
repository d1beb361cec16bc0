use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// How the user feels today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Sleepy,
    Motivated,
    Angry,
    Sad,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Sleepy, Mood::Motivated, Mood::Angry, Mood::Sad];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Sleepy => "sleepy",
            Mood::Motivated => "motivated",
            Mood::Angry => "angry",
            Mood::Sad => "sad",
        }
    }

    /// Canned reaction shown after the mood is picked.
    pub fn reaction(&self) -> &'static str {
        match self {
            Mood::Sleepy => "sleepy day? a gentle ten minutes still counts.",
            Mood::Motivated => "love that energy. let's grow something!",
            Mood::Angry => "take a slow breath. the garden will wait for you.",
            Mood::Sad => "be soft with yourself today. small steps are enough.",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == wanted)
            .ok_or_else(|| ValidationError::UnknownMood(s.to_string()))
    }
}

/// Serde adapter for an optional mood stored as a label, `""` meaning none.
///
/// `null` and unknown labels in old files read back as no mood.
pub(crate) mod label {
    use super::Mood;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(mood: &Option<Mood>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(mood.map(|m| m.as_str()).unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Mood>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.and_then(|s| s.parse().ok()))
    }
}
