use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 情感标签
///
/// 值对象：打开会话时传入，在会话生命周期内不变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    /// 中性（默认）
    #[default]
    Neutral,
    Happy,
    Sad,
    Angry,
    Anxious,
    Confused,
}

impl Emotion {
    /// 获取所有可用的情感类型
    pub fn all() -> &'static [Emotion] {
        &[
            Emotion::Neutral,
            Emotion::Happy,
            Emotion::Sad,
            Emotion::Angry,
            Emotion::Anxious,
            Emotion::Confused,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Neutral => "neutral",
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Anxious => "anxious",
            Emotion::Confused => "confused",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Emotion::all()
            .iter()
            .copied()
            .find(|emotion| emotion.as_str() == wanted)
            .ok_or_else(|| format!("Unknown emotion: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emotion_parse() {
        assert_eq!("neutral".parse::<Emotion>(), Ok(Emotion::Neutral));
        assert_eq!(" Sad ".parse::<Emotion>(), Ok(Emotion::Sad));
        assert!("ecstatic".parse::<Emotion>().is_err());
    }

    #[test]
    fn test_emotion_round_trips_through_display() {
        for emotion in Emotion::all() {
            assert_eq!(emotion.to_string().parse::<Emotion>(), Ok(*emotion));
        }
    }

    #[test]
    fn test_default_emotion() {
        assert_eq!(Emotion::default(), Emotion::Neutral);
    }
}
