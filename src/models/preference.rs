use std::fmt;
use std::str::FromStr;

/// Stored opinion of a user about a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikesOrDislikes {
    Likes,
    Dislikes,
}

impl LikesOrDislikes {
    pub fn as_str(&self) -> &'static str {
        match self {
            LikesOrDislikes::Likes => "likes",
            LikesOrDislikes::Dislikes => "dislikes",
        }
    }
}

impl fmt::Display for LikesOrDislikes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised `likesOrDislikes` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPreference;

impl FromStr for LikesOrDislikes {
    type Err = InvalidPreference;

    /// Exact, case-sensitive match on `likes` / `dislikes`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "likes" => Ok(LikesOrDislikes::Likes),
            "dislikes" => Ok(LikesOrDislikes::Dislikes),
            _ => Err(InvalidPreference),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preference() {
        assert_eq!("likes".parse::<LikesOrDislikes>(), Ok(LikesOrDislikes::Likes));
        assert_eq!("dislikes".parse::<LikesOrDislikes>(), Ok(LikesOrDislikes::Dislikes));

        // Case and whitespace are significant
        assert!("Likes".parse::<LikesOrDislikes>().is_err());
        assert!(" likes".parse::<LikesOrDislikes>().is_err());
        assert!("".parse::<LikesOrDislikes>().is_err());
    }

    #[test]
    fn test_preference_display_matches_stored_value() {
        for value in [LikesOrDislikes::Likes, LikesOrDislikes::Dislikes] {
            assert_eq!(value.to_string(), value.as_str());
            assert_eq!(value.as_str().parse::<LikesOrDislikes>(), Ok(value));
        }
    }
}
