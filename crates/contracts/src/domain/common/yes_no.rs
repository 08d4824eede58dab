use serde::{Deserialize, Serialize};

/// Single-letter flag used throughout the records (`"Y"` / `"N"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(rename = "Y")]
    Yes,
    #[default]
    #[serde(rename = "N")]
    No,
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        self == Self::Yes
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Y",
            Self::No => "N",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        assert_eq!(serde_json::to_string(&YesNo::Yes).unwrap(), "\"Y\"");
        assert_eq!(serde_json::from_str::<YesNo>("\"N\"").unwrap(), YesNo::No);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(YesNo::Yes.toggled(), YesNo::No);
        assert_eq!(YesNo::No.toggled(), YesNo::Yes);
    }
}
