use serde::{Deserialize, Serialize};

/// The two states of the theme: a light or a low-light (dark) palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    pub fn inverted(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

impl From<bool> for ColorScheme {
    fn from(is_dark: bool) -> Self {
        Self::from_dark(is_dark)
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorScheme::Light => write!(f, "light"),
            ColorScheme::Dark => write!(f, "dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::dark(true, ColorScheme::Dark)]
    #[case::light(false, ColorScheme::Light)]
    fn test_from_dark(#[case] is_dark: bool, #[case] expected: ColorScheme) {
        assert_eq!(ColorScheme::from_dark(is_dark), expected);
        assert_eq!(ColorScheme::from(is_dark), expected);
        assert_eq!(expected.is_dark(), is_dark);
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(ColorScheme::default(), ColorScheme::Light);
    }

    #[test]
    fn test_inverted() {
        assert_eq!(ColorScheme::Light.inverted(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.inverted(), ColorScheme::Light);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ColorScheme::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let parsed: ColorScheme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, ColorScheme::Light);
    }
}
