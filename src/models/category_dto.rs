use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Category {
    /// NaviLens Go accessibility markers
    NaviLensGo,
    /// Station photographs
    Fotos,
    Otro,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown category `{0}`, expected one of NaviLensGo, Fotos, Otro")]
pub struct ParseCategoryError(String);

impl Category {
    pub const ALL: [Category; 3] = [Category::NaviLensGo, Category::Fotos, Category::Otro];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::NaviLensGo => "NaviLensGo",
            Category::Fotos => "Fotos",
            Category::Otro => "Otro",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::NaviLensGo => "NaviLens Go",
            Category::Fotos => "Foto de Parada",
            Category::Otro => "Otro",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("NaviLensGo".parse::<Category>().unwrap(), Category::NaviLensGo);
        assert_eq!("Fotos".parse::<Category>().unwrap(), Category::Fotos);
        assert_eq!("Otro".parse::<Category>().unwrap(), Category::Otro);
        assert!("fotos".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_display_matches_storage_segment() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }
}
