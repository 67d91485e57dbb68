use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// The two contest tracks a vote can apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Miss,
    Master,
}

impl Category {
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "miss" => Some(Self::Miss),
            "master" => Some(Self::Master),
            _ => None,
        }
    }

    pub fn to_bson(&self) -> anyhow::Result<Bson> {
        let bson = mongodb::bson::to_bson(self)?;
        Ok(bson)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Miss => write!(f, "miss"),
            Self::Master => write!(f, "master"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_param() {
        assert_eq!(Category::from_param("miss"), Some(Category::Miss));
        assert_eq!(Category::from_param("master"), Some(Category::Master));
        assert_eq!(Category::from_param("queen"), None);
        assert_eq!(Category::from_param(""), None);
        assert_eq!(Category::from_param("Miss"), None);
    }

    #[test]
    fn test_to_bson_lowercase() {
        let bson = Category::Miss.to_bson().unwrap();
        assert_eq!(bson, Bson::String("miss".to_owned()));
        let bson = Category::Master.to_bson().unwrap();
        assert_eq!(bson, Bson::String("master".to_owned()));
    }
}
