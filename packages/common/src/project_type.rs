#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle category of a portfolio project.
///
/// When the `sea-orm` feature is enabled, this enum can be used directly in SeaORM entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
pub enum ProjectType {
    /// Flagship work featured ahead of everything else.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Prestigious"))]
    Prestigious,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Ongoing"))]
    Ongoing,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Completed"))]
    Completed,
    /// Announced but not started.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Upcoming"))]
    Upcoming,
}

impl ProjectType {
    /// All possible project types.
    pub const ALL: &'static [ProjectType] = &[
        Self::Prestigious,
        Self::Ongoing,
        Self::Completed,
        Self::Upcoming,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prestigious => "Prestigious",
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
            Self::Upcoming => "Upcoming",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an invalid project type string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseProjectTypeError {
    invalid: String,
}

impl fmt::Display for ParseProjectTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid projectType '{}'. Valid values: {}",
            self.invalid,
            ProjectType::ALL
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for ParseProjectTypeError {}

impl FromStr for ProjectType {
    type Err = ParseProjectTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Prestigious" => Ok(Self::Prestigious),
            "Ongoing" => Ok(Self::Ongoing),
            "Completed" => Ok(Self::Completed),
            "Upcoming" => Ok(Self::Upcoming),
            _ => Err(ParseProjectTypeError {
                invalid: s.to_string(),
            }),
        }
    }
}
