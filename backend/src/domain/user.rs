//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// The identifier value was absent or empty.
    MissingId,
    /// The identifier value was not cleanly parseable as an integer.
    NotNumeric,
    /// The identifier parsed but is not a positive key.
    NotPositive,
    /// The display name was empty once trimmed.
    EmptyDisplayName,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingId => write!(f, "user id must be present"),
            Self::NotNumeric => write!(f, "user id must be numeric"),
            Self::NotPositive => write!(f, "user id must be a positive integer"),
            Self::EmptyDisplayName => write!(f, "display name must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Positive integer key identifying a [`User`] record.
///
/// The store assigns these keys; no zero or negative value is ever a valid
/// lookup target, so both are rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    /// Validate and construct a [`UserId`] from an integer value.
    pub const fn new(id: i64) -> Result<Self, UserValidationError> {
        if id < 1 {
            return Err(UserValidationError::NotPositive);
        }
        Ok(Self(id))
    }

    /// Parse a submitted textual value into a [`UserId`].
    ///
    /// Accepts only values cleanly coercible to a positive integer.
    /// Surrounding ASCII whitespace is tolerated; empty input, non-numeric
    /// input, and numeric prefixes with trailing garbage are all rejected.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::UserId;
    ///
    /// assert!(UserId::parse("3").is_ok());
    /// assert!(UserId::parse("3abc").is_err());
    /// assert!(UserId::parse("").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, UserValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::MissingId);
        }
        let id: i64 = trimmed
            .parse()
            .map_err(|_| UserValidationError::NotNumeric)?;
        Self::new(id)
    }

    /// Access the raw integer key.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<i64> for UserId {
    type Error = UserValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Human readable display name for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a [`DisplayName`] from owned input.
    pub fn new(display_name: impl Into<String>) -> Result<Self, UserValidationError> {
        let display_name = display_name.into();
        if display_name.trim().is_empty() {
            return Err(UserValidationError::EmptyDisplayName);
        }
        Ok(Self(display_name))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Application user.
///
/// ## Invariants
/// - `id` is a positive integer key.
/// - `display_name` is non-empty once trimmed of whitespace.
/// - The stored credential never appears here: the type has no field for it,
///   so no outward serialisation can leak it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    #[schema(value_type = i64, example = 2)]
    id: UserId,
    #[schema(value_type = String, example = "Ada Lovelace")]
    display_name: DisplayName,
}

impl User {
    /// Build a new [`User`] from validated components.
    #[must_use]
    pub const fn new(id: UserId, display_name: DisplayName) -> Self {
        Self { id, display_name }
    }

    /// Fallible constructor enforcing identifier and display name invariants.
    ///
    /// Prefer [`User::new`] when components are already validated.
    pub fn try_from_parts(
        id: i64,
        display_name: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let id = UserId::new(id)?;
        let display_name = DisplayName::new(display_name)?;
        Ok(Self::new(id, display_name))
    }

    /// Stable user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Display name shown to other users.
    #[must_use]
    pub const fn display_name(&self) -> &DisplayName {
        &self.display_name
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: i64,
    display_name: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User { id, display_name } = value;
        Self {
            id: id.get(),
            display_name: display_name.into(),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        User::try_from_parts(value.id, value.display_name)
    }
}
