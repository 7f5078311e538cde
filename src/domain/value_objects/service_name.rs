//! Service name value object

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::DeployError;

/// Name the background service is registered under.
///
/// A non-empty token without whitespace; service control managers pass it
/// unquoted on command lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    pub fn parse(name: &str) -> Result<Self, DeployError> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(DeployError::InvalidServiceName {
                name: name.to_string(),
            });
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ServiceName {
    fn default() -> Self {
        Self("telegraf".to_string())
    }
}

impl FromStr for ServiceName {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_token() {
        assert_eq!(ServiceName::parse("telegraf-dc").unwrap().as_str(), "telegraf-dc");
    }

    #[test]
    fn rejects_whitespace_and_empty() {
        assert!(ServiceName::parse("tele graf").is_err());
        assert!(ServiceName::parse("telegraf\t").is_err());
        assert!(ServiceName::parse("").is_err());
    }

    #[test]
    fn default_is_telegraf() {
        assert_eq!(ServiceName::default().to_string(), "telegraf");
    }
}
