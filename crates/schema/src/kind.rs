//! Supported proxy kinds.

use std::fmt;
use std::str::FromStr;

/// AWS service an API Gateway proxy forwards to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProxyKind {
    Kinesis,
    S3,
    Sns,
    Sqs,
    Dynamodb,
}

impl ProxyKind {
    /// Every kind, in the order they are listed to users.
    pub const ALL: [Self; 5] = [Self::Kinesis, Self::S3, Self::Sns, Self::Sqs, Self::Dynamodb];

    /// The configuration key introducing this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kinesis => "kinesis",
            Self::S3 => "s3",
            Self::Sns => "sns",
            Self::Sqs => "sqs",
            Self::Dynamodb => "dynamodb",
        }
    }

    /// `kinesis, s3, sns, sqs, dynamodb`
    pub fn supported() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl fmt::Display for ProxyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configuration key that does not name a supported proxy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported proxy kind {0:?}")]
pub struct UnknownProxyKind(pub String);

impl FromStr for ProxyKind {
    type Err = UnknownProxyKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownProxyKind(s.to_owned()))
    }
}
