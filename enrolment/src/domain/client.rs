//! Client account data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Externally assigned client identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(i64);

impl ClientId {
    /// Wrap an externally assigned identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ClientId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Credit policy applied to a client tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditPolicy {
    /// No limit is imposed and no external lookup is made.
    Exempt,
    /// The externally sourced base limit is scaled by `multiplier`.
    Scaled { multiplier: i64 },
}

/// Client classification label driving credit policy.
///
/// The label set is open: stores may carry tiers this core does not
/// recognise, and those take the default policy. The original label is
/// preserved through the string round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClientTier {
    Default,
    ImportantClient,
    VeryImportantClient,
    Other(String),
}

impl ClientTier {
    /// Resolve a tier from its store label.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Default" => Self::Default,
            "ImportantClient" => Self::ImportantClient,
            "VeryImportantClient" => Self::VeryImportantClient,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The store label for this tier.
    pub fn label(&self) -> &str {
        match self {
            Self::Default => "Default",
            Self::ImportantClient => "ImportantClient",
            Self::VeryImportantClient => "VeryImportantClient",
            Self::Other(label) => label.as_str(),
        }
    }

    /// The credit policy this tier attracts.
    ///
    /// Unrecognised labels take the default policy (unscaled limit).
    pub const fn credit_policy(&self) -> CreditPolicy {
        match self {
            Self::VeryImportantClient => CreditPolicy::Exempt,
            Self::ImportantClient => CreditPolicy::Scaled { multiplier: 2 },
            Self::Default | Self::Other(_) => CreditPolicy::Scaled { multiplier: 1 },
        }
    }
}

impl From<String> for ClientTier {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<ClientTier> for String {
    fn from(value: ClientTier) -> Self {
        match value {
            ClientTier::Other(label) => label,
            recognised => recognised.label().to_owned(),
        }
    }
}

impl fmt::Display for ClientTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A client account as loaded from the external client store.
///
/// ## Invariants
/// - Immutable for the duration of an enrolment attempt; the store owns
///   the record and assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    id: ClientId,
    name: String,
    email: String,
    address: String,
    tier: ClientTier,
}

impl Client {
    /// Build a client from store attributes.
    pub fn new(
        id: ClientId,
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        tier: ClientTier,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            address: address.into(),
            tier,
        }
    }

    /// Externally assigned identifier.
    pub const fn id(&self) -> ClientId {
        self.id
    }

    /// Display name of the account.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email of the account.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Postal address of the account.
    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    /// Classification tier driving credit policy.
    pub const fn tier(&self) -> &ClientTier {
        &self.tier
    }
}
