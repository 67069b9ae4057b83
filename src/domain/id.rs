use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::error::PipelineError;

/// Internal order identifier, carried through the provider as metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Result<Self, PipelineError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(PipelineError::Validation("orderId must not be empty".into()));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Provider charge identifier (`ch_xxx`).
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(String);

impl PaymentId {
    pub fn new(id: impl Into<String>) -> Result<Self, PipelineError> {
        let id = id.into();
        if id.is_empty() {
            return Err(PipelineError::Validation("payment id must not be empty".into()));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
