use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::{ProductId, RequestId};

/// Lifecycle status of a request.
///
/// The taxonomy belongs to the host application; only the statuses it is
/// known to send get their own variant. Anything else is kept verbatim so the
/// badge still shows what the host sent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
    Completed,
    Cancelled,
    Other(String),
}

impl RequestStatus {
    /// Returns the status text exactly as it was received.
    pub fn as_str(&self) -> &str {
        match self {
            RequestStatus::Draft => "draft",
            RequestStatus::Submitted => "submitted",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Completed => "completed",
            RequestStatus::Cancelled => "cancelled",
            RequestStatus::Other(value) => value,
        }
    }

    /// Drafts are the only requests that can still be updated or cancelled.
    pub fn is_draft(&self) -> bool {
        matches!(self, RequestStatus::Draft)
    }
}

impl From<&str> for RequestStatus {
    fn from(value: &str) -> Self {
        match value {
            "draft" => RequestStatus::Draft,
            "submitted" => RequestStatus::Submitted,
            "approved" => RequestStatus::Approved,
            "rejected" => RequestStatus::Rejected,
            "completed" => RequestStatus::Completed,
            "cancelled" => RequestStatus::Cancelled,
            other => RequestStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for RequestStatus {
    fn from(value: String) -> Self {
        match RequestStatus::from(value.as_str()) {
            RequestStatus::Other(_) => RequestStatus::Other(value),
            known => known,
        }
    }
}

impl From<RequestStatus> for String {
    fn from(value: RequestStatus) -> Self {
        match value {
            RequestStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for RequestStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RequestStatus::from(s))
    }
}

impl Display for RequestStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Product {
    #[serde(default)]
    pub name: Option<String>,
}

/// Item label used when a detail has neither a name nor a product id.
pub const MISSING_PRODUCT_LABEL: &str = "Product ID: -";

/// A single line item of a request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestDetail {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub product: Option<Product>,
    /// Fallback identifier, used only when no name is available.
    #[serde(default)]
    pub product_id: Option<ProductId>,
    pub requested_quantity: i32,
}

impl RequestDetail {
    /// Name shown in the items column: the detail's own name, then the
    /// product name, then a label built from the product id (`-` when the
    /// host sent none).
    pub fn display_name(&self) -> Cow<'_, str> {
        let own = self.name.as_deref().filter(|name| !name.is_empty());
        let product = self
            .product
            .as_ref()
            .and_then(|product| product.name.as_deref())
            .filter(|name| !name.is_empty());

        match own.or(product) {
            Some(name) => Cow::Borrowed(name),
            None => match self.product_id {
                Some(id) => Cow::Owned(format!("Product ID: {id}")),
                None => Cow::Borrowed(MISSING_PRODUCT_LABEL),
            },
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Request {
    pub id: RequestId,
    pub request_number: String,
    pub status: RequestStatus,
    /// Line items; hosts may omit the list entirely.
    #[serde(default)]
    pub details: Option<Vec<RequestDetail>>,
    #[serde(default)]
    pub note: Option<String>,
    /// Raw timestamp, formatted by the host when the table is rendered.
    pub created_at: String,
}

impl Request {
    /// Line items, treating a missing list as empty.
    pub fn details(&self) -> &[RequestDetail] {
        self.details.as_deref().unwrap_or_default()
    }

    /// The note when it carries any text.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref().filter(|note| !note.is_empty())
    }
}
