use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::fmt;

/// Fallback message when a backend failure carries no usable detail.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Marketplace account role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Buyer,
    Seller,
    Both,
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Self::Buyer
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Buyer => write!(f, "buyer"),
            Role::Seller => write!(f, "seller"),
            Role::Both => write!(f, "both"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl Role {
    /// Admins see every surface.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Whether the account can manage listings ("both" sells and buys).
    pub fn is_seller(&self) -> bool {
        matches!(self, Role::Seller | Role::Both | Role::Admin)
    }

    /// Whether the account can place orders.
    pub fn is_buyer(&self) -> bool {
        matches!(self, Role::Buyer | Role::Both | Role::Admin)
    }
}

/// Account verification state as reported by the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Unverified,
    Pending,
    Verified,
}

impl Default for VerificationStatus {
    fn default() -> Self {
        Self::Unverified
    }
}

/// Verification tier granted once an account is verified
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VerificationTier {
    None,
    Basic,
    Full,
}

impl Default for VerificationTier {
    fn default() -> Self {
        Self::None
    }
}

/// Authenticated marketplace user
///
/// Created from the backend's identity-check response; the session itself
/// lives in the backend-issued cookie, never here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub verification: VerificationStatus,
    #[serde(default)]
    pub tier: VerificationTier,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn is_seller(&self) -> bool {
        self.role.is_seller()
    }

    pub fn is_buyer(&self) -> bool {
        self.role.is_buyer()
    }

    /// Check if the account has completed verification
    pub fn is_verified(&self) -> bool {
        self.verification == VerificationStatus::Verified
    }
}

/// Structured error carried inside a response envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub message: String,
}

/// Uniform response wrapper used by backend read endpoints
///
/// Callers branch on `success` only; the HTTP status of the carrying
/// response is never consulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the envelope into the payload or a user-facing message.
    ///
    /// A success envelope without a payload is treated as a failure, and a
    /// failure envelope without a message degrades to the generic fallback.
    pub fn into_result(self) -> Result<T, String> {
        if self.success {
            self.data.ok_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
        } else {
            Err(self
                .error
                .map(|e| e.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()))
        }
    }
}

/// Aggregate sales/order statistics for the dashboard page
///
/// Replaced wholesale on every fetch; fields the frontend does not render
/// are preserved opaquely in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardMetrics {
    #[serde(default)]
    pub total_sales: f64,
    #[serde(default)]
    pub order_count: u64,
    #[serde(default)]
    pub pending_orders: u64,
    #[serde(default)]
    pub active_listings: u64,
    #[serde(flatten)]
    pub extra: HashMap<String, JsonValue>,
}

/// Wallet balance snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WalletBalance {
    #[serde(default)]
    pub available: f64,
    #[serde(default)]
    pub pending: f64,
    #[serde(default)]
    pub currency: String,
}

/// Whether a listing offers a product or a service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Product,
    Service,
}

/// Read-only listing row for the management pages
///
/// All listing mutation happens backend-side; the dashboard only renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingSummary {
    pub id: String,
    pub title: String,
    pub kind: ListingKind,
    pub price: f64,
    pub published: bool,
}
