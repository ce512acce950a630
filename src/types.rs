use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Standard response wrapper the backend puts around every payload:
/// `{ success, message, data }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// A registered account as returned by the user endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub referral_code: String,
    #[serde(default)]
    pub created_at: String,
}

/// One wallet row attached to a user (main balance, bonus balance, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: u64,
    pub balance: Decimal,
    #[serde(default)]
    pub bonus: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub joined_at: String,
}

/// The `data` object of the user-data endpoints:
/// `{ user: {...}, wallet: [...], referrals: [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub user: User,
    #[serde(default)]
    pub wallet: Vec<Wallet>,
    #[serde(default)]
    pub referrals: Vec<Referral>,
}

/// Payload for creating a user through the admin endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub phone: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

/// Partial update payload; absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Filter fields accepted by the bet-history endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BetHistoryQuery {
    pub page: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Default for BetHistoryQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
            user_id: None,
            color: None,
        }
    }
}

/// One settled color bet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetRecord {
    pub id: u64,
    pub user_name: String,
    #[serde(default)]
    pub avatar_url: String,
    /// Game round identifier.
    pub period: String,
    pub color: String,
    pub amount: Decimal,
    #[serde(default)]
    pub payout: Decimal,
    /// `"won"` or `"lost"` as reported by the backend.
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}

impl BetRecord {
    pub fn is_win(&self) -> bool {
        self.status.eq_ignore_ascii_case("won")
    }
}
