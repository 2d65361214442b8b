use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// region:    --- Record State

/// Lifecycle state shared by every stored record.
///
/// Deleting a record moves it to `Deleted`; every query path only sees `Active` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordState {
    Active,
    Deleted,
}

impl RecordState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordState::Active => "active",
            RecordState::Deleted => "deleted",
        }
    }
}

impl std::fmt::Display for RecordState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for RecordState {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_str() {
            "active" => Ok(RecordState::Active),
            "deleted" => Ok(RecordState::Deleted),
            _ => Err(format!("Invalid record state: {}", s)),
        }
    }
}

// endregion: --- Record State

// region:    --- User

/// User entity representing a complete user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    #[sqlx(try_from = "String")]
    pub state: RecordState,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Data structure for creating a new user.
///
/// Password must be hashed before creating.
#[derive(Debug, Clone)]
pub struct UserForCreate {
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

/// Data structure for updating an existing user.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UserForUpdate {
    pub email: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: Option<bool>,
}

impl UserForUpdate {
    /// Create a new empty `UserForUpdate` instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(mut self, email: String) -> Self {
        self.email = Some(email);
        self
    }

    pub fn username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    pub fn first_name(mut self, first_name: String) -> Self {
        self.first_name = Some(first_name);
        self
    }

    pub fn last_name(mut self, last_name: String) -> Self {
        self.last_name = Some(last_name);
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.username.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.is_active.is_none()
    }
}

// endregion: --- User

// region:    --- Asset

/// Tradable asset. `asset_type` is a free-form category such as "cryptocurrency".
#[derive(Debug, Clone, FromRow)]
pub struct Asset {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub asset_type: String,
    pub description: String,
    pub price: f64,
    pub is_active: bool,
    #[sqlx(try_from = "String")]
    pub state: RecordState,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct AssetForCreate {
    pub name: String,
    pub symbol: String,
    pub asset_type: String,
    pub description: String,
    pub price: f64,
}

/// Sparse asset update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct AssetForUpdate {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub asset_type: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub is_active: Option<bool>,
}

impl AssetForUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.symbol.is_none()
            && self.asset_type.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.is_active.is_none()
    }
}

// endregion: --- Asset

// region:    --- Transaction

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Buy,
    Sell,
    Transfer,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => "buy",
            TransactionType::Sell => "sell",
            TransactionType::Transfer => "transfer",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buy" => Ok(TransactionType::Buy),
            "sell" => Ok(TransactionType::Sell),
            "transfer" => Ok(TransactionType::Transfer),
            _ => Err(format!("Invalid transaction type: {}", s)),
        }
    }
}

impl TryFrom<String> for TransactionType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Settlement status. New transactions always start as `Pending`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Cancelled,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TransactionStatus::Pending),
            "completed" => Ok(TransactionStatus::Completed),
            "failed" => Ok(TransactionStatus::Failed),
            "cancelled" => Ok(TransactionStatus::Cancelled),
            _ => Err(format!("Invalid transaction status: {}", s)),
        }
    }
}

impl TryFrom<String> for TransactionStatus {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Stored transaction. Holds only foreign keys; related records are resolved at read time.
#[derive(Debug, Clone, FromRow)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub asset_id: i64,
    #[sqlx(try_from = "String")]
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub price: f64,
    pub total_value: f64,
    #[sqlx(try_from = "String")]
    pub status: TransactionStatus,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub state: RecordState,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// New transaction row. `total_value` is computed by the caller, status is always pending.
#[derive(Debug, Clone)]
pub struct TransactionForCreate {
    pub user_id: i64,
    pub asset_id: i64,
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub price: f64,
    pub total_value: f64,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct TransactionForUpdate {
    pub transaction_type: Option<TransactionType>,
    pub amount: Option<f64>,
    pub price: Option<f64>,
    pub total_value: Option<f64>,
    pub status: Option<TransactionStatus>,
    pub description: Option<String>,
}

impl TransactionForUpdate {
    pub fn is_empty(&self) -> bool {
        self.transaction_type.is_none()
            && self.amount.is_none()
            && self.price.is_none()
            && self.total_value.is_none()
            && self.status.is_none()
            && self.description.is_none()
    }
}

// endregion: --- Transaction
