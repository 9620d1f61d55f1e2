//! Request and identity contracts for the admission path.
//!
//! Everything here is a plain value type: built once at the public API
//! boundary, evaluated by the gateway, and never persisted.

use bytes::Bytes;

/// Subscription identifier as issued by the platform subscription registry.
pub type SubscriptionId = i32;
/// Platform user (profile) identifier.
pub type UserId = i32;

/// Identity of the caller a send is evaluated on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    /// Package name of the calling app.
    pub package: String,
    /// User the call originates from.
    pub user_id: UserId,
}

impl CallerIdentity {
    pub fn new(package: impl Into<String>, user_id: UserId) -> Self {
        Self {
            package: package.into(),
            user_id,
        }
    }
}

/// Opaque token for a caller-supplied result callback.
///
/// The admission path hands these through untouched; only the transmission
/// layer ever fires them. A denied request fires nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptHandle(pub u64);

/// Message body. Text is the common path; data sends pass through the same
/// admission chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagePayload {
    Text(String),
    Data(Bytes),
}

/// One outbound send request.
#[derive(Debug, Clone)]
pub struct SendRequest {
    pub sub_id: SubscriptionId,
    pub caller: CallerIdentity,
    /// Destination number, as supplied by the caller (no normalization).
    pub dest_addr: String,
    /// Service-center override; `None` means "use the SIM's message center".
    pub smsc_addr: Option<String>,
    pub payload: MessagePayload,
    pub sent_receipt: Option<ReceiptHandle>,
    pub delivery_receipt: Option<ReceiptHandle>,
    /// Persist into the message store even for non-default messaging apps.
    pub persist_message: bool,
    /// Caller-chosen correlation id carried into transmission logs.
    pub message_id: i64,
}

/// Snapshot of one Fixed Dialing Number entry read from the SIM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FdnRecord {
    /// Display tag from the SIM record, when the entry carries one.
    pub tag: Option<String>,
    pub number: String,
}

impl FdnRecord {
    pub fn new(tag: Option<&str>, number: &str) -> Self {
        Self {
            tag: tag.map(str::to_owned),
            number: number.to_owned(),
        }
    }
}
