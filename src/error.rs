//! Error Types
//!
//! Transport and application failures, plus the user-facing failure kinds.

use thiserror::Error;

use crate::notify::escape_html;

pub type BridgeResult<T> = Result<T, BridgeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeError {
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// 2xx response whose payload reports a failure
    #[error("rejected by server: {0}")]
    Rejected(String),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("invalid node attribute `{key}`: {reason}")]
    Attribute { key: &'static str, reason: String },

    #[error("invalid config: {0}")]
    Config(String),
}

impl From<gloo_net::Error> for BridgeError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => BridgeError::Decode(e.to_string()),
            other => BridgeError::Network(other.to_string()),
        }
    }
}

/// What the user was trying to do when an error surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    TreeFetch,
    Move,
    ProductListFetch,
    SortUpdate,
    Backup,
    OrderSync,
    ProductAction,
}

impl Failure {
    /// Toast text for this failure
    pub fn message(&self, err: &BridgeError) -> String {
        match (self, err) {
            (_, BridgeError::Network(_)) if *self != Failure::SortUpdate => {
                "Es ist ein Fehler bei der Übertragung aufgetreten".to_string()
            }
            (Failure::TreeFetch, _) => "Der Kategoriebaum konnte nicht geladen werden".to_string(),
            (Failure::Move, _) => "Es ist ein Fehler bei der Aktualisierung aufgetreten".to_string(),
            (Failure::ProductListFetch, BridgeError::Rejected(msg)) => msg.clone(),
            (Failure::ProductListFetch, _) => "Es ist ein Fehler beim Abrufen der Produkte aufgetreten".to_string(),
            (Failure::SortUpdate, BridgeError::Rejected(msg) | BridgeError::Network(msg)) => {
                format!("Fehler beim Aktualisieren des Sortierwerts: {msg}")
            }
            (Failure::SortUpdate, _) => "Fehler beim Aktualisieren des Sortierwerts".to_string(),
            (Failure::Backup, _) => "Das Backup konnte nicht gestartet werden".to_string(),
            (Failure::OrderSync, _) => format!("<p>Ein Fehler ist aufgetreten:</p>{}", escape_html(&err.to_string())),
            (Failure::ProductAction, _) => "Ein Fehler ist bei der Produktaktion aufgetreten".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_errors_read_as_transfer_failures() {
        let err = BridgeError::Network("offline".into());
        assert_eq!(Failure::Move.message(&err), "Es ist ein Fehler bei der Übertragung aufgetreten");
        assert_eq!(Failure::ProductListFetch.message(&err), "Es ist ein Fehler bei der Übertragung aufgetreten");
    }

    #[test]
    fn test_server_message_is_surfaced() {
        let err = BridgeError::Rejected("Kategorie gesperrt".into());
        assert_eq!(Failure::ProductListFetch.message(&err), "Kategorie gesperrt");
        assert_eq!(
            Failure::SortUpdate.message(&err),
            "Fehler beim Aktualisieren des Sortierwerts: Kategorie gesperrt"
        );
        assert_eq!(Failure::SortUpdate.message(&BridgeError::Status(500)), "Fehler beim Aktualisieren des Sortierwerts");
    }

    #[test]
    fn test_order_sync_failure_names_the_error() {
        assert_eq!(
            Failure::OrderSync.message(&BridgeError::Status(502)),
            "<p>Ein Fehler ist aufgetreten:</p>HTTP error! status: 502"
        );
        assert_eq!(
            Failure::OrderSync.message(&BridgeError::Decode("expected `<`".into())),
            "<p>Ein Fehler ist aufgetreten:</p>invalid response body: expected `&lt;`"
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(BridgeError::Status(404).to_string(), "HTTP error! status: 404");
    }
}
