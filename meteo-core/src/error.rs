//! Failed-lookup classification into a single user-facing message.

use serde::Deserialize;
use thiserror::Error;

/// Optional error payload the backend sends alongside non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

/// Outcome of parsing the error body. Both `Failed` and a `Parsed` body
/// without a message degrade to the status-only message; keeping them
/// distinct records which one actually happened.
#[derive(Debug)]
pub enum ErrorBodyParse {
    Parsed(ErrorBody),
    Failed,
}

impl ErrorBodyParse {
    /// Backend-provided message, treating an empty string as absent.
    fn message(&self) -> Option<&str> {
        match self {
            ErrorBodyParse::Parsed(body) => {
                body.error.as_deref().filter(|msg| !msg.is_empty())
            }
            ErrorBodyParse::Failed => None,
        }
    }
}

/// Why a lookup did not produce a weather payload.
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// The request never completed, or the success body could not be
    /// decoded as JSON.
    #[error("backend request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The request completed with a non-2xx status.
    #[error("backend answered with status {status}")]
    Http { status: u16, body: ErrorBodyParse },
}

/// Map a failure to the exact message shown to the user. Rendering is the
/// caller's responsibility.
pub fn classify(failure: &FetchFailure) -> String {
    match failure {
        FetchFailure::Network(_) => {
            "Erreur de connexion au serveur backend (Go). Vérifie qu’il est bien démarré."
                .to_string()
        }
        FetchFailure::Http { status: 400, .. } => {
            "Requête invalide : vérifie le nom de la ville ou le format de la demande."
                .to_string()
        }
        FetchFailure::Http { status: 404, .. } => {
            "Ville introuvable dans l’API météo.".to_string()
        }
        FetchFailure::Http { status: 500, .. } => {
            "Erreur interne du serveur météo. Réessaie dans quelques instants.".to_string()
        }
        FetchFailure::Http { status, body } => match body.message() {
            Some(msg) => format!("Erreur inattendue ({status}) : {msg}"),
            None => format!("Erreur inattendue ({status})"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, body: ErrorBodyParse) -> FetchFailure {
        FetchFailure::Http { status, body }
    }

    fn parsed(message: Option<&str>) -> ErrorBodyParse {
        ErrorBodyParse::Parsed(ErrorBody { error: message.map(str::to_string) })
    }

    #[test]
    fn status_400_maps_to_invalid_request() {
        let msg = classify(&http(400, ErrorBodyParse::Failed));
        assert_eq!(msg, "Requête invalide : vérifie le nom de la ville ou le format de la demande.");
    }

    #[test]
    fn status_404_ignores_any_body() {
        let msg = classify(&http(404, parsed(Some("not in index"))));
        assert_eq!(msg, "Ville introuvable dans l’API météo.");
    }

    #[test]
    fn status_500_maps_to_internal_error() {
        let msg = classify(&http(500, parsed(None)));
        assert_eq!(msg, "Erreur interne du serveur météo. Réessaie dans quelques instants.");
    }

    #[test]
    fn unmapped_status_includes_backend_message() {
        let msg = classify(&http(418, parsed(Some("teapot"))));
        assert_eq!(msg, "Erreur inattendue (418) : teapot");
    }

    #[test]
    fn unmapped_status_without_body_is_status_only() {
        let msg = classify(&http(418, ErrorBodyParse::Failed));
        assert_eq!(msg, "Erreur inattendue (418)");
    }

    #[test]
    fn empty_backend_message_counts_as_absent() {
        let msg = classify(&http(418, parsed(Some(""))));
        assert_eq!(msg, "Erreur inattendue (418)");
    }

    #[test]
    fn parsed_body_without_error_field_is_status_only() {
        let msg = classify(&http(503, parsed(None)));
        assert_eq!(msg, "Erreur inattendue (503)");
    }

    #[tokio::test]
    async fn transport_failure_maps_to_backend_connection_message() {
        // An unparseable URL fails inside the client, before any I/O.
        let err = reqwest::Client::new()
            .get("http://")
            .send()
            .await
            .expect_err("invalid URL must not produce a response");

        let msg = classify(&FetchFailure::Network(err));
        assert_eq!(
            msg,
            "Erreur de connexion au serveur backend (Go). Vérifie qu’il est bien démarré."
        );
    }
}
