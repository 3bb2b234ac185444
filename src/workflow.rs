//! The two fixed pipelines: log triage and the naming exchange.
//!
//! Each run is a single linear traversal: gather input (if any), build the
//! messages, make one completion call, return the display text. Errors
//! propagate to the caller untouched.

use crate::cli::{DEFAULT_SERVICE, NAMING_TEMPERATURE, TRIAGE_TEMPERATURE};
use crate::errors::BuddyError;
use crate::logs::LogSource;
use crate::openai::{ChatCompletion, CompletionRequest};
use crate::prompt::{naming_messages, triage_messages};

/// Header printed above the triage reply.
pub const TRIAGE_HEADER: &str = "--- buddy's diagnosis ---";
/// Header printed above the naming reply.
pub const NAMING_HEADER: &str = "buddy says:";

/// Fetch recent logs for the app service and ask for a startup diagnosis.
/// Log retrieval always completes before the remote call is issued.
pub fn run_triage<S, C>(source: &S, client: &C) -> Result<String, BuddyError>
where
    S: LogSource,
    C: ChatCompletion,
{
    println!("Fetching recent `{}` logs...", DEFAULT_SERVICE);
    let logs = source.fetch_recent_output(DEFAULT_SERVICE)?;
    let request = CompletionRequest::new(triage_messages(&logs), TRIAGE_TEMPERATURE);
    println!("Asking buddy for a diagnosis...");
    let answer = client.complete(&request)?;
    Ok(format!("{}\n\n{}", TRIAGE_HEADER, answer))
}

/// Send the fixed naming script and return the assistant's answer.
pub fn run_naming<C>(client: &C) -> Result<String, BuddyError>
where
    C: ChatCompletion,
{
    println!("Thinking it over...");
    let request = CompletionRequest::new(naming_messages(), NAMING_TEMPERATURE);
    let answer = client.complete(&request)?;
    Ok(format!("{}\n\n{}", NAMING_HEADER, answer.trim()))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::cli::COMPLETION_MODEL;

    struct FakeSource {
        logs: &'static str,
    }

    impl LogSource for FakeSource {
        fn fetch_recent_output(&self, _service: &str) -> Result<String, BuddyError> {
            Ok(self.logs.to_string())
        }
    }

    struct FailingSource;

    impl LogSource for FailingSource {
        fn fetch_recent_output(&self, service: &str) -> Result<String, BuddyError> {
            Err(BuddyError::SourceUnavailable {
                service: service.to_string(),
                detail: "exit status 1".to_string(),
            })
        }
    }

    /// Records every request and echoes back the last user message content.
    struct EchoClient {
        requests: RefCell<Vec<CompletionRequest>>,
    }

    impl EchoClient {
        fn new() -> Self {
            EchoClient {
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl ChatCompletion for EchoClient {
        fn complete(&self, request: &CompletionRequest) -> Result<String, BuddyError> {
            self.requests.borrow_mut().push(request.clone());
            let last_user = request
                .messages
                .iter()
                .rev()
                .find(|m| m.role == "user")
                .map(|m| m.content.clone())
                .unwrap_or_default();
            Ok(last_user)
        }
    }

    #[test]
    fn triage_output_embeds_the_log_line() {
        let source = FakeSource {
            logs: "Error: port 5000 already in use",
        };
        let client = EchoClient::new();
        let output = run_triage(&source, &client).unwrap();
        assert!(output.starts_with(TRIAGE_HEADER));
        assert!(output.contains("Error: port 5000 already in use"));
    }

    #[test]
    fn triage_uses_fixed_model_and_low_temperature() {
        let source = FakeSource { logs: "ok" };
        let client = EchoClient::new();
        run_triage(&source, &client).unwrap();
        let requests = client.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, COMPLETION_MODEL);
        assert_eq!(requests[0].temperature, TRIAGE_TEMPERATURE);
    }

    #[test]
    fn naming_uses_fixed_model_and_high_temperature() {
        let client = EchoClient::new();
        run_naming(&client).unwrap();
        let requests = client.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, COMPLETION_MODEL);
        assert_eq!(requests[0].temperature, NAMING_TEMPERATURE);
    }

    #[test]
    fn naming_output_is_trimmed_under_the_header() {
        struct PaddedClient;
        impl ChatCompletion for PaddedClient {
            fn complete(&self, _request: &CompletionRequest) -> Result<String, BuddyError> {
                Ok("  Seren works for me, Jun-san.\n\n".to_string())
            }
        }
        let output = run_naming(&PaddedClient).unwrap();
        assert_eq!(
            output,
            format!("{}\n\nSeren works for me, Jun-san.", NAMING_HEADER)
        );
    }

    #[test]
    fn source_failure_aborts_before_any_completion_call() {
        let client = EchoClient::new();
        let err = run_triage(&FailingSource, &client).unwrap_err();
        assert!(matches!(err, BuddyError::SourceUnavailable { .. }));
        assert!(client.requests.borrow().is_empty());
    }
}
