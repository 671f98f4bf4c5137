use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::FormData;

use crate::config;

pub const FAILURE_ALERT: &str = "Oops! There was a problem sending your form.";

/// Fields the contact form posts. Everything but `message` is required.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub struct FormspreeError {
    pub message: String,
}

/// Body Formspree answers with. Only read for logging.
#[derive(Deserialize, Debug, Default)]
pub struct FormspreeReply {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub errors: Vec<FormspreeError>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Sent,
    Failed(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Sent,
}

impl ContactMessage {
    pub fn from_form_data(data: &FormData) -> Self {
        let field = |name: &str| data.get(name).as_string().unwrap_or_default();
        Self {
            name: field("name"),
            email: field("email"),
            phone: field("phone"),
            message: field("message"),
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn to_form_data(&self) -> Result<FormData, String> {
        let data = FormData::new().map_err(|e| format!("{:?}", e))?;
        for (name, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("message", &self.message),
        ] {
            data.append_with_str(name, value)
                .map_err(|e| format!("{:?}", e))?;
        }
        Ok(data)
    }
}

impl SubmissionPhase {
    pub fn is_submitting(&self) -> bool {
        *self == SubmissionPhase::Submitting
    }

    pub fn is_sent(&self) -> bool {
        *self == SubmissionPhase::Sent
    }

    /// Returns false when a submission is already in flight or done.
    pub fn begin(&mut self) -> bool {
        if *self != SubmissionPhase::Idle {
            return false;
        }
        *self = SubmissionPhase::Submitting;
        true
    }

    /// Settles an in-flight submission. Yields the alert text on failure.
    pub fn finish(&mut self, outcome: &SubmitOutcome) -> Option<&'static str> {
        if *self != SubmissionPhase::Submitting {
            return None;
        }
        match outcome {
            SubmitOutcome::Sent => {
                *self = SubmissionPhase::Sent;
                None
            }
            SubmitOutcome::Failed(_) => {
                *self = SubmissionPhase::Idle;
                Some(FAILURE_ALERT)
            }
        }
    }

    /// Back to an empty form after the success panel.
    pub fn reset(&mut self) {
        if *self == SubmissionPhase::Sent {
            *self = SubmissionPhase::Idle;
        }
    }
}

pub fn classify(status: u16, ok: bool) -> SubmitOutcome {
    if ok {
        SubmitOutcome::Sent
    } else {
        SubmitOutcome::Failed(format!("endpoint answered with status {}", status))
    }
}

/// Posts the message once. Any non-OK status or network error is a failure.
pub async fn submit(message: &ContactMessage) -> SubmitOutcome {
    let body = match message.to_form_data() {
        Ok(body) => body,
        Err(e) => return SubmitOutcome::Failed(e),
    };

    let response = match Request::post(config::FORM_ENDPOINT)
        .header("Accept", "application/json")
        .body(body)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return SubmitOutcome::Failed(e.to_string()),
    };

    let outcome = classify(response.status(), response.ok());
    if let SubmitOutcome::Failed(_) = outcome {
        match response.json::<FormspreeReply>().await {
            Ok(reply) => {
                log::debug!("Form endpoint reply ok={} errors={}", reply.ok, reply.errors.len());
                for error in reply.errors {
                    log::warn!("Form endpoint rejected submission: {}", error.message);
                }
            }
            Err(e) => log::debug!("Unreadable form endpoint reply: {}", e),
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 90000 00000".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn message_is_optional() {
        assert!(filled().missing_fields().is_empty());
    }

    #[test]
    fn blank_required_fields_are_reported() {
        let message = ContactMessage {
            email: "   ".to_string(),
            phone: String::new(),
            ..filled()
        };
        assert_eq!(message.missing_fields(), vec!["email", "phone"]);
    }

    #[test]
    fn ok_response_sends_exactly_once() {
        let mut phase = SubmissionPhase::default();
        assert!(phase.begin());
        assert!(phase.is_submitting());
        assert!(!phase.begin());

        assert_eq!(phase.finish(&classify(200, true)), None);
        assert!(phase.is_sent());

        // A late duplicate settle changes nothing
        assert_eq!(phase.finish(&classify(200, true)), None);
        assert!(!phase.begin());
        assert!(phase.is_sent());
    }

    #[test]
    fn failure_raises_one_alert_and_keeps_form() {
        let mut phase = SubmissionPhase::default();
        assert!(phase.begin());

        let alert = phase.finish(&classify(422, false));
        assert_eq!(alert, Some(FAILURE_ALERT));
        assert_eq!(phase, SubmissionPhase::Idle);
        assert_eq!(phase.finish(&classify(422, false)), None);

        // Control is usable again
        assert!(phase.begin());
    }

    #[test]
    fn network_errors_are_plain_failures() {
        let mut phase = SubmissionPhase::default();
        phase.begin();
        let outcome = SubmitOutcome::Failed("Failed to fetch".to_string());
        assert_eq!(phase.finish(&outcome), Some(FAILURE_ALERT));
    }

    #[test]
    fn non_ok_statuses_are_treated_alike() {
        for status in [301, 400, 404, 429, 500, 503] {
            assert!(matches!(classify(status, false), SubmitOutcome::Failed(_)));
        }
    }

    #[test]
    fn send_another_returns_to_idle() {
        let mut phase = SubmissionPhase::default();
        phase.begin();
        phase.finish(&SubmitOutcome::Sent);
        phase.reset();
        assert_eq!(phase, SubmissionPhase::Idle);
    }

    #[test]
    fn reply_parses_with_and_without_errors() {
        let reply: FormspreeReply = serde_json::from_str(r#"{"ok":true,"next":"/thanks"}"#).unwrap();
        assert!(reply.ok);
        assert!(reply.errors.is_empty());

        let reply: FormspreeReply = serde_json::from_str(
            r#"{"errors":[{"code":"TYPE_EMAIL","field":"email","message":"should be an email"}]}"#,
        )
        .unwrap();
        assert!(!reply.ok);
        assert_eq!(reply.errors[0].message, "should be an email");
    }
}
