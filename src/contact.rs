use std::time::{Duration, Instant};

use thiserror::Error;

// ---------------------------------------------------------------------------
// Simulated contact form
// ---------------------------------------------------------------------------

/// Reasons a submission is refused before sending starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("le champ {0} est obligatoire")]
    MissingField(&'static str),
    #[error("adresse email invalide : {0}")]
    InvalidEmail(String),
    #[error("un envoi est déjà en cours")]
    AlreadySending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    Sent,
}

/// Name / email / message form. Nothing is delivered: an accepted submission
/// always succeeds once `delay` has elapsed.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    delay: Duration,
    sending_since: Option<Instant>,
}

impl ContactForm {
    pub fn new(delay: Duration) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            delay,
            sending_since: None,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.sending_since.is_some()
    }

    /// Time left before the pending submission completes.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.sending_since
            .map(|since| self.delay.saturating_sub(now.saturating_duration_since(since)))
    }

    /// Validate the fields and start the simulated send.
    pub fn submit(&mut self, now: Instant) -> Result<(), ContactError> {
        if self.is_sending() {
            return Err(ContactError::AlreadySending);
        }
        for (field, value) in [
            ("nom", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.trim().to_string()));
        }

        log::info!("Contact form submitted by {}", self.email.trim());
        self.sending_since = Some(now);
        Ok(())
    }

    /// Complete the pending submission once the delay has elapsed; the fields
    /// are cleared on completion.
    pub fn poll(&mut self, now: Instant) -> Option<ContactOutcome> {
        let since = self.sending_since?;
        if now.saturating_duration_since(since) < self.delay {
            return None;
        }
        self.sending_since = None;
        self.name.clear();
        self.email.clear();
        self.message.clear();
        log::info!("Contact message sent");
        Some(ContactOutcome::Sent)
    }
}

/// `local@domain.tld` with no whitespace.
fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}
