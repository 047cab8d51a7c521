//! Message delivery.
//!
//! The site has no mail backend yet. [`SimulatedSubmitter`] stands in for
//! one: it waits a fixed delay and reports success.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::error::Result;
use crate::form::ContactForm;

/// Delay used by the site's simulated submission.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Confirmation shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// Delivers a validated contact form.
pub trait Submitter {
    fn submit(&self, form: &ContactForm) -> impl Future<Output = Result<()>> + Send;
}

/// Waits for `delay`, then succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, form: &ContactForm) -> impl Future<Output = Result<()>> + Send {
        let delay = self.delay;
        let subject = form.subject.clone();
        async move {
            debug!(
                subject = %subject,
                delay_ms = delay.as_millis(),
                "simulating message delivery"
            );
            tokio::time::sleep(delay).await;
            Ok(())
        }
    }
}
