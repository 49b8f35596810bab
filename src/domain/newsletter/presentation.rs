//! Presentation mapping for newsletter statuses.
//!
//! Labels and badge colors live in a lookup table outside the state
//! machine, keeping the lifecycle free of display concerns.

use std::collections::BTreeMap;

use crate::domain::foundation::NewsletterStatus;
use once_cell::sync::Lazy;

static PRESENTATION: Lazy<BTreeMap<NewsletterStatus, (&'static str, &'static str)>> =
    Lazy::new(|| {
        BTreeMap::from([
            (NewsletterStatus::Draft, ("Draft", "gray")),
            (NewsletterStatus::Scheduled, ("Scheduled", "blue")),
            (NewsletterStatus::Sending, ("Sending", "orange")),
            (NewsletterStatus::Sent, ("Sent", "green")),
            (NewsletterStatus::Failed, ("Failed", "red")),
            (NewsletterStatus::Cancelled, ("Cancelled", "gray")),
        ])
    });

/// Returns the display label for a status.
pub fn status_label(status: NewsletterStatus) -> &'static str {
    PRESENTATION[&status].0
}

/// Returns the badge color for a status.
pub fn status_color(status: NewsletterStatus) -> &'static str {
    PRESENTATION[&status].1
}
