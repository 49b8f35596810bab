//! Newsletter use cases.

mod compose_newsletter;
mod recommend_content;
mod send_newsletter;
mod cancel_newsletter;
mod compose_and_send;

pub use compose_newsletter::{ComposeNewsletterCommand, ComposeNewsletterHandler};
pub use recommend_content::{RecommendContentCommand, RecommendContentHandler};
pub use send_newsletter::{SendNewsletterCommand, SendNewsletterHandler};
pub use cancel_newsletter::{CancelNewsletterCommand, CancelNewsletterHandler};
pub use compose_and_send::{ComposeAndSendCommand, ComposeAndSendHandler};
