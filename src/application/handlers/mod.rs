//! Command handlers, one file per use case.

pub mod newsletter;

pub use newsletter::{
    CancelNewsletterCommand, CancelNewsletterHandler, ComposeAndSendCommand,
    ComposeAndSendHandler, ComposeNewsletterCommand, ComposeNewsletterHandler,
    RecommendContentCommand, RecommendContentHandler, SendNewsletterCommand,
    SendNewsletterHandler,
};
