//! In-memory port implementations.

mod newsletter_repository;
mod send_lock;
mod recipient_directory;

pub use newsletter_repository::InMemoryNewsletterRepository;
pub use send_lock::InMemorySendLock;
pub use recipient_directory::InMemoryRecipientDirectory;
