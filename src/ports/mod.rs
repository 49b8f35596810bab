//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `NewsletterRepository` - Newsletter aggregate persistence
//! - `SendLock` - Per-newsletter send mutual exclusion (TTL lease)
//! - `ContentCatalog` - Read access to editorial content items
//! - `RecipientDirectory` - Recipient resolution with scope filters
//! - `MessagingProvider` - External campaign provider client
//! - `TemplateRenderer` - Opaque HTML rendering of a composed issue

mod newsletter_repository;
mod send_lock;
mod content_catalog;
mod recipient_directory;
mod messaging_provider;
mod template_renderer;

pub use newsletter_repository::NewsletterRepository;
pub use send_lock::SendLock;
pub use content_catalog::ContentCatalog;
pub use recipient_directory::RecipientDirectory;
pub use messaging_provider::{CampaignReceipt, CampaignRequest, MessagingProvider};
pub use template_renderer::TemplateRenderer;
