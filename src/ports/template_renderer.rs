//! Template renderer port.

use crate::domain::content::CategorizedContent;
use crate::domain::foundation::DomainError;
use crate::domain::newsletter::Newsletter;
use async_trait::async_trait;

/// Renders a composed issue into its HTML body.
///
/// The templating engine is outside this core; the result is consumed
/// as an opaque string.
#[async_trait]
pub trait TemplateRenderer: Send + Sync {
    /// Produce the HTML body for a newsletter's categorized content.
    ///
    /// # Errors
    ///
    /// - `InternalError` on rendering failure
    async fn render(
        &self,
        newsletter: &Newsletter,
        categorized: &CategorizedContent,
    ) -> Result<String, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_renderer_is_object_safe() {
        fn _accepts_dyn(_renderer: &dyn TemplateRenderer) {}
    }
}
