//! Render templates.

/// Builder method for widgets whose layout is template-driven.
///
/// Templates hold `{token}` placeholders (at least `{prefix}`, `{tag}`,
/// `{suffix}`, `{label}`) expanded with pre-rendered fragments.
pub trait HasTemplate: Sized {
    /// Mutably borrows the template string.
    fn template_mut(&mut self) -> &mut String;

    /// Replaces the render template.
    #[must_use]
    fn template(mut self, value: &str) -> Self {
        *self.template_mut() = String::from(value);
        self
    }
}
