//! Label parts for form controls.

use ingot_html::{add_class, encode, Attributes, Content, IntoAttrValue};

/// Label state carried by a form control.
#[derive(Debug, Clone, Default)]
pub struct LabelParts {
    pub(crate) content: String,
    pub(crate) attributes: Attributes,
    pub(crate) for_id: Option<String>,
    pub(crate) disabled: bool,
}

impl LabelParts {
    /// Returns whether a label should render at all.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.content.is_empty() && !self.disabled
    }
}

/// Builder methods for widgets that render an associated `<label>`.
pub trait HasLabel: Sized {
    /// Mutably borrows the label part.
    fn label_mut(&mut self) -> &mut LabelParts;

    /// Sets the label content from fragments run through the encoder.
    #[must_use]
    fn label_content<I>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = Content>,
    {
        self.label_mut().content = encode(parts);
        self
    }

    /// Sets the label attributes.
    #[must_use]
    fn label_attributes<K, V, I>(mut self, values: I) -> Self
    where
        K: Into<String>,
        V: IntoAttrValue,
        I: IntoIterator<Item = (K, V)>,
    {
        for (name, value) in values {
            self.label_mut().attributes.set(name, value);
        }
        self
    }

    /// Appends a CSS class to the label.
    #[must_use]
    fn label_class(mut self, value: &str) -> Self {
        add_class(&mut self.label_mut().attributes, value);
        self
    }

    /// Overrides the label's `for` attribute (defaults to the widget id).
    #[must_use]
    fn label_for(mut self, value: &str) -> Self {
        self.label_mut().for_id = Some(String::from(value));
        self
    }

    /// Suppresses the label entirely.
    #[must_use]
    fn not_label(mut self) -> Self {
        self.label_mut().disabled = true;
        self
    }
}
