//! Outer wrapping containers.

use ingot_html::{add_class, tag, Attributes, IntoAttrValue};

/// An optional outer container around a widget's rendered output.
#[derive(Debug, Clone)]
pub struct Container {
    pub(crate) enabled: bool,
    pub(crate) attributes: Attributes,
    pub(crate) tag: String,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            enabled: false,
            attributes: Attributes::new(),
            tag: String::from("div"),
        }
    }
}

impl Container {
    /// Creates a container that is enabled from the start.
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }

    /// Wraps the content when enabled, otherwise passes it through.
    #[must_use]
    pub fn wrap(&self, content: &str) -> String {
        if self.enabled {
            tag::build(&self.tag, content, &self.attributes)
        } else {
            String::from(content)
        }
    }
}

/// Builder methods for widgets with an outer container.
pub trait HasContainer: Sized {
    /// Mutably borrows the container part.
    fn container_mut(&mut self) -> &mut Container;

    /// Enables or disables the container.
    #[must_use]
    fn container(mut self, enabled: bool) -> Self {
        self.container_mut().enabled = enabled;
        self
    }

    /// Sets the container attributes.
    #[must_use]
    fn container_attributes<K, V, I>(mut self, values: I) -> Self
    where
        K: Into<String>,
        V: IntoAttrValue,
        I: IntoIterator<Item = (K, V)>,
    {
        for (name, value) in values {
            self.container_mut().attributes.set(name, value);
        }
        self
    }

    /// Appends a CSS class to the container.
    #[must_use]
    fn container_class(mut self, value: &str) -> Self {
        add_class(&mut self.container_mut().attributes, value);
        self
    }

    /// Sets the container tag name.
    #[must_use]
    fn container_tag(mut self, value: &str) -> Self {
        self.container_mut().tag = String::from(value);
        self
    }
}
