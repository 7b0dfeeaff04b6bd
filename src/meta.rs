use serde::Serialize;

pub const VIEWPORT_CONTENT: &str = "width=device-width, initial-scale=1.0, maximum-scale=5.0, minimum-scale=0.5, user-scalable=yes, viewport-fit=cover";

/// Declarations the shell guarantees in the document head.
pub const PLATFORM_META: [(&str, &str); 6] = [
    ("viewport", VIEWPORT_CONTENT),
    ("mobile-web-app-capable", "yes"),
    ("apple-mobile-web-app-capable", "yes"),
    ("apple-mobile-web-app-status-bar-style", "default"),
    ("format-detection", "telephone=no"),
    ("msapplication-tap-highlight", "no"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

/// Ordered `<meta name content>` entries of a document head.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadMeta {
    tags: Vec<MetaTag>,
}

impl HeadMeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the entry named `name` in place, or appends it.
    pub fn upsert(&mut self, name: &str, content: &str) {
        match self.tags.iter_mut().find(|tag| tag.name == name) {
            Some(tag) => tag.content = content.to_string(),
            None => self.tags.push(MetaTag {
                name: name.to_string(),
                content: content.to_string(),
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.name == name)
            .map(|tag| tag.content.as_str())
    }

    pub fn tags(&self) -> &[MetaTag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn ensure_platform_meta(&mut self) {
        for (name, content) in PLATFORM_META {
            self.upsert(name, content);
        }
    }

    /// Renders the entries as HTML, escaping attribute values.
    pub fn to_html(&self) -> String {
        self.tags
            .iter()
            .map(|tag| {
                format!(
                    "<meta name=\"{}\" content=\"{}\">",
                    escape_attr(&tag.name),
                    escape_attr(&tag.content)
                )
            })
            .collect::<Vec<_>>()
            .join("\n    ")
    }
}

fn escape_attr(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
