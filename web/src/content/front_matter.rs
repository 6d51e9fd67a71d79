//! Front matter splitting
//!
//! An issue body may start with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Hello
//! slug: my-slug
//! ---
//! Body text
//! ```

use serde_yaml::{Mapping, Value};

const DELIMITER: &str = "---";

/// A markdown document split into metadata and content
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    data: Mapping,
    content: String,
}

impl FrontMatter {
    /// Split `src` into front matter and content.
    ///
    /// Without a well-formed leading block (opening and closing delimiter,
    /// YAML mapping inside) the whole input is content and the metadata is empty.
    pub fn parse(src: &str) -> Self {
        let Some((yaml, content)) = split_block(src) else {
            return Self::without_metadata(src);
        };

        match serde_yaml::from_str::<Value>(yaml) {
            Ok(Value::Mapping(data)) => Self {
                data,
                content: content.to_string(),
            },
            Ok(Value::Null) => Self {
                data: Mapping::new(),
                content: content.to_string(),
            },
            Ok(_) => {
                tracing::warn!("Front matter is not a key/value mapping, ignoring it");
                Self::without_metadata(src)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Invalid front matter, ignoring it");
                Self::without_metadata(src)
            }
        }
    }

    fn without_metadata(src: &str) -> Self {
        Self {
            data: Mapping::new(),
            content: src.to_string(),
        }
    }

    /// Scalar metadata value as a string. Null, sequence and mapping values
    /// count as absent.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.data.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

/// Locate the fenced block, returning (yaml, content after the closing line)
fn split_block(src: &str) -> Option<(&str, &str)> {
    let mut lines = src.split_inclusive('\n');
    let opening = lines.next()?;
    if opening.trim_end() != DELIMITER {
        return None;
    }

    let yaml_start = opening.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            return Some((&src[yaml_start..offset], &src[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}
