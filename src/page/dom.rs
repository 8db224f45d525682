//! Minimal page model.
//!
//! `PageRoot` lists the handful of element operations the page behaviours need,
//! so they can run against any tree that provides them. `Document` is the
//! in-memory implementation, serialized as a flat list of elements.
use crate::error::Result;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

static ENTITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").expect("valid entity regex")
});

/// Handle to an element of a `PageRoot`.
pub type ElementRef = usize;

pub trait PageRoot {
    /// Elements carrying `class`, in document order.
    fn query_class(&self, class: &str) -> Vec<ElementRef>;

    fn element_by_id(&self, id: &str) -> Option<ElementRef>;

    /// Text of the element. When it carries markup, the text is the markup
    /// with tags removed and character references decoded.
    fn text_content(&self, element: ElementRef) -> String;

    /// Replaces the element's markup; text content follows the new markup.
    fn set_inner_html(&mut self, element: ElementRef, html: String);

    fn set_text_content(&mut self, element: ElementRef, text: String);

    /// Inline display value, `None` when never set.
    fn display(&self, element: ElementRef) -> Option<String>;

    fn set_display(&mut self, element: ElementRef, display: &str);

    fn add_class(&mut self, element: ElementRef, class: &str);

    fn remove_class(&mut self, element: ElementRef, class: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

#[cfg(test)]
impl Element {
    pub fn with_class(class: &str, text: &str) -> Self {
        Self {
            classes: vec![class.to_string()],
            text: text.to_string(),
            ..Self::default()
        }
    }

    pub fn with_id(id: &str, classes: &[&str], text: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            text: text.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Document {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
impl Document {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Appends an element, returning its handle.
    pub fn push(&mut self, element: Element) -> ElementRef {
        self.elements.push(element);
        self.elements.len() - 1
    }

    pub fn has_class(&self, element: ElementRef, class: &str) -> bool {
        self.elements
            .get(element)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }
}

impl PageRoot for Document {
    fn query_class(&self, class: &str) -> Vec<ElementRef> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.classes.iter().any(|c| c == class))
            .map(|(i, _)| i)
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<ElementRef> {
        self.elements
            .iter()
            .position(|el| el.id.as_deref() == Some(id))
    }

    fn text_content(&self, element: ElementRef) -> String {
        self.elements
            .get(element)
            .map(|el| match &el.html {
                Some(html) => markup_text(html),
                None => el.text.clone(),
            })
            .unwrap_or_default()
    }

    fn set_inner_html(&mut self, element: ElementRef, html: String) {
        if let Some(el) = self.elements.get_mut(element) {
            el.text = markup_text(&html);
            el.html = Some(html);
        }
    }

    fn set_text_content(&mut self, element: ElementRef, text: String) {
        if let Some(el) = self.elements.get_mut(element) {
            el.text = text;
            el.html = None;
        }
    }

    fn display(&self, element: ElementRef) -> Option<String> {
        self.elements.get(element).and_then(|el| el.display.clone())
    }

    fn set_display(&mut self, element: ElementRef, display: &str) {
        if let Some(el) = self.elements.get_mut(element) {
            el.display = Some(display.to_string());
        }
    }

    fn add_class(&mut self, element: ElementRef, class: &str) {
        if let Some(el) = self.elements.get_mut(element) {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, element: ElementRef, class: &str) {
        if let Some(el) = self.elements.get_mut(element) {
            el.classes.retain(|c| c != class);
        }
    }
}

/// Escapes text for insertion into markup.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn markup_text(html: &str) -> String {
    unescape_text(&TAG_REGEX.replace_all(html, ""))
}

// Decodes numeric references and the common named ones in a single pass, so
// `&amp;lt;` becomes `&lt;`. Unknown names are left as written.
fn unescape_text(s: &str) -> String {
    ENTITY_REGEX
        .replace_all(s, |caps: &Captures| {
            decode_entity(&caps[1])
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    if let Some(dec) = name.strip_prefix('#') {
        return dec.parse::<u32>().ok().and_then(char::from_u32);
    }
    match name {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "amp" => Some('&'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    }
}
