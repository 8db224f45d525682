use crate::config::PageConfig;
use crate::page::dom::{PageRoot, escape_html};
use crate::taxon::{OutputMode, format_name};
use log::debug;

/// Rewrites every scientific-name element as italicized markup.
///
/// Runs once over the elements present now; elements added later are left as
/// they are. Returns the number of elements rewritten.
pub fn format_scientific_names<R: PageRoot>(root: &mut R, config: &PageConfig) -> usize {
    let elements = root.query_class(&config.scientific_name_class);
    for &element in &elements {
        let raw = root.text_content(element);
        let html = format_name(&escape_html(raw.trim()), OutputMode::Html);
        root.set_inner_html(element, html);
    }
    debug!(
        "Formatted {} element(s) with class '{}'",
        elements.len(),
        config.scientific_name_class
    );
    elements.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::dom::{Document, Element};

    fn name_page(names: &[&str]) -> Document {
        Document::new(
            names
                .iter()
                .map(|n| Element::with_class("scientific_name", n))
                .collect(),
        )
    }

    #[test]
    fn formats_every_tagged_element() {
        let mut doc = name_page(&["  Rosa chinensis ", "Bambusa multiplex", "蔷薇", "Rosaceae"]);
        doc.push(Element::with_class("vernacular_name", "Rosa canina"));

        let count = format_scientific_names(&mut doc, &PageConfig::default());

        assert_eq!(count, 4);
        assert_eq!(
            doc.elements[0].html.as_deref(),
            Some("<i>Rosa</i> <i>chinensis</i>")
        );
        assert_eq!(
            doc.elements[1].html.as_deref(),
            Some("<i>Bambusa</i> <i>multiplex</i>")
        );
        assert_eq!(doc.elements[2].html.as_deref(), Some("蔷薇"));
        assert_eq!(doc.elements[3].html.as_deref(), Some("Rosaceae"));
        assert!(doc.elements[4].html.is_none());
    }

    #[test]
    fn rank_markers_and_text_content() {
        let mut doc = name_page(&["Rosa chinensis var. spontanea"]);
        format_scientific_names(&mut doc, &PageConfig::default());
        assert_eq!(
            doc.elements[0].html.as_deref(),
            Some("<i>Rosa</i> <i>chinensis</i> var. <i>spontanea</i>")
        );
        assert_eq!(doc.text_content(0), "Rosa chinensis var. spontanea");
    }

    #[test]
    fn markup_in_text_is_escaped() {
        let mut doc = name_page(&["Rosa <b>x</b>"]);
        format_scientific_names(&mut doc, &PageConfig::default());
        assert_eq!(
            doc.elements[0].html.as_deref(),
            Some("<i>Rosa</i> <i>&lt;b&gt;x&lt;/b&gt;</i>")
        );
        assert_eq!(doc.text_content(0), "Rosa <b>x</b>");
    }

    #[test]
    fn markup_only_name_is_read_from_its_markup() {
        let mut doc: Document = serde_json::from_str(
            r#"{"elements": [{"classes": ["scientific_name"], "html": "Rosa canina"}]}"#,
        )
        .unwrap();
        assert_eq!(format_scientific_names(&mut doc, &PageConfig::default()), 1);
        assert_eq!(
            doc.elements[0].html.as_deref(),
            Some("<i>Rosa</i> <i>canina</i>")
        );
        assert_eq!(doc.text_content(0), "Rosa canina");
    }

    #[test]
    fn blank_name_becomes_empty_markup() {
        let mut doc = name_page(&["   "]);
        format_scientific_names(&mut doc, &PageConfig::default());
        assert_eq!(doc.elements[0].html.as_deref(), Some(""));
    }

    #[test]
    fn custom_class_and_no_matches() {
        let config = PageConfig {
            scientific_name_class: "taxon".to_string(),
            ..PageConfig::default()
        };
        let mut doc = name_page(&["Rosa canina"]);
        assert_eq!(format_scientific_names(&mut doc, &config), 0);
        assert!(doc.elements[0].html.is_none());
    }
}
