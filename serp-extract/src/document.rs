//! The immutable input shared by every strategy tier.

use scraper::Html;

/// Raw provider markup, its parsed DOM, and the query it answers.
///
/// Parsed exactly once per extraction. Structural tiers query [`dom`];
/// offset-window tiers scan [`markup`] directly, because the provider's
/// layout is only stable in terms of *proximity*, not nesting.
///
/// [`dom`]: RawDocument::dom
/// [`markup`]: RawDocument::markup
pub struct RawDocument<'a> {
    markup: &'a str,
    query: &'a str,
    dom: Html,
}

impl<'a> RawDocument<'a> {
    /// Parse `markup` into a document. Never fails: the HTML5 parser
    /// recovers from any input.
    pub fn parse(markup: &'a str, query: &'a str) -> Self {
        Self {
            markup,
            query,
            dom: Html::parse_document(markup),
        }
    }

    /// The raw markup text.
    pub fn markup(&self) -> &'a str {
        self.markup
    }

    /// The query this page answers.
    pub fn query(&self) -> &'a str {
        self.query
    }

    /// The parsed DOM.
    pub fn dom(&self) -> &Html {
        &self.dom
    }
}

impl std::fmt::Debug for RawDocument<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawDocument")
            .field("bytes", &self.markup.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_markup_and_query() {
        let doc = RawDocument::parse("<p>hi</p>", "greeting");
        assert_eq!(doc.markup(), "<p>hi</p>");
        assert_eq!(doc.query(), "greeting");
    }

    #[test]
    fn parse_tolerates_garbage() {
        let doc = RawDocument::parse("<<<div \u{0}\u{fffd}></a></a>", "q");
        // html5ever always synthesises a root element.
        assert_eq!(doc.dom().root_element().value().name(), "html");
    }

    #[test]
    fn debug_does_not_print_query() {
        let doc = RawDocument::parse("<p>x</p>", "secret query");
        let debug = format!("{doc:?}");
        assert!(!debug.contains("secret"));
    }
}
