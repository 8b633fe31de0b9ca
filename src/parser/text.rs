use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node, Selector};

static TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());

/// Collapse every run of whitespace (including &nbsp;) to a single space.
/// The pages are full of stray line breaks and non-breaking spaces; all
/// downstream matching assumes single-space separation.
pub fn squash_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(c);
            prev_space = false;
        }
    }
    out
}

/// Concatenated, whitespace-squashed text of an element. Not trimmed;
/// callers trim where the page layout calls for it.
pub fn text_of(el: ElementRef) -> String {
    squash_ws(&el.text().collect::<String>())
}

/// Next sibling that is an element (skipping whitespace text nodes).
pub fn next_sibling_element<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// Texts of the significant children of a line: child elements plus
/// non-blank text children, in document order. For a party table row these
/// are the cell texts (name/address/phone columns).
pub fn significant_children(el: ElementRef) -> Vec<String> {
    let mut cells = Vec::new();
    for child in el.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            cells.push(text_of(child_el));
        } else if let Node::Text(t) = child.value() {
            let squashed = squash_ws(t);
            if !squashed.trim().is_empty() {
                cells.push(squashed);
            }
        }
    }
    cells
}

/// Sibling rows of the first table row containing `sentinel`, excluding
/// blank rows and other sentinel rows ("~…"). None when the sentinel row
/// does not exist, i.e. the page lacks that section.
pub fn sentinel_rows<'a>(doc: &'a Html, sentinel: &str) -> Option<Vec<ElementRef<'a>>> {
    let row = doc.select(&TR).find(|tr| text_of(*tr).contains(sentinel))?;
    let parent = row.parent()?;
    let rows = parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| {
            let t = text_of(*el);
            let t = t.trim();
            !t.is_empty() && !t.starts_with('~')
        })
        .collect();
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squash_collapses_runs_and_nbsp() {
        assert_eq!(squash_ws("a \r\n  b\u{a0}c"), "a b c");
    }

    #[test]
    fn squash_keeps_single_edges() {
        assert_eq!(squash_ws("  x  "), " x ");
    }

    #[test]
    fn sentinel_rows_absent() {
        let doc = Html::parse_document("<table><tr><td>plain</td></tr></table>");
        assert!(sentinel_rows(&doc, "~Name").is_none());
    }

    #[test]
    fn sentinel_rows_excludes_headers_and_blanks() {
        let doc = Html::parse_document(
            "<table>\
             <tr><td>~Name</td><td>~Address</td></tr>\
             <tr><td> </td></tr>\
             <tr><td>kept</td></tr>\
             </table>",
        );
        let rows = sentinel_rows(&doc, "~Name").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(text_of(rows[0]), "kept");
    }

    #[test]
    fn significant_children_skip_blank_text() {
        let doc = Html::parse_document("<table><tr><td>a</td> <td>b</td></tr></table>");
        let sel = Selector::parse("tr").unwrap();
        let tr = doc.select(&sel).next().unwrap();
        assert_eq!(significant_children(tr), vec!["a", "b"]);
    }
}
