use std::collections::HashSet;

/// Clean question or answer markup for `dangerous_inner_html`.
///
/// Trivia text arrives HTML-escaped (`&quot;`, `&#039;`) with the odd inline
/// tag; rendering it as markup decodes the entities, so anything beyond simple
/// inline formatting is stripped first.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = ["b", "i", "em", "strong", "u", "sub", "sup", "br", "code"]
        .into_iter()
        .collect();

    ammonia::Builder::new()
        .tags(tags)
        .generic_attributes(HashSet::new())
        .link_rel(None)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::sanitize_html;

    #[test]
    fn entities_survive_for_the_renderer_to_decode() {
        let html = sanitize_html("Who wrote &quot;Dune&quot;?");
        assert!(!html.contains('<'));
        assert!(html.contains("Dune"));
    }

    #[test]
    fn scripts_and_attributes_are_removed() {
        let html = sanitize_html(r#"<script>alert(1)</script><b onclick="x()">Bold</b>"#);
        assert!(!html.contains("script"));
        assert!(!html.contains("onclick"));
        assert!(html.contains("<b>Bold</b>"));
    }

    #[test]
    fn block_markup_is_flattened() {
        let html = sanitize_html("<div><p>Plain</p></div>");
        assert_eq!(html, "Plain");
    }
}
