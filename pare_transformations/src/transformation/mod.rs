/// Content reduction utils.
pub mod content;
/// Reduction statistics.
pub mod stats;

#[cfg(test)]
mod tests {
    use crate::transformation::content::{reduce_html, ReduceMode};

    #[test]
    fn reduce_page_markup() {
        use maud::{html, DOCTYPE};

        let page_title = "Reduce Test";
        let page_h1 = "Fun is fun";

        let markup = html! {
            (DOCTYPE)
            meta charset="utf-8";
            title { (page_title) }
            style { "body { color: red; }" }
            script { "console.log(1)" }
            h1 { (page_h1) }
            p { "The article text stays readable." }
            div { span { "footer" } }
        }
        .into_string();

        let (reduced, stats) = reduce_html(&markup, ReduceMode::PreserveContent);

        assert!(reduced.contains(page_h1), "the heading text must survive");
        assert!(reduced.contains("The article text stays readable."));
        assert!(reduced.contains("<span>footer</span>"));
        assert!(!reduced.contains("<script"));
        assert!(!reduced.contains("console.log"));
        assert!(!reduced.contains("color: red"));
        assert!(!reduced.contains(page_title), "title is not a content container");
        assert_eq!(stats.script_tags, 1);
        assert_eq!(stats.style_tags, 1);
        assert_eq!(stats.meta_tags, 1);
        assert!(stats.cleaned_size <= stats.original_size);
        assert!(stats.reduction_percentage > 0.0);

        let (text, stats) = reduce_html(&markup, ReduceMode::StripAllTags);

        assert!(!text.contains('<'));
        assert!(text.contains(page_h1));
        assert!(text.contains(page_title), "strip mode keeps all inter-tag text");
        assert!(stats.removed_tags > 0);
    }
}
