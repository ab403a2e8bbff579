use crate::controller::PageController;
use crate::post::Post;
use serde::Serialize;

/// Fixed texts shown by the page controls.
#[derive(Clone, Debug)]
pub struct Labels {
    pub placeholder: String,
    pub load_more: String,
}

#[derive(Debug, Serialize)]
pub struct SearchField<'a> {
    pub value: &'a str,
    pub placeholder: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SearchStatus<'a> {
    pub query: &'a str,
    pub count: usize,
    pub empty: bool,
}

#[derive(Debug, Serialize)]
pub struct LoadMoreButton<'a> {
    pub content: &'a str,
    pub disabled: bool,
}

/// Everything the templates need for one render.
#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    pub search: SearchField<'a>,
    pub status: Option<SearchStatus<'a>>,
    pub posts: Vec<&'a Post>,
    pub load_more: Option<LoadMoreButton<'a>>,
}

impl<'a> PageView<'a> {
    pub fn new(page: &'a PageController, labels: &'a Labels) -> Self {
        let posts = page.display_set();
        let search = SearchField {
            value: page.search_value(),
            placeholder: labels.placeholder.as_str(),
        };

        if page.is_searching() {
            let status = SearchStatus {
                query: page.search_value(),
                count: posts.len(),
                empty: posts.is_empty(),
            };

            Self {
                search,
                status: Some(status),
                posts,
                load_more: None,
            }
        } else {
            let load_more = LoadMoreButton {
                content: labels.load_more.as_str(),
                disabled: page.load_more_disabled(),
            };

            Self {
                search,
                status: None,
                posts,
                load_more: Some(load_more),
            }
        }
    }
}

#[cfg(test)]
pub fn test_labels() -> Labels {
    Labels {
        placeholder: "Search posts".into(),
        load_more: "Load more posts".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::sample_posts;

    #[test]
    fn paginated_view_shows_button() {
        let mut page = PageController::default();
        page.load(sample_posts(30));
        let labels = test_labels();

        let view = PageView::new(&page, &labels);

        assert!(view.status.is_none());
        assert_eq!(view.posts.len(), 25);
        let button = view.load_more.unwrap();
        assert_eq!(button.content, "Load more posts");
        assert!(!button.disabled);
    }

    #[test]
    fn button_disabled_when_everything_is_shown() {
        let mut page = PageController::default();
        page.load(sample_posts(30));
        page.load_more();
        let labels = test_labels();

        let view = PageView::new(&page, &labels);

        assert!(view.load_more.unwrap().disabled);
    }

    #[test]
    fn searching_hides_button_and_reports_count() {
        let mut page = PageController::default();
        page.load(sample_posts(30));
        page.set_search("NUMBER 2");
        let labels = test_labels();

        let view = PageView::new(&page, &labels);

        assert!(view.load_more.is_none());
        let status = view.status.unwrap();
        assert_eq!(status.query, "NUMBER 2");
        assert_eq!(status.count, 11);
        assert!(!status.empty);
        assert_eq!(view.search.value, "NUMBER 2");
    }

    #[test]
    fn search_without_results_is_flagged_empty() {
        let mut page = PageController::default();
        page.load(sample_posts(5));
        page.set_search("nothing like this");
        let labels = test_labels();

        let view = PageView::new(&page, &labels);

        let status = view.status.unwrap();
        assert_eq!(status.count, 0);
        assert!(status.empty);
        assert!(view.posts.is_empty());
    }
}
