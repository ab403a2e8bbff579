use crate::post::Post;
use crate::source::PostSource;

pub const PAGE_STEP: usize = 25;

/// Owns the page state: every fetched post, how many of them are paged in,
/// and the current search string.
#[derive(Clone, Debug)]
pub struct PageController {
    all_posts: Vec<Post>,
    visible_len: usize,
    page_size: usize,
    step: usize,
    search_value: String,
    initialized: bool,
}

impl Default for PageController {
    fn default() -> Self {
        Self::new(PAGE_STEP)
    }
}

impl PageController {
    pub fn new(step: usize) -> Self {
        let step = step.max(1);
        Self {
            all_posts: Vec::new(),
            visible_len: 0,
            page_size: step,
            step,
            search_value: String::new(),
            initialized: false,
        }
    }

    /// Fetches the posts once. A failed fetch leaves the page empty.
    pub async fn initialize<S: PostSource>(&mut self, source: &S) {
        if self.initialized {
            log::debug!("page already initialized");
            return;
        }
        self.initialized = true;

        match source.fetch_posts().await {
            Ok(posts) => self.load(posts),
            Err(error) => log::warn!("unable to fetch posts: {}", error),
        }
    }

    pub fn load(&mut self, posts: Vec<Post>) {
        log::debug!("loaded {} posts", posts.len());
        self.initialized = true;
        self.all_posts = posts;
        self.visible_len = self.page_size.min(self.all_posts.len());
    }

    /// Grows the page by one step. Returns false when everything is already
    /// shown.
    pub fn load_more(&mut self) -> bool {
        if self.load_more_disabled() {
            return false;
        }

        self.page_size += self.step;
        self.visible_len = self.page_size.min(self.all_posts.len());
        true
    }

    pub fn set_search(&mut self, value: impl Into<String>) {
        self.search_value = value.into();
    }

    pub fn search_value(&self) -> &str {
        self.search_value.as_str()
    }

    pub fn is_searching(&self) -> bool {
        !self.search_value.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn all_posts(&self) -> &[Post] {
        self.all_posts.as_slice()
    }

    pub fn visible_posts(&self) -> &[Post] {
        &self.all_posts[..self.visible_len]
    }

    pub fn load_more_disabled(&self) -> bool {
        self.page_size >= self.all_posts.len()
    }

    pub fn display_set(&self) -> Vec<&Post> {
        if self.is_searching() {
            self.all_posts
                .iter()
                .filter(|post| post.title_matches(self.search_value.as_str()))
                .collect()
        } else {
            self.visible_posts().iter().collect()
        }
    }
}
