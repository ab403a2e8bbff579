/// Output flavour of a template set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Html,
    Text,
}

const HTML: &[(&str, &str)] = &[
    ("app", include_str!("../../templates/html/app.hbs")),
    ("button", include_str!("../../templates/html/button.hbs")),
    ("index", include_str!("../../templates/html/index.hbs")),
    ("post_card", include_str!("../../templates/html/post_card.hbs")),
    ("posts", include_str!("../../templates/html/posts.hbs")),
    ("search", include_str!("../../templates/html/search.hbs")),
];

const TEXT: &[(&str, &str)] = &[
    ("app", include_str!("../../templates/text/app.hbs")),
    ("button", include_str!("../../templates/text/button.hbs")),
    ("post_card", include_str!("../../templates/text/post_card.hbs")),
    ("posts", include_str!("../../templates/text/posts.hbs")),
    ("search", include_str!("../../templates/text/search.hbs")),
];

impl Format {
    pub fn builtins(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Format::Html => HTML,
            Format::Text => TEXT,
        }
    }

    pub fn escapes(self) -> bool {
        matches!(self, Format::Html)
    }
}
