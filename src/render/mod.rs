mod handlebars;
mod templates;

pub use self::handlebars::PageRenderer;
pub use templates::Format;
