mod build;
mod clean;
mod http;
mod serve;
mod show;
mod websocket;

pub use self::build::build;
pub use self::clean::clean;
pub use self::serve::serve;
pub use self::show::show;

use crate::args::ViewArgs;
use crate::config::Config;
use crate::controller::PageController;
use crate::error::Result;
use crate::render::{Format, PageRenderer};
use crate::source::HttpPostSource;

pub fn post_source(config: &Config) -> Result<HttpPostSource> {
    HttpPostSource::new(config.source.url.as_str(), config.timeout())
}

/// Fetches the posts and replays the interactions asked for on the command
/// line.
pub async fn load_page(config: &Config, view: &ViewArgs) -> Result<PageController> {
    let source = post_source(config)?;
    log::info!("fetching posts from {}", source.url());

    let mut page = PageController::new(config.page.page_size);
    page.initialize(&source).await;
    replay(&mut page, view);
    Ok(page)
}

fn replay(page: &mut PageController, view: &ViewArgs) {
    for _ in 0..view.more {
        if !page.load_more() {
            break;
        }
    }
    page.set_search(view.search.as_str());

    log::debug!(
        "{} of {} posts paged in, page size {}",
        page.visible_posts().len(),
        page.all_posts().len(),
        page.page_size()
    );
}

/// Built-in templates, with user partials layered on top of the HTML set.
pub fn renderer(config: &Config, format: Format) -> Result<PageRenderer> {
    let mut renderer = PageRenderer::new(format)?;
    if let (Format::Html, Some(pattern)) = (format, config.build.partials_pattern.as_ref()) {
        renderer.add_partials(pattern.as_str())?;
    }
    Ok(renderer)
}
