use super::{load_page, renderer};
use crate::args::ViewArgs;
use crate::config::Config;
use crate::error::Result;
use crate::render::Format;
use crate::view::PageView;
use std::io;

pub async fn show(config: &Config, view: &ViewArgs) -> Result<()> {
    let page = load_page(config, view).await?;
    let renderer = renderer(config, Format::Text)?;
    let labels = config.labels();

    let stdout = io::stdout();
    renderer.render_to_write(&PageView::new(&page, &labels), None, stdout.lock())
}
