use super::{load_page, renderer};
use crate::args::ViewArgs;
use crate::config::Config;
use crate::controller::PageController;
use crate::error::{Error, Result};
use crate::render::{Format, PageRenderer};
use crate::view::PageView;
use tokio::fs;

pub async fn build(config: &Config, view: &ViewArgs) -> Result<()> {
    let page = load_page(config, view).await?;
    let renderer = renderer(config, Format::Html)?;
    write_index(config, &renderer, &page, None).await?;

    log::info!("Build complete");

    Ok(())
}

pub async fn write_index(
    config: &Config,
    renderer: &PageRenderer,
    page: &PageController,
    live_url: Option<&str>,
) -> Result<()> {
    fs::create_dir_all(config.build.out_dir.as_str())
        .await
        .map_err(Error::Io)?;

    let labels = config.labels();
    let view = PageView::new(page, &labels);
    renderer.write_page(&view, live_url, config.output_path("index.html"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::sample_posts;

    #[tokio::test]
    async fn writes_index_into_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.build.out_dir = dir.path().join("site").display().to_string();
        let mut page = PageController::default();
        page.load(sample_posts(3));
        let renderer = PageRenderer::new(Format::Html).unwrap();

        write_index(&config, &renderer, &page, Some("ws://localhost:9000"))
            .await
            .unwrap();

        let html = std::fs::read_to_string(config.output_path("index.html")).unwrap();
        assert!(html.contains(r#"<li class="post-3">"#));
        assert!(html.contains("ws://localhost:9000"));
    }
}
