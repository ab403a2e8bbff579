use super::build::write_index;
use super::clean;
use super::http::http_listen;
use super::websocket::{self, WebSocketServer};
use super::{post_source, renderer};
use crate::config::Config;
use crate::controller::PageController;
use crate::error::{Error, Result};
use crate::render::Format;
use crate::source::PostSource;
use notify_debouncer_mini::{new_debouncer, DebounceEventResult};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub async fn serve(config: &Config) -> Result<()> {
    log::info!("booting up");

    clean(config).await?;

    let source = post_source(config)?;
    let live_url = config.live_url();
    let mut page = PageController::new(config.page.page_size);
    page.initialize(&source).await;

    let renderer = renderer(config, Format::Html)?;
    write_index(config, &renderer, &page, Some(live_url.as_str())).await?;

    let server = WebSocketServer::new(source, renderer, config.labels(), config.page.page_size);

    let (changes, receiver) = mpsc::unbounded_channel();
    let timeout = Duration::from_millis(50);
    let tick_rate = None;

    let mut debouncer = new_debouncer(
        timeout,
        tick_rate,
        move |res: DebounceEventResult| match res {
            Ok(events) => {
                if let Some(event) = events.first() {
                    if changes.send(event.path.clone()).is_err() {
                        log::debug!("change dropped, server is shutting down");
                    }
                }
            }
            Err(errors) => {
                for error in errors {
                    log::error!("{}", error);
                }
            }
        },
    )
    .map_err(Error::Watch)?;

    for path in &config.watch.paths {
        debouncer
            .watcher()
            .watch(Path::new(path), notify::RecursiveMode::Recursive)
            .map_err(Error::Watch)?;
    }
    if !config.watch.paths.is_empty() {
        log::info!("Watching for changes");
    }

    let ws = websocket::listen(config.serve.websocket_addr.as_str(), &server);
    let http = async {
        match &config.http {
            Some(http) => {
                let args = http.args.as_deref().unwrap_or_default();
                http_listen(http.command.as_str(), args).await
            }
            None => {
                log::info!("open {:?} in a browser", config.output_path("index.html"));
                Ok(())
            }
        }
    };
    let reload = reload_on_change(receiver, &server, config, &page);

    tokio::try_join!(ws, http, reload)?;
    Ok(())
}

async fn reload_on_change<S>(
    mut changes: UnboundedReceiver<PathBuf>,
    server: &WebSocketServer<S>,
    config: &Config,
    page: &PageController,
) -> Result<()>
where
    S: PostSource + Send + Sync + 'static,
{
    let live_url = config.live_url();

    while let Some(path) = changes.recv().await {
        log::info!("change: {:?}", path);

        let renderer = match renderer(config, Format::Html) {
            Ok(renderer) => renderer,
            Err(error) => {
                log::error!("{}", error);
                continue;
            }
        };

        if let Err(error) = write_index(config, &renderer, page, Some(live_url.as_str())).await {
            log::error!("{}", error);
            continue;
        }

        server.replace_renderer(renderer).await;
        server.reload_all()?;
    }

    Ok(())
}
