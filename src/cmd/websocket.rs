use crate::controller::PageController;
use crate::error::{Error, Result};
use crate::render::PageRenderer;
use crate::source::PostSource;
use crate::view::{Labels, PageView};
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::RwLock;
use tokio_tungstenite::WebSocketStream;
use tungstenite::Message;

/// Outgoing queue per connected page. Each queue is drained by its own task,
/// so a slow page never holds up the others.
pub type Clients = Arc<Mutex<HashMap<String, Outbox>>>;
type Outbox = UnboundedSender<Message>;
type WsWriter = SplitSink<WebSocketStream<TcpStream>, Message>;
type WsReader = SplitStream<WebSocketStream<TcpStream>>;

/// What the live page sends when the user types or clicks.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ClientAction {
    Search { value: String },
    LoadMore,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ServerMessage {
    Render { html: String },
    Reload,
}

impl ClientAction {
    pub fn apply(self, page: &mut PageController) {
        match self {
            ClientAction::Search { value } => page.set_search(value),
            ClientAction::LoadMore => {
                page.load_more();
            }
        }
    }
}

impl ServerMessage {
    fn encode(&self) -> Result<Message> {
        let text = serde_json::to_string(self).map_err(Error::Json)?;
        Ok(Message::Text(text))
    }
}

/// Every connection is one mounted page with its own controller.
pub struct WebSocketServer<S> {
    clients: Clients,
    renderer: Arc<RwLock<PageRenderer>>,
    source: Arc<S>,
    labels: Arc<Labels>,
    step: usize,
}

impl<S> Clone for WebSocketServer<S> {
    fn clone(&self) -> Self {
        Self {
            clients: self.clients.clone(),
            renderer: self.renderer.clone(),
            source: self.source.clone(),
            labels: self.labels.clone(),
            step: self.step,
        }
    }
}

impl<S> WebSocketServer<S>
where
    S: PostSource + Send + Sync + 'static,
{
    pub fn new(source: S, renderer: PageRenderer, labels: Labels, step: usize) -> Self {
        Self {
            clients: Default::default(),
            renderer: Arc::new(RwLock::new(renderer)),
            source: Arc::new(source),
            labels: Arc::new(labels),
            step,
        }
    }

    pub async fn replace_renderer(&self, renderer: PageRenderer) {
        *self.renderer.write().await = renderer;
    }

    pub fn reload_all(&self) -> Result<()> {
        let message = ServerMessage::Reload.encode()?;
        let clients = self.clients();
        log::info!("reloading {} client(s)", clients.len());

        for (addr, outbox) in clients.iter() {
            if outbox.send(message.clone()).is_err() {
                log::debug!("{} missed reload, already disconnected", addr);
            }
        }

        Ok(())
    }

    fn clients(&self) -> MutexGuard<'_, HashMap<String, Outbox>> {
        self.clients.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn render(&self, page: &PageController) -> Result<ServerMessage> {
        let view = PageView::new(page, &self.labels);
        let html = self.renderer.read().await.render_app(&view)?;
        Ok(ServerMessage::Render { html })
    }

    fn send(&self, addr: &str, message: &ServerMessage) -> Result<()> {
        let message = message.encode()?;
        let outbox = self.clients().get(addr).cloned();

        if let Some(outbox) = outbox {
            if outbox.send(message).is_err() {
                log::debug!("{} already disconnected", addr);
            }
        }

        Ok(())
    }
}

pub async fn listen<S>(addr: &str, server: &WebSocketServer<S>) -> Result<()>
where
    S: PostSource + Send + Sync + 'static,
{
    let listener = TcpListener::bind(addr).await.map_err(Error::Io)?;
    log::info!("websocket listening on {}", addr);
    accept_loop(listener, server).await
}

async fn accept_loop<S>(listener: TcpListener, server: &WebSocketServer<S>) -> Result<()>
where
    S: PostSource + Send + Sync + 'static,
{
    while let Ok((stream, _)) = listener.accept().await {
        let server = server.clone();
        tokio::spawn(async move {
            if let Err(error) = accept_connection(stream, server).await {
                log::warn!("websocket connection failed: {}", error);
            }
        });
    }

    Ok(())
}

async fn accept_connection<S>(stream: TcpStream, server: WebSocketServer<S>) -> Result<()>
where
    S: PostSource + Send + Sync + 'static,
{
    let addr = stream.peer_addr().map_err(Error::Io)?.to_string();
    log::debug!("{} connected", addr);

    let ws_stream = tokio_tungstenite::accept_async(stream)
        .await
        .map_err(Error::WebSocket)?;
    let (writer, mut reader) = ws_stream.split();
    let (outbox, inbox) = mpsc::unbounded_channel();
    tokio::spawn(forward(addr.clone(), writer, inbox));
    server.clients().insert(addr.clone(), outbox);

    let result = session(addr.as_str(), &mut reader, &server).await;

    log::debug!("{} disconnected", addr);
    server.clients().remove(&addr);

    result
}

/// Writes queued frames to one socket until its outbox is dropped.
async fn forward(addr: String, mut writer: WsWriter, mut inbox: UnboundedReceiver<Message>) {
    while let Some(message) = inbox.recv().await {
        if let Err(error) = writer.send(message).await {
            log::debug!("{} write failed: {}", addr, error);
            break;
        }
    }
}

async fn session<S>(addr: &str, reader: &mut WsReader, server: &WebSocketServer<S>) -> Result<()>
where
    S: PostSource + Send + Sync + 'static,
{
    let mut page = PageController::new(server.step);
    page.initialize(server.source.as_ref()).await;
    server.send(addr, &server.render(&page).await?)?;

    while let Some(message) = reader.next().await {
        let text = match message.map_err(Error::WebSocket)? {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };

        match serde_json::from_str::<ClientAction>(text.as_str()) {
            Ok(action) => {
                log::debug!("{} {:?}", addr, action);
                action.apply(&mut page);
                server.send(addr, &server.render(&page).await?)?;
            }
            Err(error) => log::warn!("{} sent an unreadable frame: {}", addr, error),
        }
    }

    Ok(())
}
