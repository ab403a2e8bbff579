use super::Format;
use crate::error::{Error, Result};
use crate::view::PageView;
use glob::glob;
use handlebars::Handlebars;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Serialize)]
struct Document<'a> {
    #[serde(flatten)]
    view: &'a PageView<'a>,
    live_url: Option<&'a str>,
}

pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new(format: Format) -> Result<Self> {
        let mut registry = Handlebars::new();
        if !format.escapes() {
            registry.register_escape_fn(handlebars::no_escape);
        }

        for (name, content) in format.builtins() {
            registry
                .register_template_string(name, content)
                .map_err(Error::template)?;
        }

        Ok(Self { registry })
    }

    /// Registers every template matching `pattern` under its file stem,
    /// replacing a built-in of the same name.
    pub fn add_partials(&mut self, pattern: &str) -> Result<()> {
        let partials = glob(pattern).map_err(Error::Pattern)?;

        for partial in partials {
            let partial = partial.map_err(Error::Glob)?;
            let name = match partial.file_stem().and_then(|stem| stem.to_str()) {
                Some(name) => name.to_owned(),
                None => {
                    log::warn!("skipping partial with unusable name {:?}", partial);
                    continue;
                }
            };
            let content = fs::read_to_string(&partial).map_err(Error::Io)?;

            log::info!("adding partial {}", name);
            self.registry
                .register_partial(name.as_str(), content)
                .map_err(Error::template)?;
        }

        Ok(())
    }

    /// Renders the page body only.
    pub fn render_app(&self, view: &PageView) -> Result<String> {
        self.registry.render("app", view).map_err(Error::Render)
    }

    pub fn render_to_write<W: Write>(
        &self,
        view: &PageView,
        live_url: Option<&str>,
        writer: W,
    ) -> Result<()> {
        let document = Document { view, live_url };
        self.registry
            .render_to_write(self.page_template(), &document, writer)
            .map_err(Error::Render)
    }

    pub fn write_page<P: AsRef<Path>>(
        &self,
        view: &PageView,
        live_url: Option<&str>,
        path: P,
    ) -> Result<()> {
        let path = path.as_ref();
        log::info!("render -> {:?}", path);

        let file = File::create(path).map_err(Error::Io)?;
        let mut file = BufWriter::new(file);
        self.render_to_write(view, live_url, &mut file)?;
        file.flush().map_err(Error::Io)
    }

    fn page_template(&self) -> &'static str {
        if self.registry.has_template("index") {
            "index"
        } else {
            "app"
        }
    }
}
