use crate::controller::PAGE_STEP;
use crate::error::{Error, Result};
use crate::view::Labels;
use serde::Deserialize;
use std::time::Duration;
use std::{fs, path::Path, path::PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub page: PageConfig,
    pub build: BuildConfig,
    pub serve: ServeConfig,
    pub http: Option<HttpConfig>,
    pub watch: WatchConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    pub timeout_secs: Option<u64>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub page_size: usize,
    pub placeholder: String,
    pub load_more_label: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub out_dir: String,
    pub partials_pattern: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    pub websocket_addr: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct HttpConfig {
    pub command: String,
    pub args: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    pub paths: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: "https://jsonplaceholder.typicode.com/posts".into(),
            timeout_secs: None,
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_STEP,
            placeholder: "Search posts".into(),
            load_more_label: "Load more posts".into(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: "out".into(),
            partials_pattern: None,
        }
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            websocket_addr: "localhost:8081".into(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(text.as_str()).map_err(Error::Toml)
    }

    /// Like `load`, but a missing file means every default.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("{:?} not found, using defaults", path);
            Ok(Config::default())
        }
    }

    pub fn output_path<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        Path::new(self.build.out_dir.as_str()).join(path)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.source.timeout_secs.map(Duration::from_secs)
    }

    pub fn labels(&self) -> Labels {
        Labels {
            placeholder: self.page.placeholder.clone(),
            load_more: self.page.load_more_label.clone(),
        }
    }

    pub fn live_url(&self) -> String {
        format!("ws://{}", self.serve.websocket_addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(
            config.source.url,
            "https://jsonplaceholder.typicode.com/posts"
        );
        assert_eq!(config.page.page_size, 25);
        assert_eq!(config.build.out_dir, "out");
        assert!(config.http.is_none());
        assert!(config.watch.paths.is_empty());
        assert!(config.timeout().is_none());
        assert_eq!(config.live_url(), "ws://localhost:8081");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let text = r#"
            [source]
            timeout_secs = 3

            [page]
            placeholder = "Find a post"

            [http]
            command = "python3"
            args = ["-m", "http.server"]

            [watch]
            paths = ["templates"]
        "#;

        let config: Config = toml::from_str(text).unwrap();

        assert_eq!(config.timeout(), Some(Duration::from_secs(3)));
        assert_eq!(
            config.source.url,
            "https://jsonplaceholder.typicode.com/posts"
        );
        let labels = config.labels();
        assert_eq!(labels.placeholder, "Find a post");
        assert_eq!(labels.load_more, "Load more posts");
        let http = config.http.unwrap();
        assert_eq!(http.command, "python3");
        assert_eq!(http.args.unwrap().len(), 2);
        assert_eq!(config.watch.paths, vec!["templates".to_string()]);
    }

    #[test]
    fn load_reads_file_and_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[build]\nout_dir = \"public\"\n").unwrap();

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.build.out_dir, "public");
        assert_eq!(
            config.output_path("index.html"),
            Path::new("public").join("index.html")
        );

        let missing = Config::load_or_default(dir.path().join("nope.toml")).unwrap();
        assert_eq!(missing.build.out_dir, "out");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[page]\npage_size = \"many\"\n").unwrap();

        assert!(matches!(Config::load(&path), Err(Error::Toml(_))));
    }
}
