use crate::config::Config;
use crate::error::{Error, Result};
use std::io::ErrorKind;
use tokio::fs;

pub async fn clean(config: &Config) -> Result<()> {
    match fs::remove_dir_all(config.build.out_dir.as_str()).await {
        Err(error) if error.kind() != ErrorKind::NotFound => Err(Error::Io(error)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn removes_out_dir_and_tolerates_missing_one() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir_all(out.join("nested")).unwrap();
        let mut config = Config::default();
        config.build.out_dir = out.display().to_string();

        clean(&config).await.unwrap();
        assert!(!out.exists());

        clean(&config).await.unwrap();
    }
}
