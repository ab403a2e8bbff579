use crate::error::{Error, Result};
use tokio::process::Command;

pub async fn http_listen(cmd: &str, args: &[String]) -> Result<()> {
    log::info!("starting http server: {} {}", cmd, args.join(" "));

    let status = Command::new(cmd)
        .args(args)
        .kill_on_drop(true)
        .status()
        .await
        .map_err(Error::Io)?;

    log::info!("http server exited with {}", status);
    Ok(())
}
