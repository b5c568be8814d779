use std::time::Duration;

use rand::Rng;

use crate::{
    client::PortalClient,
    config::{AgentConfig, Mode},
    error::Result,
    license, log, lookup,
};

/// Runs `mode` once, or forever with `interval + jitter` between runs.
///
/// In the loop failures are logged and the next run happens as scheduled. With
/// `--once` the failure is returned.
pub async fn run(mode: Mode, config: &AgentConfig) -> Result<()> {
    let client = PortalClient::new(config.base_url())?;

    loop {
        match run_once(mode, config, &client).await {
            Ok(()) => {}
            Err(e) if config.once => return Err(e),
            Err(e) => tracing::error!("{:?} run failed: {}", mode, e),
        }

        if config.once {
            return Ok(());
        }

        let delay = next_delay(config.interval_secs, config.jitter_secs);
        tracing::debug!("Next run in {} seconds", delay.as_secs());
        tokio::time::sleep(delay).await;
    }
}

pub async fn run_once(mode: Mode, config: &AgentConfig, client: &PortalClient) -> Result<()> {
    let dir = lookup::find_script_dir(config)?;
    let key_path = dir.join(&config.key_file);

    match mode {
        Mode::Heartbeat => {
            let key = license::read_key(&key_path)?;
            let entry = log::read_last_entry(&dir.join(&config.log_file))?;

            client.send_heartbeat(&key, &entry).await?;
            tracing::info!("Sent heartbeat for license {}", key);
        }
        Mode::License => {
            license::exchange_license(client, &key_path).await?;
        }
    }

    Ok(())
}

/// Interval plus a random delay of up to `jitter_secs` seconds.
pub fn next_delay(interval_secs: u64, jitter_secs: u64) -> Duration {
    let jitter = if jitter_secs == 0 {
        0
    } else {
        rand::rng().random_range(0..=jitter_secs)
    };

    Duration::from_secs(interval_secs + jitter)
}
