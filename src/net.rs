//! Network reachability probe and installer download.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{Result, VenvmanError};

/// Well-known endpoint used purely as a reachability probe.
const PROBE_URL: &str = "https://www.google.com";

/// Probe timeout. This is the only timed-out network operation; package
/// subprocesses run unbounded.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Fixed chunk size for streaming downloads to disk.
const DOWNLOAD_CHUNK: usize = 1024;

/// Check whether the network is reachable.
///
/// Any failure (DNS, connect, timeout, TLS) counts as offline; the caller
/// decides whether that is fatal.
pub fn check_online() -> bool {
    let client = match reqwest::blocking::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()
    {
        Ok(client) => client,
        Err(_) => return false,
    };

    client.get(PROBE_URL).send().is_ok()
}

/// Download `url` to `dest`, streaming in fixed-size chunks.
///
/// Shows a byte progress bar when the server reports a content length, a
/// spinner otherwise.
pub fn download(url: &str, dest: &Path) -> Result<()> {
    let client = reqwest::blocking::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .build()?;

    let mut response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| VenvmanError::Download {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    let bar = download_bar(response.content_length());

    let mut file = File::create(dest)?;
    let mut buf = [0u8; DOWNLOAD_CHUNK];
    loop {
        let n = response.read(&mut buf).map_err(|e| VenvmanError::Download {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        if n == 0 {
            break;
        }
        file.write_all(&buf[..n])?;
        bar.inc(n as u64);
    }
    file.flush()?;
    bar.finish_and_clear();

    Ok(())
}

fn download_bar(total: Option<u64>) -> ProgressBar {
    match total {
        Some(len) => {
            let bar = ProgressBar::new(len);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{bar:30.magenta} {bytes}/{total_bytes} ({eta})")
                    .unwrap(),
            );
            bar
        }
        None => {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::default_spinner()
                    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                    .template("{spinner:.magenta} {bytes}")
                    .unwrap(),
            );
            bar.enable_steady_tick(Duration::from_millis(80));
            bar
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn download_writes_body_to_dest() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/installer.exe");
            then.status(200).body("fake installer bytes");
        });

        let temp = tempfile::TempDir::new().unwrap();
        let dest = temp.path().join("installer.exe");
        download(&server.url("/installer.exe"), &dest).unwrap();

        assert_eq!(
            std::fs::read_to_string(&dest).unwrap(),
            "fake installer bytes"
        );
    }

    #[test]
    fn download_large_body_in_chunks() {
        let body = "x".repeat(DOWNLOAD_CHUNK * 3 + 17);
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/big");
            then.status(200).body(&body);
        });

        let temp = tempfile::TempDir::new().unwrap();
        let dest = temp.path().join("big.bin");
        download(&server.url("/big"), &dest).unwrap();

        assert_eq!(std::fs::read(&dest).unwrap().len(), body.len());
    }

    #[test]
    fn download_http_error_maps_to_download_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });

        let temp = tempfile::TempDir::new().unwrap();
        let dest = temp.path().join("missing.bin");
        let err = download(&server.url("/missing"), &dest).unwrap_err();

        assert!(matches!(err, VenvmanError::Download { .. }));
        assert!(!dest.exists());
    }

    #[test]
    fn download_unreachable_host_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        let dest = temp.path().join("never.bin");
        // Reserved TEST-NET-1 address, nothing listens there.
        let err = download("http://192.0.2.1:9/never", &dest).unwrap_err();

        assert!(matches!(err, VenvmanError::Download { .. }));
    }
}
