//! Shared test helpers for integration tests.
//!
//! [`MockApi`] wraps a `wiremock` server on its own runtime so the blocking
//! lyrics sources (and the CLI binary) can be pointed at it from plain
//! `#[test]` functions. On Unix, [`fake_tools`] writes shell scripts standing
//! in for `ffprobe` and `ffmpeg`.

#![allow(dead_code)]

use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// A mock HTTP API that outlives any single request.
///
/// The blocking `reqwest` client must not run inside a tokio runtime, so the
/// runtime is owned here and only entered to start the server, mount mocks
/// and read back requests.
pub struct MockApi {
    server: MockServer,
    runtime: Runtime,
}

impl MockApi {
    pub fn start() -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("failed to build runtime");
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    /// Answer `GET <route>` with `status` and a JSON body.
    pub fn get_json(&self, route: &str, status: u16, body: serde_json::Value) {
        self.mount(
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(ResponseTemplate::new(status).set_body_json(body)),
        );
    }

    /// Answer `GET <route>` with `status` and an empty body.
    pub fn get_status(&self, route: &str, status: u16) {
        self.mount(
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(ResponseTemplate::new(status)),
        );
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<Request> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }
}

/// LRCLIB search response with a single synced track.
pub fn lrclib_response(artist: &str, title: &str, synced: &str) -> serde_json::Value {
    serde_json::json!([{
        "id": 1,
        "trackName": title,
        "artistName": artist,
        "albumName": "Record",
        "duration": 215,
        "instrumental": false,
        "plainLyrics": "plain words",
        "syncedLyrics": synced,
    }])
}

/// ffprobe JSON for an mp3 with the given container tags.
pub fn probe_json(tags: serde_json::Value) -> String {
    serde_json::json!({
        "format": {
            "filename": "song.mp3",
            "format_name": "mp3",
            "duration": "215.500000",
            "bit_rate": "320000",
            "tags": tags,
        },
        "streams": [{
            "index": 0,
            "codec_type": "audio",
            "codec_name": "mp3",
            "sample_rate": "44100",
            "channels": 2,
            "channel_layout": "stereo",
            "bit_rate": "320000",
        }]
    })
    .to_string()
}

/// Write an executable shell script.
#[cfg(unix)]
pub fn write_script(path: &std::path::Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, format!("#!/bin/sh\n{}", body)).unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

/// Paths of fake tool scripts created by [`fake_tools`].
#[cfg(unix)]
pub struct FakeTools {
    pub ffprobe: std::path::PathBuf,
    pub ffmpeg: std::path::PathBuf,
    /// Arguments of the last ffmpeg run, one per line.
    pub ffmpeg_args: std::path::PathBuf,
}

/// Write executable `ffprobe`/`ffmpeg` stand-ins into `dir`.
///
/// The fake ffprobe prints `probe_output`. The fake ffmpeg records its
/// arguments and writes `embedded` to its last argument (the output file).
#[cfg(unix)]
pub fn fake_tools(dir: &std::path::Path, probe_output: &str) -> FakeTools {
    let json_path = dir.join("probe.json");
    std::fs::write(&json_path, probe_output).unwrap();
    let ffmpeg_args = dir.join("ffmpeg.args");

    let ffprobe = dir.join("fake-ffprobe");
    write_script(&ffprobe, &format!("cat '{}'\n", json_path.display()));

    let ffmpeg = dir.join("fake-ffmpeg");
    write_script(
        &ffmpeg,
        &format!(
            "printf '%s\\n' \"$@\" > '{}'\nfor arg; do last=\"$arg\"; done\nprintf 'embedded' > \"$last\"\n",
            ffmpeg_args.display()
        ),
    );

    FakeTools {
        ffprobe,
        ffmpeg,
        ffmpeg_args,
    }
}

/// Whether the real ffprobe and ffmpeg are installed.
pub fn tools_available() -> bool {
    which::which("ffprobe").is_ok() && which::which("ffmpeg").is_ok()
}
