//! Search online sources, let the user pick a candidate, embed it.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tagprobe_av::MediaBackend;
use tracing::{debug, info};
use unicode_width::UnicodeWidthChar;

use super::provider::{LyricsCandidate, LyricsQuery};
use super::registry::SourceRegistry;
use super::Sidecar;
use crate::error::{Error, Result};
use crate::record::MediaRecord;

/// How an import ended.
#[derive(Debug)]
pub enum ImportOutcome {
    /// No source had lyrics for the query.
    NoCandidates { query: LyricsQuery },
    /// The selection was not a listed number. Nothing was modified.
    InvalidSelection { input: String },
    /// The chosen lyrics are in the file. The sidecar write may have failed.
    Embedded {
        candidate: LyricsCandidate,
        sidecar: Result<PathBuf>,
    },
}

/// One import run against a single audio file.
pub struct ImportSession<'a> {
    backend: &'a dyn MediaBackend,
    sources: &'a SourceRegistry,
    sidecar: &'a Sidecar,
    preview_width: usize,
}

impl<'a> ImportSession<'a> {
    pub fn new(
        backend: &'a dyn MediaBackend,
        sources: &'a SourceRegistry,
        sidecar: &'a Sidecar,
    ) -> Self {
        Self {
            backend,
            sources,
            sidecar,
            preview_width: 80,
        }
    }

    pub fn preview_width(mut self, width: usize) -> Self {
        self.preview_width = width.max(1);
        self
    }

    /// Run the flow for `path`.
    ///
    /// The candidate list and prompt go to `out`; one line is read from
    /// `input` as the selection. The file is only modified after a valid
    /// selection, and only through [`MediaBackend::embed_lyrics`].
    pub fn run<R: BufRead, W: Write>(
        &self,
        path: &Path,
        input: &mut R,
        out: &mut W,
    ) -> Result<ImportOutcome> {
        let probe = self.backend.probe(path).map_err(Error::from_probe)?;
        let record = MediaRecord::from_probe(path, &probe);
        let query = LyricsQuery::from_record(&record);

        info!(
            "Searching lyrics for title={:?} artist={:?}",
            query.title, query.artist
        );
        let mut candidates = self.sources.search_all(&query);
        if candidates.is_empty() {
            return Ok(ImportOutcome::NoCandidates { query });
        }

        writeln!(out, "Found {} lyrics candidates:", candidates.len())?;
        for (i, candidate) in candidates.iter().enumerate() {
            writeln!(out, "{:>3}. {}", i + 1, candidate.label())?;
            writeln!(out, "     {}", preview(&candidate.text, self.preview_width))?;
        }
        write!(out, "Select lyrics [1-{}]: ", candidates.len())?;
        out.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        let line = line.trim().to_string();

        let Some(index) = parse_selection(&line, candidates.len()) else {
            debug!("Rejected selection {:?}", line);
            return Ok(ImportOutcome::InvalidSelection { input: line });
        };
        let candidate = candidates.swap_remove(index);

        self.backend
            .embed_lyrics(path, &candidate.text)
            .map_err(Error::from_embed)?;
        info!("Embedded lyrics from {} into {:?}", candidate.source, path);

        let sidecar = self.sidecar.save(path, &candidate.text);
        Ok(ImportOutcome::Embedded { candidate, sidecar })
    }
}

/// 1-based selection to a 0-based index.
pub fn parse_selection(input: &str, count: usize) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(n - 1),
        _ => None,
    }
}

/// Single-line preview at most `width` display columns wide.
pub fn preview(text: &str, width: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut out = String::new();
    let mut used = 0;
    for c in flat.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            // Make room for the ellipsis.
            while used + 1 > width {
                match out.pop() {
                    Some(p) => used -= p.width().unwrap_or(0),
                    None => break,
                }
            }
            out.push('…');
            return out;
        }
        used += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Cursor;
    use tagprobe_av::{ProbeFormat, ProbeOutput};
    use tempfile::tempdir;

    use crate::lyrics::LyricsSource;

    #[derive(Default)]
    struct Recording {
        embedded: RefCell<Vec<String>>,
        fail_embed: bool,
    }

    impl MediaBackend for Recording {
        fn probe(&self, _path: &Path) -> tagprobe_av::Result<ProbeOutput> {
            let mut format = ProbeFormat::default();
            format.tags.insert("TITLE".to_string(), "Song".to_string());
            format.tags.insert("artist".to_string(), "Band".to_string());
            Ok(ProbeOutput {
                format,
                streams: Vec::new(),
            })
        }

        fn embed_lyrics(&self, _path: &Path, lyrics: &str) -> tagprobe_av::Result<()> {
            if self.fail_embed {
                return Err(tagprobe_av::Error::tool_failed("ffmpeg", "Conversion failed!"));
            }
            self.embedded.borrow_mut().push(lyrics.to_string());
            Ok(())
        }
    }

    struct Canned(Vec<&'static str>);

    impl LyricsSource for Canned {
        fn name(&self) -> &'static str {
            "canned"
        }

        fn search(&self, query: &LyricsQuery) -> Result<Vec<LyricsCandidate>> {
            assert_eq!(query, &LyricsQuery::new("Song", "Band"));
            Ok(self
                .0
                .iter()
                .map(|t| LyricsCandidate {
                    source: "canned".to_string(),
                    description: "Band - Song".to_string(),
                    text: t.to_string(),
                    synced: false,
                })
                .collect())
        }
    }

    fn registry(texts: Vec<&'static str>) -> SourceRegistry {
        let mut registry = SourceRegistry::new();
        registry.register(Box::new(Canned(texts)));
        registry
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1", 2), Some(0));
        assert_eq!(parse_selection(" 2 \n", 2), Some(1));
        assert_eq!(parse_selection("3", 2), None);
        assert_eq!(parse_selection("0", 2), None);
        assert_eq!(parse_selection("-1", 2), None);
        assert_eq!(parse_selection("two", 2), None);
        assert_eq!(parse_selection("", 2), None);
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("line one\nline two", 80), "line one line two");
        assert_eq!(preview("abcdefghij", 5), "abcd…");
        assert_eq!(preview("夜に駆ける", 5), "夜に…");
        assert_eq!(preview("", 5), "");
    }

    #[test]
    fn test_valid_selection_embeds_and_saves() {
        let dir = tempdir().unwrap();
        let sidecar = Sidecar::new(dir.path());
        let backend = Recording::default();
        let sources = registry(vec!["first lyrics", "second lyrics"]);

        let mut out = Vec::new();
        let outcome = ImportSession::new(&backend, &sources, &sidecar)
            .run(Path::new("song.mp3"), &mut Cursor::new("2\n"), &mut out)
            .unwrap();

        match outcome {
            ImportOutcome::Embedded { candidate, sidecar } => {
                assert_eq!(candidate.text, "second lyrics");
                let path = sidecar.unwrap();
                assert_eq!(std::fs::read_to_string(path).unwrap(), "second lyrics");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(*backend.embedded.borrow(), vec!["second lyrics".to_string()]);

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("  1. [canned] Band - Song"));
        assert!(shown.contains("Select lyrics [1-2]: "));
    }

    #[test]
    fn test_out_of_range_selection_modifies_nothing() {
        let dir = tempdir().unwrap();
        let sidecar = Sidecar::new(dir.path().join("result"));
        let backend = Recording::default();
        let sources = registry(vec!["first", "second"]);

        let outcome = ImportSession::new(&backend, &sources, &sidecar)
            .run(Path::new("song.mp3"), &mut Cursor::new("3\n"), &mut Vec::new())
            .unwrap();

        assert!(matches!(outcome, ImportOutcome::InvalidSelection { ref input } if input == "3"));
        assert!(backend.embedded.borrow().is_empty());
        assert!(!dir.path().join("result").exists());
    }

    #[test]
    fn test_no_candidates() {
        let sidecar = Sidecar::default();
        let backend = Recording::default();
        let sources = registry(vec![]);

        let mut out = Vec::new();
        let outcome = ImportSession::new(&backend, &sources, &sidecar)
            .run(Path::new("song.mp3"), &mut Cursor::new(""), &mut out)
            .unwrap();

        assert!(matches!(outcome, ImportOutcome::NoCandidates { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_embed_failure_skips_sidecar() {
        let dir = tempdir().unwrap();
        let sidecar = Sidecar::new(dir.path().join("result"));
        let backend = Recording {
            fail_embed: true,
            ..Default::default()
        };
        let sources = registry(vec!["only"]);

        let err = ImportSession::new(&backend, &sources, &sidecar)
            .run(Path::new("song.mp3"), &mut Cursor::new("1\n"), &mut Vec::new())
            .unwrap_err();

        assert!(matches!(err, Error::Transcode(ref m) if m == "Conversion failed!"));
        assert!(!dir.path().join("result").exists());
    }
}
