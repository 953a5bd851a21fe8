//! End-to-end tests: source file in, chunk files out

use chunkwise_core::{
    ChunkConfig, ChunkObserver, Chunker, Error, NoopObserver, SourceRange, Strategy, WrittenChunk,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn numbered_lines(count: usize) -> String {
    (1..=count).map(|i| format!("line {i}\n")).collect()
}

fn write_source(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn run(
    source: &Path,
    out: &Path,
    strategy: Strategy,
    size: usize,
    overlap: usize,
    metadata: bool,
) -> Vec<WrittenChunk> {
    let config = ChunkConfig::builder(source)
        .output_dir(out)
        .strategy(strategy)
        .chunk_size(size)
        .overlap(overlap)
        .add_metadata(metadata)
        .build()
        .unwrap();
    Chunker::new(config)
        .process(&mut NoopObserver)
        .unwrap()
        .chunks
}

/// Content lines of a chunk file written with metadata
fn body_lines(path: &Path) -> Vec<String> {
    let text = fs::read_to_string(path).unwrap();
    let (_, body) = text.split_once("=== CONTENT ===\n\n").unwrap();
    body.lines().map(str::to_string).collect()
}

#[test]
fn test_2500_lines_with_overlap() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path(), "big.txt", &numbered_lines(2500));
    let out = temp_dir.path().join("chunks");

    let chunks = run(&source, &out, Strategy::Lines, 1000, 50, true);

    let ranges: Vec<_> = chunks.iter().map(|c| c.range).collect();
    assert_eq!(
        ranges,
        [
            SourceRange::Lines { start: 1, end: 1000 },
            SourceRange::Lines { start: 951, end: 1950 },
            SourceRange::Lines { start: 1901, end: 2500 },
        ]
    );

    let second = body_lines(&out.join("big_chunk_002.txt"));
    assert_eq!(second.len(), 1000);
    assert_eq!(second[0], "line 951");
    assert_eq!(second[49], "line 1000");
    assert_eq!(second[50], "line 1001");
    assert_eq!(second[999], "line 1950");

    let third = body_lines(&out.join("big_chunk_003.txt"));
    assert_eq!(third.len(), 600);
    assert_eq!(third.last().unwrap(), "line 2500");
}

#[test]
fn test_line_chunk_file_format() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path(), "notes.md", "a\nb\nc\n");
    let out = temp_dir.path().join("out");

    run(&source, &out, Strategy::Lines, 2, 0, true);

    let first = fs::read_to_string(out.join("notes_chunk_001.txt")).unwrap();
    assert_eq!(
        first,
        format!(
            "=== CHUNK 1 ===\nSource: {}\nLines: 1-2\nTotal lines in chunk: 2\n=== CONTENT ===\n\na\nb\n",
            source.display()
        )
    );

    let second = fs::read_to_string(out.join("notes_chunk_002.txt")).unwrap();
    assert!(second.contains("Lines: 3-3\n"));
    assert!(second.ends_with("\n\nc\n"));
}

#[test]
fn test_chars_scenario_from_space_separated_letters() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path(), "letters.txt", "a b c d e");
    let out = temp_dir.path().join("out");

    let chunks = run(&source, &out, Strategy::Chars, 5, 0, false);

    assert_eq!(chunks.len(), 2);
    assert_eq!(fs::read_to_string(out.join("letters_chunk_001.txt")).unwrap(), "a b c");
    assert_eq!(fs::read_to_string(out.join("letters_chunk_002.txt")).unwrap(), "d e");
}

#[test]
fn test_text_chunk_file_format() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path(), "doc.txt", "Hello, world!");
    let out = temp_dir.path().join("out");

    run(&source, &out, Strategy::Tokens, 10, 0, true);

    let text = fs::read_to_string(out.join("doc_chunk_001.txt")).unwrap();
    assert_eq!(
        text,
        format!(
            "=== CHUNK 1 ===\nSource: {}\nRange: 0-4\n=== CONTENT ===\n\nHello , world !",
            source.display()
        )
    );
}

#[test]
fn test_empty_input_produces_no_chunks() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path(), "empty.txt", "");

    for strategy in Strategy::ALL {
        let out = temp_dir.path().join(strategy.as_str());
        let chunks = run(&source, &out, strategy, 10, 2, true);
        assert!(chunks.is_empty(), "{strategy} produced chunks");
        assert!(out.is_dir(), "output directory still created");
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }
}

#[test]
fn test_chunk_size_larger_than_input() {
    let temp_dir = TempDir::new().unwrap();
    let content = "short input\nwith two lines\n";
    let source = write_source(temp_dir.path(), "small.txt", content);

    let out = temp_dir.path().join("lines");
    let chunks = run(&source, &out, Strategy::Lines, 1000, 50, false);
    assert_eq!(chunks.len(), 1);
    assert_eq!(fs::read_to_string(&chunks[0].path).unwrap(), content);

    let out = temp_dir.path().join("chars");
    let chunks = run(&source, &out, Strategy::Chars, 1000, 50, false);
    assert_eq!(chunks.len(), 1);
    assert_eq!(fs::read_to_string(&chunks[0].path).unwrap(), content);

    let out = temp_dir.path().join("tokens");
    let chunks = run(&source, &out, Strategy::Tokens, 1000, 50, false);
    assert_eq!(chunks.len(), 1);
    assert_eq!(
        fs::read_to_string(&chunks[0].path).unwrap(),
        "short input with two lines"
    );
}

#[test]
fn test_prefix_and_numbering() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path(), "code.py", &numbered_lines(25));
    let out = temp_dir.path().join("out");

    let config = ChunkConfig::builder(&source)
        .output_dir(&out)
        .chunk_size(10)
        .overlap(0)
        .prefix("part")
        .build()
        .unwrap();
    let summary = Chunker::new(config).process(&mut NoopObserver).unwrap();

    let names: Vec<_> = summary.chunks.iter().map(|c| c.file_name.as_str()).collect();
    assert_eq!(
        names,
        ["part_chunk_001.txt", "part_chunk_002.txt", "part_chunk_003.txt"]
    );
    assert_eq!(summary.strategy, Strategy::Lines);
}

#[test]
fn test_rerun_overwrites_previous_chunks() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");

    let source = write_source(temp_dir.path(), "doc.txt", "old old old");
    run(&source, &out, Strategy::Chars, 100, 0, false);

    write_source(temp_dir.path(), "doc.txt", "new");
    run(&source, &out, Strategy::Chars, 100, 0, false);

    assert_eq!(fs::read_to_string(out.join("doc_chunk_001.txt")).unwrap(), "new");
}

struct Progress {
    numbers: Vec<usize>,
}

impl ChunkObserver for Progress {
    fn chunk_written(&mut self, chunk: &WrittenChunk) {
        assert!(chunk.path.is_file(), "notified before the file exists");
        self.numbers.push(chunk.number);
    }
}

#[test]
fn test_observer_sees_every_chunk_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path(), "t.txt", &"word ".repeat(40));
    let config = ChunkConfig::builder(&source)
        .output_dir(temp_dir.path().join("out"))
        .strategy(Strategy::Tokens)
        .chunk_size(10)
        .overlap(3)
        .build()
        .unwrap();

    let mut progress = Progress { numbers: Vec::new() };
    let summary = Chunker::new(config).process(&mut progress).unwrap();

    assert_eq!(progress.numbers, (1..=summary.chunks.len()).collect::<Vec<_>>());
}

#[test]
fn test_missing_source_is_a_setup_error() {
    let temp_dir = TempDir::new().unwrap();
    let config = ChunkConfig::builder(temp_dir.path().join("nope.txt"))
        .output_dir(temp_dir.path().join("out"))
        .build()
        .unwrap();

    let err = Chunker::new(config).process(&mut NoopObserver).unwrap_err();
    assert!(matches!(err, Error::SourceNotFound(_)));
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn test_write_failure_keeps_earlier_chunks() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path(), "doc.txt", &numbered_lines(30));
    let out = temp_dir.path().join("out");
    fs::create_dir(&out).unwrap();

    // A directory squatting on the second chunk's name makes its creation fail.
    fs::create_dir(out.join("doc_chunk_002.txt")).unwrap();

    let config = ChunkConfig::builder(&source)
        .output_dir(&out)
        .chunk_size(10)
        .overlap(0)
        .build()
        .unwrap();
    let err = Chunker::new(config).process(&mut NoopObserver).unwrap_err();

    match err {
        Error::Write { path, .. } => assert!(path.ends_with("doc_chunk_002.txt")),
        other => panic!("expected write error, got {other:?}"),
    }
    assert!(out.join("doc_chunk_001.txt").is_file());
    assert!(!out.join("doc_chunk_003.txt").exists());
}

#[test]
fn test_summary_serializes_to_json() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path(), "doc.txt", "one two three");
    let config = ChunkConfig::builder(&source)
        .output_dir(temp_dir.path().join("out"))
        .strategy(Strategy::Tokens)
        .chunk_size(2)
        .overlap(0)
        .build()
        .unwrap();

    let summary = Chunker::new(config).process(&mut NoopObserver).unwrap();
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["strategy"], "tokens");
    assert_eq!(json["chunks"].as_array().unwrap().len(), 2);
    assert_eq!(json["chunks"][1]["range"]["kind"], "tokens");
    assert_eq!(json["chunks"][1]["range"]["start"], 2);
}
