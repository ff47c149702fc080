#![cfg(feature = "std")]

use std::{fs::read_to_string, path::Path};

use matte::avec::reader::Error;

fn expected(path: &str) -> String {
    let path = Path::new(path).with_extension("txt");
    read_to_string(path).unwrap().trim_end().to_string()
}

#[test]
fn convert_slice_clipboard_snippet() {
    const PATH: &str = "fixtures/clipboard-snippet.rtf";
    let data = std::fs::read(PATH).unwrap();
    assert_eq!(matte::avec::convert_slice(&data).unwrap(), expected(PATH));
}

#[test]
fn convert_slice_release_notes() {
    const PATH: &str = "fixtures/release-notes.rtf";
    let data = std::fs::read(PATH).unwrap();
    assert_eq!(matte::avec::convert_slice(&data).unwrap(), expected(PATH));
}

#[test]
fn convert_reader_clipboard_snippet() {
    const PATH: &str = "fixtures/clipboard-snippet.rtf";
    let file = std::fs::File::open(PATH).unwrap();
    assert_eq!(matte::avec::convert_reader(file).unwrap(), expected(PATH));
}

#[test]
fn convert_reader_release_notes() {
    const PATH: &str = "fixtures/release-notes.rtf";
    let file = std::fs::File::open(PATH).unwrap();
    assert_eq!(matte::avec::convert_reader(file).unwrap(), expected(PATH));
}

#[test]
fn convert_path_release_notes() {
    const PATH: &str = "fixtures/release-notes.rtf";
    assert_eq!(matte::avec::convert_path(PATH).unwrap(), expected(PATH));
}

#[test]
fn convert_path_missing_file() {
    assert!(matches!(
        matte::avec::convert_path("fixtures/does-not-exist.rtf"),
        Err(Error::Io(_))
    ));
}

#[test]
fn convert_reader_rejects_missing_envelope() {
    assert!(matches!(
        matte::avec::convert_reader(&b"plain text"[..]),
        Err(Error::Envelope(_))
    ));
    assert!(matches!(
        matte::avec::convert_reader(std::io::empty()),
        Err(Error::Envelope(_))
    ));
}
