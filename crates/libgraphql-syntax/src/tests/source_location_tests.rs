use crate::SourceLocation;
use crate::SourcePosition;
use std::path::Path;
use std::path::PathBuf;

#[test]
fn location_at_is_zero_width() {
    let position = SourcePosition::new(2, 4, 17);

    let location = SourceLocation::at(position.clone());

    assert_eq!(location.start_inclusive(), &position);
    assert_eq!(location.end_exclusive(), &position);
    assert_eq!(location.len(), 0);
    assert!(location.is_empty());
    assert!(location.file_path().is_none());
}

#[test]
fn location_len_is_byte_distance() {
    let location = SourceLocation::new(
        SourcePosition::new(0, 5, 5),
        SourcePosition::new(1, 3, 14),
    );

    assert_eq!(location.len(), 9);
    assert!(!location.is_empty());
}

/// An end before the start never underflows.
#[test]
fn location_len_saturates() {
    let location = SourceLocation::new(
        SourcePosition::new(1, 0, 10),
        SourcePosition::new(0, 0, 2),
    );

    assert_eq!(location.len(), 0);
}

#[test]
fn location_with_file() {
    let location = SourceLocation::with_file(
        SourcePosition::new(0, 0, 0),
        SourcePosition::new(0, 4, 4),
        PathBuf::from("schema/base.graphqls"),
    );

    assert_eq!(location.file_path(), Some(Path::new("schema/base.graphqls")));
}

#[test]
fn location_survives_bincode() {
    let location = SourceLocation::with_file(
        SourcePosition::new(3, 1, 40),
        SourcePosition::new(3, 9, 48),
        PathBuf::from("schema.graphqls"),
    );

    let bytes = bincode::serde::encode_to_vec(
        &location,
        bincode::config::standard(),
    ).unwrap();
    let (decoded, _): (SourceLocation, usize) =
        bincode::serde::decode_from_slice(&bytes, bincode::config::standard())
            .unwrap();

    assert_eq!(decoded, location);
}
