//! Embedded theme tables
//!
//! Theme data compiled into the binary at build time.

// Include generated theme tables from build script
include!(concat!(env!("OUT_DIR"), "/animals.rs"));
include!(concat!(env!("OUT_DIR"), "/technology.rs"));
include!(concat!(env!("OUT_DIR"), "/sports.rs"));

/// The default theme bank: name plus word/hint table, in display order
pub const EMBEDDED: &[(&str, &[(&str, &str)])] = &[
    ("Animals", ANIMALS),
    ("Technology", TECHNOLOGY),
    ("Sports", SPORTS),
];
