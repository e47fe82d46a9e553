//! Embedded dictionaries
//!
//! Word lists compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/simple.rs"));
include!(concat!(env!("OUT_DIR"), "/wordle.rs"));
