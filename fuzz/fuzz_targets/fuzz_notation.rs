#![no_main]

//! Board notation fuzzer.
//!
//! Arbitrary text must either fail to parse with an error or produce a
//! board that renders back to an equal board.

use encircle::notation::{parse_board, render_board};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(grid) = parse_board(text) else {
        return;
    };

    let rendered = render_board(&grid);
    let reparsed = parse_board(&rendered).expect("rendered board must parse");
    assert_eq!(reparsed, grid);
});
