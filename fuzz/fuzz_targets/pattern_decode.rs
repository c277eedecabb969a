#![no_main]

use libfuzzer_sys::fuzz_target;
use rhizome_petri_pattern::{decode, decode_strict};

fuzz_target!(|data: &[u8]| {
    let [columns, rows, code @ ..] = data else {
        return;
    };
    let Ok(code) = std::str::from_utf8(code) else {
        return;
    };
    let (columns, rows) = (usize::from(*columns % 64), usize::from(*rows % 64));

    // Neither decoder may panic, and lenient output always has the requested shape.
    let matrix = decode(code, columns, rows);
    assert_eq!(matrix.columns(), columns);
    assert_eq!(matrix.rows(), rows);
    let _ = decode_strict(code, columns, rows);
});
