#![no_main]

use dyncast::datetime::{format_rfc3339, parse_with_layout, LAYOUTS};
use libfuzzer_sys::fuzz_target;

const MAX_INPUT_BYTES: usize = 256;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let capped = &data[1..data.len().min(MAX_INPUT_BYTES)];
    let text = String::from_utf8_lossy(capped);

    // Any text against a table layout, and the text as a layout of its own.
    let layout = LAYOUTS[usize::from(data[0]) % LAYOUTS.len()];
    if let Ok(t) = parse_with_layout(layout, &text) {
        let _ = format_rfc3339(t);
    }
    let _ = parse_with_layout(&text, &text);

    let t = dyncast::to_time(&*text);
    let _ = dyncast::to_string(t);
});
