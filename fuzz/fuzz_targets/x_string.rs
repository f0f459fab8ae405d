#![no_main]

use libfuzzer_sys::fuzz_target;

const MAX_INPUT_BYTES: usize = 1024;

fuzz_target!(|data: &[u8]| {
    let capped = &data[..data.len().min(MAX_INPUT_BYTES)];
    let text = String::from_utf8_lossy(capped);

    let total = dyncast::float_from_x_string(&text);
    if let Ok(strict) = dyncast::try_float_from_x_string(&text) {
        assert!(strict.to_bits() == total.to_bits() || (strict.is_nan() && total.is_nan()));
    }

    let _ = dyncast::to_int(&*text);
    let _ = dyncast::to_uint(&*text);
    let _ = dyncast::to_bool(&*text);
    let _ = dyncast::to_duration(&*text);
});
