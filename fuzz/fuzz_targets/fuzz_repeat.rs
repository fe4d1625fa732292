#![no_main]

use libfuzzer_sys::fuzz_target;

use kata_iteration::repeat;

// Bounded counts only; the output is count * unit.len() bytes.
fuzz_target!(|input: (String, i16)| {
    let (unit, count) = input;
    let repeated = repeat(&unit, i64::from(count));
    if count <= 0 {
        assert!(repeated.is_empty());
    } else {
        assert_eq!(repeated.len(), unit.len() * count as usize);
    }
});
