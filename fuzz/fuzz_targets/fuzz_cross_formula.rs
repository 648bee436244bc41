#![no_main]

use libfuzzer_sys::fuzz_target;

use picalc_core::constants::REFERENCE_DIGITS;
use picalc_core::formula::Formula;
use picalc_core::options::Options;
use picalc_core::registry::Registry;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // Precision from the first 2 bytes, capped at 2000 for speed (3 formulas)
    let precision = usize::from(u16::from_le_bytes([data[0], data[1]])) % 2000 + 1;
    // Any guard count must give the same digits
    let opts = Options {
        guard_digits: usize::from(data[2] % 32),
        max_iterations: 0,
    };

    let registry = Registry::builtin().unwrap();
    let expected = &REFERENCE_DIGITS[..precision];
    for name in registry.list_names() {
        let formula = registry.get(name).unwrap();
        let digits = formula.compute_with(precision, &opts).unwrap();
        assert_eq!(digits.as_str(), expected, "{name} differs at p={precision}");
    }
});
