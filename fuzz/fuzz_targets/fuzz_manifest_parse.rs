//! Fuzz target for manifest parsing and validation.
//!
//! Arbitrary input must never panic the YAML/JSON loader or the validator,
//! only return Ok or Err.

#![no_main]

use libfuzzer_sys::fuzz_target;
use serving_runtime::manifest::parse_str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(objects) = parse_str(input) {
            for object in &objects {
                let _ = object.validate();
            }
        }
    }
});
