// Copyright 2026 the Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pass timestamps from `performance.now()`.

use wasm_bindgen::prelude::*;

// Direct global binding instead of `web_sys::Window::performance` — avoids
// fetching (and unwrapping) the Performance object on every scroll event.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    fn performance_now() -> f64;
}

/// Returns the current host time in microseconds since the time origin.
#[must_use]
pub fn now_us() -> u64 {
    ms_to_us(performance_now())
}

/// Converts a `DOMHighResTimeStamp` (ms) to whole microseconds.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "performance.now() returns small positive f64; µs fits in u64"
)]
pub(crate) fn ms_to_us(ms: f64) -> u64 {
    (ms * 1000.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_milliseconds() {
        assert_eq!(ms_to_us(16.0), 16_000);
        assert_eq!(ms_to_us(0.0015), 1);
    }

    #[test]
    fn negative_and_nan_saturate_to_zero() {
        assert_eq!(ms_to_us(-3.0), 0);
        assert_eq!(ms_to_us(f64::NAN), 0);
    }
}
