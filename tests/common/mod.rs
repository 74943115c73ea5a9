/*!
 * Common test utilities for the lyricdeck test suite
 */

use std::sync::Once;

use lyricdeck::providers::mock::{MockProvider, MockRequest};

static INIT_LOGGER: Once = Once::new();

/// Initialize env_logger once for the whole test binary
pub fn init_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Sample lyrics with verses, a bracketed annotation and a repeat
pub const SAMPLE_LYRICS: &str = "Walking down the empty street\n\
Shadows falling at my feet\n\
[Chorus]\n\
Hold on, hold on tonight\n\
Hold on, hold on tonight\n\
Morning light will find us here\n\
Singing loud for all to hear";

/// Extract the requested part count from a rendered split prompt.
///
/// Probe prompts carry no count; those return None.
pub fn requested_count(prompt: &str) -> Option<usize> {
    prompt
        .split("exactly ")
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|word| word.parse().ok())
}

/// A provider that honors the requested count, one "part {i}" per line
pub fn exact_split_provider() -> MockProvider {
    MockProvider::working().with_custom_response(|req: &MockRequest| {
        match requested_count(&req.prompt) {
            Some(n) => (1..=n)
                .map(|i| format!("part {}", i))
                .collect::<Vec<_>>()
                .join("\n"),
            None => "pong".to_string(),
        }
    })
}

/// A provider that always returns three parts regardless of the request
pub fn wrong_count_provider() -> MockProvider {
    MockProvider::working()
        .with_custom_response(|_req| "only\nthree\nparts".to_string())
}

/// A provider that honors the requested count but numbers every line
pub fn numbered_split_provider() -> MockProvider {
    MockProvider::working().with_custom_response(|req: &MockRequest| {
        match requested_count(&req.prompt) {
            Some(n) => (1..=n)
                .map(|i| format!("{}. part {}", i, i))
                .collect::<Vec<_>>()
                .join("\n"),
            None => "pong".to_string(),
        }
    })
}
