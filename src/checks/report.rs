//! Progress lines printed to stdout while checks run

pub fn testing(name: &str) -> String {
    format!("\n🔍 Testing {name}...")
}

pub fn passed(status: u16) -> String {
    format!("✅ Passed - Status: {status}")
}

pub fn status_mismatch(expected: u16, actual: u16) -> String {
    format!("❌ Failed - Expected {expected}, got {actual}")
}

pub fn response_body(body: &str) -> String {
    format!("Response: {body}")
}

pub fn transport_error(error: &(dyn std::error::Error + 'static)) -> String {
    format!("❌ Failed - Error: {}", error_chain(error))
}

/// Render an error followed by each `source()` it wraps
///
/// A cause already spelled out by its wrapper's message is not repeated.
pub fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

pub fn hint(text: &str) -> String {
    format!("❌ {text}")
}

pub fn summary(run: &super::TestRun) -> String {
    format!("\n📊 Tests passed: {run}")
}
