use anyhow::Result;
use serde_json::Value;

use crate::cli::OutputFormat;

/// Render a payload in the requested format
pub fn format_payload(payload: &Value, format: &OutputFormat) -> Result<String> {
    let content = match format {
        OutputFormat::Json => serde_json::to_string(payload)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(payload)?,
    };

    Ok(content)
}

/// Print a payload to stdout
pub fn print_to_console(payload: &Value, format: &OutputFormat) -> Result<()> {
    println!("{}", format_payload(payload, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compact_json() {
        let payload = json!({ "transcript": "hello" });
        assert_eq!(
            format_payload(&payload, &OutputFormat::Json).unwrap(),
            r#"{"transcript":"hello"}"#
        );
    }

    #[test]
    fn test_pretty_json() {
        let payload = json!({ "valid": true });
        assert_eq!(
            format_payload(&payload, &OutputFormat::Pretty).unwrap(),
            "{\n  \"valid\": true\n}"
        );
    }
}
