use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use scan_core::Decision;

    use super::parse_enum;

    #[test]
    fn parses_snake_case_enum() {
        let decision: Decision = parse_enum("sick", "decision").expect("decision should parse");
        assert_eq!(decision, Decision::Sick);
    }

    #[test]
    fn ignores_case() {
        let decision: Decision = parse_enum("Healthy", "decision").expect("decision should parse");
        assert_eq!(decision, Decision::Healthy);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<Decision>("unsure", "decision").expect_err("should fail");
        assert!(err.to_string().contains("invalid decision 'unsure'"));
    }
}
