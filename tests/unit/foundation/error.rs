use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GreetError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(GreetError::config("x").to_string().contains("config error:"));
    assert!(
        GreetError::playback("x")
            .to_string()
            .contains("playback error:")
    );
    assert!(
        GreetError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GreetError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: GreetError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, GreetError::Serde(_)));
}
