use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PixelcatError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PixelcatError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        PixelcatError::transport("x")
            .to_string()
            .contains("transport error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PixelcatError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
