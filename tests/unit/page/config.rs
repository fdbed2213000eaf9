use super::*;
use crate::foundation::core::Millis;

#[test]
fn empty_object_is_the_default_page() {
    let cfg = PageConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, PageConfig::default());
    assert_eq!(cfg.slides.len(), 4);
    assert_eq!(cfg.slides[0].src, "/1.png");
    assert_eq!(cfg.carousel.slide_interval, Millis(3000));
    assert_eq!(cfg.consent.close_delay, Millis(520));
    assert!(cfg.intro);
}

#[test]
fn partial_sections_fill_defaults() {
    let cfg = PageConfig::from_json_str(
        r#"{ "slides": ["/1.png", "/2.png"], "carousel": { "slide_interval": 1000 } }"#,
    )
    .unwrap();
    assert_eq!(cfg.slides.len(), 2);
    assert_eq!(cfg.carousel.slide_interval, Millis(1000));
    assert_eq!(cfg.carousel.transition, Millis(2000));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = PageConfig::from_json_str(r#"{ "slidez": [] }"#).unwrap_err();
    assert!(matches!(err, GreetError::Serde(_)));
}

#[test]
fn validation_catches_bad_values() {
    let cases = [
        r#"{ "slides": [" "] }"#,
        r#"{ "carousel": { "slide_interval": 0 } }"#,
        r#"{ "typewriter": { "speed": 0 } }"#,
        r#"{ "layers": { "hearts": { "factor": -0.1, "max_shift": 10, "fade_distance": 0 } } }"#,
        r#"{ "layers": { "sparkles": { "factor": 0.1, "max_shift": -1, "fade_distance": 9 } } }"#,
        r#"{ "keys": { "accept": "y", "decline": "Y" } }"#,
        r#"{ "sections": ["hero", "hero"] }"#,
        r#"{ "sections": [""] }"#,
    ];
    for json in cases {
        let err = PageConfig::from_json_str(json).unwrap_err();
        assert!(
            err.to_string().contains("validation error:"),
            "{json}: {err}"
        );
    }
}

#[test]
fn config_round_trips_through_json() {
    let cfg = PageConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(PageConfig::from_json_str(&json).unwrap(), cfg);
}

#[test]
fn missing_file_reports_path() {
    let err = PageConfig::from_path(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
