use super::*;

#[test]
fn actions_parse_from_tagged_json() {
    let script = Script::from_json_str(
        r#"{ "events": [
            { "at": 0, "action": "decline" },
            { "at": 10, "action": "key", "key": "y" },
            { "at": 20, "action": "scroll", "offset": 250.5 },
            { "at": 30, "action": "upload", "files": [{ "name": "a.png" }] },
            { "at": 40, "action": "hover", "inside": true }
        ] }"#,
    )
    .unwrap();
    assert_eq!(script.events.len(), 5);
    assert_eq!(script.events[1].action, Action::Key { key: "y".into() });
    assert_eq!(
        script.events[3].action,
        Action::Upload {
            files: vec![UploadFile {
                name: "a.png".into(),
                bytes: Vec::new()
            }]
        }
    );
}

#[test]
fn empty_script_samples_autoplay() {
    let opts = RunOpts {
        until: Millis(6000),
        sample_every: Millis(3000),
        refuse_audio: false,
    };
    let snaps = run_script(PageConfig::default(), &Script::default(), opts).unwrap();
    let current: Vec<usize> = snaps.iter().map(|s| s.carousel.state.current).collect();
    assert_eq!(current, vec![0, 1, 2]);
    assert!(snaps.iter().all(|s| s.scroll_locked));
}

#[test]
fn events_apply_before_same_instant_sample() {
    let script = Script::from_json_str(
        r#"{ "events": [
            { "at": 400, "action": "accept" },
            { "at": 1000, "action": "scroll", "offset": 800 }
        ] }"#,
    )
    .unwrap();
    let opts = RunOpts {
        until: Millis(1000),
        sample_every: Millis(500),
        refuse_audio: false,
    };
    let snaps = run_script(PageConfig::default(), &script, opts).unwrap();
    assert_eq!(snaps.len(), 3);
    assert!(snaps[1].dialog.visible);
    assert!(snaps[1].music_on);
    assert!(!snaps[2].dialog.visible);
    assert!(!snaps[2].scroll_locked);
    assert_eq!(snaps[2].scroll_offset, 800.0);
    assert_eq!(snaps[2].hearts.opacity, 0.0);
}

#[test]
fn refused_audio_keeps_music_off() {
    let script =
        Script::from_json_str(r#"{ "events": [{ "at": 0, "action": "accept" }] }"#).unwrap();
    let opts = RunOpts {
        until: Millis(0),
        refuse_audio: true,
        ..RunOpts::default()
    };
    let snaps = run_script(PageConfig::default(), &script, opts).unwrap();
    assert!(!snaps[0].music_on);
}

#[test]
fn zero_sample_period_is_rejected() {
    let opts = RunOpts {
        sample_every: Millis(0),
        ..RunOpts::default()
    };
    assert!(run_script(PageConfig::default(), &Script::default(), opts).is_err());
}

#[test]
fn sampling_stops_at_end_of_clock() {
    let config = PageConfig {
        slides: vec![crate::carousel::slide::Slide::new("/only.png", "")],
        typewriter: crate::typewriter::reveal::TypewriterSource {
            text: "a".to_owned(),
            ..Default::default()
        },
        ..PageConfig::default()
    };
    let opts = RunOpts {
        until: Millis(u64::MAX),
        sample_every: Millis(u64::MAX / 2 + 1),
        refuse_audio: false,
    };
    let snaps = run_script(config, &Script::default(), opts).unwrap();
    let at: Vec<u64> = snaps.iter().map(|s| s.at.0).collect();
    assert_eq!(at, vec![0, u64::MAX / 2 + 1]);
    assert_eq!(snaps[1].typewriter.revealed, "a");
}
