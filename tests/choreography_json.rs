use stardrift::Choreography;

#[test]
fn json_fixture_validates() {
    let s = include_str!("data/choreography.json");
    let ch: Choreography = serde_json::from_str(s).unwrap();
    ch.validate().unwrap();

    assert_eq!(ch.flight.waypoints_x_pct.len(), 7);
    assert_eq!(ch.props.len(), 4);
    assert_eq!(ch.reveal.class_name, "animate");
}

#[test]
fn json_fixture_matches_builtin_defaults() {
    let s = include_str!("data/choreography.json");
    let ch: Choreography = serde_json::from_str(s).unwrap();
    let defaults = Choreography::default();

    assert_eq!(ch.flight.waypoints_x_pct, defaults.flight.waypoints_x_pct);
    assert_eq!(ch.reveal.selectors, defaults.reveal.selectors);
    assert_eq!(
        ch.title_cue.map(|c| c.delay),
        defaults.title_cue.map(|c| c.delay)
    );
}

#[test]
fn partial_fixture_fills_defaults_and_fails_validation() {
    let s = include_str!("data/invalid_empty_waypoints.json");
    let ch: Choreography = serde_json::from_str(s).unwrap();

    // Omitted fields defaulted.
    assert_eq!(ch.flight.speed_multiplier, 1.0);
    assert_eq!(ch.props.len(), 4);

    let err = ch.validate().unwrap_err();
    assert!(err.to_string().contains("waypoints must be non-empty"));
}

#[test]
fn roundtrip_preserves_the_model() {
    let s = include_str!("data/choreography.json");
    let ch: Choreography = serde_json::from_str(s).unwrap();
    let re = serde_json::to_string(&ch).unwrap();
    let de: Choreography = serde_json::from_str(&re).unwrap();

    assert_eq!(de.flight.waypoints_x_pct, ch.flight.waypoints_x_pct);
    assert_eq!(de.reveal.min_visible_ratio, ch.reveal.min_visible_ratio);
    assert_eq!(de.props.len(), ch.props.len());
}
