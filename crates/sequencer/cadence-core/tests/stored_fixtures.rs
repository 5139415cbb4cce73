use std::rc::Rc;

use cadence_core::{
    parse_sequence_json, parse_stored_sequence_json, ManualTimers, MemoryElement, Player,
    SequenceError, StepBuilder, Translation, TRANSFORM,
};

#[test]
fn fixture_keys_are_listed() {
    let keys = cadence_test_fixtures::sequences::keys();
    for key in ["worry", "heartbeat", "show-and-hide"] {
        assert!(keys.iter().any(|k| k == key), "missing fixture {key}");
    }
}

#[test]
fn worry_fixture_matches_builder_output() {
    let json = cadence_test_fixtures::sequences::json("worry").unwrap();
    let loaded = parse_sequence_json(&json).unwrap();

    let built = StepBuilder::new()
        .add_move(200.0, Translation::new(80.0, 0.0))
        .unwrap()
        .add_move(200.0, Translation::new(0.0, 0.0))
        .unwrap()
        .add_move(200.0, Translation::new(80.0, 0.0))
        .unwrap()
        .add_move(200.0, Translation::new(0.0, 0.0))
        .unwrap()
        .build();
    assert_eq!(loaded, built);
}

#[test]
fn heartbeat_fixture_plays_cycled() {
    let json = cadence_test_fixtures::sequences::json("heartbeat").unwrap();
    let stored = parse_stored_sequence_json(&json).unwrap();
    assert!(stored.cycled);

    let timers = Rc::new(ManualTimers::new());
    let player = Player::with_defaults(timers.clone());
    let el = MemoryElement::with_clock(timers.clock()).into_ref();
    let handle = player
        .play(el.clone(), &stored.sequence(), stored.cycled)
        .unwrap();
    timers.advance(1500.0);
    handle.stop();

    let times: Vec<f64> = el
        .style_writes(TRANSFORM)
        .into_iter()
        .map(|(t, _)| t)
        .collect();
    assert_eq!(times, vec![0.0, 500.0, 1000.0, 1500.0]);
}

#[test]
fn sequence_json_round_trips_through_fixture_loader() {
    let stored: cadence_core::StoredSequence =
        cadence_test_fixtures::sequences::load("show-and-hide").unwrap();
    let seq = stored.sequence();
    let again = parse_sequence_json(&seq.to_json().unwrap()).unwrap();
    assert_eq!(again, seq);
}

#[test]
fn invalid_fixture_is_rejected() {
    let json = cadence_test_fixtures::sequences::json("negative-delay").unwrap();
    let err = parse_sequence_json(&json).unwrap_err();
    assert_eq!(err, SequenceError::InvalidDuration { duration_ms: -250.0 });
}

#[test]
fn unknown_fixture_is_an_error() {
    assert!(cadence_test_fixtures::sequences::json("does-not-exist").is_err());
}
