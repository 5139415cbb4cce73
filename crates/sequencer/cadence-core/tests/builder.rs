use cadence_core::{Effect, SequenceError, StepBuilder, StepKind, Translation};

#[test]
fn chained_adds_keep_append_order() {
    let seq = StepBuilder::new()
        .add_fade_in(100.0)
        .unwrap()
        .add_delay(50.0)
        .unwrap()
        .add_scale(100.0, 1.25)
        .unwrap()
        .add_rotate(100.0, 180.0)
        .unwrap()
        .add_move(100.0, Translation::new(100.0, 10.0))
        .unwrap()
        .add_fade_out(100.0)
        .unwrap()
        .build();
    let kinds: Vec<StepKind> = seq.iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            StepKind::FadeIn,
            StepKind::Delay,
            StepKind::Scale,
            StepKind::Rotate,
            StepKind::Move,
            StepKind::FadeOut,
        ]
    );
    assert_eq!(seq.total_duration_ms(), 550.0);
}

#[test]
fn show_and_hide_is_three_equal_phases() {
    let seq = StepBuilder::new().show_and_hide(900.0).unwrap().build();
    let parts: Vec<(StepKind, f64)> = seq.iter().map(|s| (s.kind(), s.duration_ms())).collect();
    assert_eq!(
        parts,
        vec![
            (StepKind::FadeIn, 300.0),
            (StepKind::Delay, 300.0),
            (StepKind::FadeOut, 300.0),
        ]
    );
    assert_eq!(seq.offsets(), vec![0.0, 300.0, 600.0]);
}

#[test]
fn heart_beat_is_one_second_pulse() {
    let seq = StepBuilder::new().heart_beating().unwrap().build();
    assert_eq!(seq.steps()[0].effect(), &Effect::Scale { ratio: 1.4 });
    assert_eq!(seq.steps()[1].effect(), &Effect::Scale { ratio: 1.0 });
    assert_eq!(seq.total_duration_ms(), 1000.0);
}

#[test]
fn clones_of_a_base_diverge_independently() {
    let base = StepBuilder::new().add_fade_in(100.0).unwrap();
    let a = base.clone().add_delay(100.0).unwrap();
    let b = base.clone().add_fade_out(100.0).unwrap().add_delay(5.0).unwrap();
    assert_eq!(base.len(), 1);
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 3);
}

#[test]
fn negative_duration_leaves_other_copies_untouched() {
    let base = StepBuilder::new().add_fade_in(100.0).unwrap();
    let err = base.clone().add_move(-1.0, Translation::default()).unwrap_err();
    assert_eq!(err, SequenceError::InvalidDuration { duration_ms: -1.0 });
    assert_eq!(base.len(), 1);

    assert!(StepBuilder::new().add_delay(f64::NAN).is_err());
    assert!(StepBuilder::new().move_and_hide(-10.0).is_err());
}

#[test]
fn zero_duration_is_allowed() {
    let seq = StepBuilder::new().add_scale(0.0, 2.0).unwrap().build();
    assert_eq!(seq.total_duration_ms(), 0.0);
}

#[test]
fn from_sequence_extends_existing_steps() {
    let pulse = StepBuilder::new().heart_beating().unwrap().build();
    let longer = StepBuilder::from_sequence(pulse)
        .add_delay(1000.0)
        .unwrap()
        .build();
    assert_eq!(longer.len(), 3);
    assert_eq!(longer.total_duration_ms(), 2000.0);
}
