// Native tests for the text projections, the fixed drawing layout, and the
// word-service reply decoding.

mod common;

use common::{Op, RecordingSurface, SURFACE_H, SURFACE_W};
use hangman_canvas::{parse_word_reply, BodyPart, GameError, GameSession};

#[test]
fn starting_a_round_clears_then_draws_the_gallows() {
    let surface = RecordingSurface::new();
    let mut session = GameSession::new(surface.clone());
    session.begin_round("book").unwrap();

    assert_eq!(
        surface.ops(),
        vec![
            Op::Clear(0.0, 0.0, SURFACE_W, SURFACE_H),
            Op::Fill(95.0, 10.0, 150.0, 10.0),  // top beam
            Op::Fill(245.0, 10.0, 10.0, 50.0),  // noose
            Op::Fill(95.0, 10.0, 10.0, 400.0),  // upright
            Op::Fill(10.0, 410.0, 175.0, 10.0), // base
        ]
    );
}

#[test]
fn body_parts_follow_the_fixed_reveal_order() {
    let order: Vec<Option<BodyPart>> = (0..=7).map(BodyPart::for_wrong_count).collect();
    assert_eq!(
        order,
        vec![
            None,
            Some(BodyPart::Head),
            Some(BodyPart::Torso),
            Some(BodyPart::RightArm),
            Some(BodyPart::LeftArm),
            Some(BodyPart::RightLeg),
            Some(BodyPart::LeftLeg),
            None,
        ]
    );
}

#[test]
fn word_holder_text_is_empty_before_the_first_round() {
    let session = GameSession::new(RecordingSurface::new());
    assert_eq!(session.word_holder_text(), "");
}

#[test]
fn word_holder_text_has_no_stray_whitespace() {
    let surface = RecordingSurface::new();
    let mut session = GameSession::new(surface);
    session.begin_round("a").unwrap();
    assert_eq!(session.word_holder_text(), "_");

    session.begin_round("banana").unwrap();
    session.guess("a").unwrap();
    assert_eq!(session.word_holder_text(), "_ a _ a _ a");
}

#[test]
fn guesses_text_joins_history_in_guess_order() {
    let surface = RecordingSurface::new();
    let mut session = GameSession::new(surface);
    session.begin_round("cat").unwrap();
    assert_eq!(session.guesses_text(), "Guesses: ");

    session.guess("a").unwrap();
    session.guess("c").unwrap();
    assert_eq!(session.guesses_text(), "Guesses: a, c");

    session.guess("z").unwrap();
    assert_eq!(session.guesses_text(), "Guesses: a, c, z");
}

#[test]
fn word_reply_decoding_accepts_well_formed_bodies() {
    assert_eq!(parse_word_reply(r#"{"word":"book"}"#).unwrap(), "book");
    // Service casing is normalized away.
    assert_eq!(parse_word_reply(r#"{"word":"BOOK"}"#).unwrap(), "book");
    assert_eq!(parse_word_reply(r#"{"word":" cat "}"#).unwrap(), "cat");
}

#[test]
fn word_reply_decoding_rejects_unusable_bodies() {
    for bad in [r#"{}"#, r#"{"word":""}"#, r#"{"word":"   "}"#, "not json", ""] {
        assert!(
            matches!(parse_word_reply(bad), Err(GameError::WordFetch(_))),
            "body {bad:?} should be rejected"
        );
    }
}
