//! Integration tests for the theory engine and the writing exercise, through the public API only.

use pretty_assertions::assert_eq;
use songsmith::{circle::CIRCLE_OF_FIFTHS, prelude::*};

const MAJOR_SCALE_OFFSETS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

fn labels(chords: &[DiatonicChord]) -> Vec<String> {
    chords.iter().map(|c| c.label().to_string()).collect()
}

#[test]
fn chords_follow_the_major_scale_in_every_key() -> Result<(), Error> {
    for name in CIRCLE_OF_FIFTHS {
        let key = Key::try_from(name)?;
        let chords = chords_in_key(name)?;
        assert_eq!(chords.len(), 7, "key {}", name);

        let tonic = resolve_note_index(name).expect("circle keys resolve");
        let positions = chords
            .iter()
            .map(|chord| chord_root(chord.label()).expect("chord labels resolve").position())
            .collect::<Vec<_>>();
        let expected = MAJOR_SCALE_OFFSETS
            .iter()
            .map(|offset| (tonic + offset) % 12)
            .collect::<Vec<_>>();
        assert_eq!(positions, expected, "key {}", name);

        // same key, same chords
        assert_eq!(labels(&key.chords()), labels(&chords));
    }
    Ok(())
}

#[test]
fn enharmonic_spellings_resolve_to_the_same_position() {
    for (sharp, flat) in [("C#", "Db"), ("D#", "Eb"), ("F#", "Gb"), ("G#", "Ab"), ("A#", "Bb")] {
        assert_eq!(resolve_note_index(sharp), resolve_note_index(flat));
        assert!(resolve_note_index(sharp).is_some());
    }
    assert_eq!(resolve_note_index("H"), None);
    assert_eq!(resolve_note_index(""), None);
}

#[test]
fn unknown_keys_are_errors() {
    assert!(matches!(
        chords_in_key("H"),
        Err(Error::UnknownNote { .. } | Error::UnknownKey { .. })
    ));
}

#[test]
fn dominants_walk_the_whole_circle() -> Result<(), Error> {
    for name in CIRCLE_OF_FIFTHS {
        let start = Key::try_from(name)?;
        let mut key = start;
        for _ in 0..12 {
            key = key.related().expect("circle keys have relations").dominant;
        }
        assert_eq!(key, start);

        let mut key = start;
        for _ in 0..12 {
            key = key.related().expect("circle keys have relations").subdominant;
        }
        assert_eq!(key, start);
    }
    Ok(())
}

#[test]
fn related_keys_of_flat_keys() -> Result<(), Error> {
    let related = Key::try_from("Eb")?.related().expect("Eb is on the circle");
    assert_eq!(related.dominant.name(), "Bb");
    assert_eq!(related.subdominant.name(), "Ab");
    assert_eq!(related.relative_minor, "Cm");
    assert_eq!(related.parallel_minor, "Ebm");
    Ok(())
}

#[test]
fn suggestions() -> Result<(), Error> {
    let key = Key::try_from("C")?;
    assert_eq!(suggest_next::<&str>(&[], &key), ["C", "Dm", "Em", "F"]);
    assert_eq!(suggest_next(&["G"], &key), ["C", "Am", "F"]);
    assert_eq!(suggest_next(&["C", "F", "G"], &key), ["C", "Am", "F"]);
    // a bare root matches the degree with that root
    assert_eq!(suggest_next(&["D"], &key), suggest_next(&["Dm"], &key));
    // borrowed chords fall back to the whole key
    assert_eq!(suggest_next(&["Bb"], &key), labels(&key.chords()));
    Ok(())
}

#[test]
fn templates() -> Result<(), Error> {
    let key = Key::try_from("G")?;
    assert_eq!(apply_template(&["I", "IV", "V", "I"], &key), ["G", "C", "D", "G"]);
    assert_eq!(apply_template(&["i", "iv", "v"], &key), ["G", "C", "D"]);
    assert_eq!(apply_template(&["I", "Cadd9"], &key), ["G", "Cadd9"]);

    let key = Key::try_from("F")?;
    assert_eq!(apply_template(&["I", "bVII", "IV"], &key), ["F", "Eb", "Bb"]);

    let mut progression = Progression::new();
    progression.add("Am");
    progression.apply_template(&["I", "V", "vi", "IV"], &key);
    assert_eq!(progression.chords(), ["F", "C", "Dm", "Bb"]);
    Ok(())
}

#[test]
fn timed_exercise() -> Result<(), Error> {
    let source = PromptSource::from_json(r#"["rusted key", "vinyl record", "fog rolling in"]"#)?;
    let mut exercise =
        Exercise::new(source, Box::new(SilentChime)).with_picker(PromptPicker::new(Some(7)));
    assert_eq!(exercise.state(), ExerciseState::Idle);

    exercise.start();
    assert_eq!(exercise.formatted_time(), "10:00");
    for _ in 0..300 {
        exercise.tick();
    }
    let prompt = exercise.prompt().map(str::to_string);
    exercise.new_prompt();
    assert_ne!(exercise.prompt().map(str::to_string), prompt);
    assert_eq!(exercise.remaining(), 300);

    for _ in 0..299 {
        assert!(matches!(exercise.tick(), TickOutcome::Running(_)));
    }
    assert_eq!(exercise.tick(), TickOutcome::Completed);
    assert_eq!(exercise.state(), ExerciseState::Complete);
    assert_eq!(exercise.tick(), TickOutcome::Ignored);
    assert_eq!(exercise.remaining(), 0);
    assert!(!exercise.is_ticking());

    exercise.reset();
    assert_eq!(exercise.state(), ExerciseState::Idle);
    assert_eq!(exercise.prompt(), None);
    Ok(())
}
