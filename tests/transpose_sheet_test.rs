// Sheet-level transposition scenarios and properties

use chord_transposer_wasm::{transpose, ChromaticScale, KeyRole, SemitoneOffset, SheetTransposer};

const SONG: &str = "\
[Verse 1]
G        D          Em     C
Here comes the sun, little darling
  G    D/F#   Em7     Cadd9
it's been a long cold lonely winter

    Am7   D7sus4   G
and I say it's all right
";

#[test]
fn test_example_chords_and_lyrics() {
    let out = transpose("C", "D", "C  G  Am  F\nHello world").unwrap();
    assert_eq!(out.text, "D  A  Bm  G\nHello world");
    assert_eq!(out.offset.semitones(), 2);
}

#[test]
fn test_example_g_to_c() {
    let out = transpose("G", "C", "G D Em C").unwrap();
    assert_eq!(out.offset.semitones(), 5);
    assert_eq!(out.text, "C G Am F");
}

#[test]
fn test_example_same_key() {
    assert_eq!(transpose("C", "C", "C G Am F").unwrap().text, "C G Am F");
}

#[test]
fn test_example_flat_target_key() {
    let err = transpose("C", "Db", "anything at all").unwrap_err();
    assert_eq!(err.role, KeyRole::Target);
    assert_eq!(err.key, "Db");
}

#[test]
fn test_example_empty_sheet() {
    assert_eq!(transpose("C", "D", "").unwrap().text, "");
}

#[test]
fn test_example_extensions() {
    assert_eq!(transpose("C", "D", "Cmaj7 G#dim").unwrap().text, "Dmaj7 A#dim");
}

#[test]
fn test_full_song_up_two() {
    let out = transpose("G", "A", SONG).unwrap();
    let expected = "\
[Verse 1]
A        E          F#m     D
Here comes the sun, little darling
  A    E/F#   F#m7     Dadd9
it's been a long cold lonely winter

    Bm7   E7sus4   A
and I say it's all right
";
    // The F# after the slash is a scale name too, so it moves up to G#
    let expected = expected.replace("E/F#", "E/G#");
    assert_eq!(out.text, expected);
    assert_eq!(out.stats.line_count, SONG.split('\n').count());
    assert_eq!(out.stats.chord_lines, 3);
}

#[test]
fn test_round_trip_every_key_pair() {
    let line = "C  C#m7  D  D#dim  E  Fmaj7  F#sus4  G7  G#aug  Am  A#add9  BM7";
    for from in ChromaticScale::names() {
        for to in ChromaticScale::names() {
            let there = transpose(from, to, line).unwrap();
            let back = transpose(to, from, &there.text).unwrap();
            assert_eq!(back.text, line, "round trip {} -> {} -> {}", from, to, from);
        }
    }
}

#[test]
fn test_same_key_is_byte_identical() {
    let sheet = "  Am   \r\n\tla la la\r\n   \r\nBb  Db  C\n\n";
    for key in ChromaticScale::names() {
        assert_eq!(transpose(key, key, sheet).unwrap().text, sheet);
    }
}

#[test]
fn test_lyric_and_blank_lines_untouched_for_every_offset() {
    let sheet = "Am\nhello there\n   \n\t\nwhere did you go\nE";
    let original: Vec<&str> = sheet.split('\n').collect();
    for n in 0..12 {
        let out = SheetTransposer::transpose_by(SemitoneOffset::from_semitones(n), sheet);
        let lines: Vec<&str> = out.text.split('\n').collect();
        assert_eq!(lines.len(), original.len());
        for row in 1..5 {
            assert_eq!(lines[row], original[row]);
        }
    }
}

#[test]
fn test_filler_keeps_positions_when_widths_match() {
    // Every root here is natural and stays natural one step up (E->F, B->C)
    let line = "E  |  Bm7  -  E/B   (x2)";
    let out = transpose("E", "F", line).unwrap().text;
    assert_eq!(out, "F  |  Cm7  -  F/C   (x2)");
    assert_eq!(out.chars().count(), line.chars().count());
    for (a, b) in line.chars().zip(out.chars()) {
        if !a.is_ascii_uppercase() {
            assert_eq!(a, b);
        }
    }
}

#[test]
fn test_sharp_roots_lengthen_line_without_touching_filler() {
    let out = transpose("C", "C#", "C   F   G").unwrap().text;
    assert_eq!(out, "C#   F#   G#");
}

#[test]
fn test_unrecognized_roots_pass_through() {
    let out = transpose("C", "G", "C  Db  Bbm7  E#  G").unwrap();
    assert_eq!(out.text, "G  Db  Bbm7  E#  D");
    assert_eq!(out.stats.unrecognized_chords, 3);
    assert_eq!(out.stats.transposed_chords, 2);
}

#[test]
fn test_invalid_keys() {
    for bad in ["Db", "Bb", "c", "H", "", " C", "C# ", "Cmaj"] {
        assert!(transpose(bad, "C", "C").is_err(), "original key {:?}", bad);
        assert!(transpose("C", bad, "C").is_err(), "target key {:?}", bad);
    }
}

#[test]
fn test_lyric_starting_with_chord_letter_is_treated_as_chords() {
    // Known misfire: "Go now" starts with G, so G is read as a chord
    let out = transpose("C", "D", "Go now").unwrap();
    assert_eq!(out.text, "Ao now");
}
