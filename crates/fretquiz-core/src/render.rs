//! ASCII fretboard diagrams.
//!
//! Every diagram is six lines, thinnest string on top:
//!
//! ```text
//! e -----------   3 -----------*
//! B -----------   5 -----------*
//! ...
//! E ===========   1 ===========*
//! ```
//!
//! Renderers only format data; validation happens before they are called.

use comfy_table::{Cell, Table};

use crate::answer::Answer;
use crate::checker::RoundResult;
use crate::error::QuizError;
use crate::theory::{
    flat_to_sharp, is_flat, is_sharp, note_at, sharp_to_flat, GuitarString, PitchClass, Spelling,
    NUM_STRINGS,
};

const SEGMENT_WIDTH: usize = 11;

/// Mark drawn next to a correctly named note.
pub const RIGHT_MARK: &str = "✓";
/// Mark drawn next to a wrongly named note.
pub const WRONG_MARK: &str = "X";

fn segment(string: GuitarString) -> String {
    let c = if string.is_thick() { "=" } else { "-" };
    c.repeat(SEGMENT_WIDTH)
}

fn draw_string(string: GuitarString, label: &str) -> String {
    let line = segment(string);
    format!("{string} {line}  {label} {line}*")
}

/// The question: a fret number on each string.
pub fn render_riddle(frets: &[u8; NUM_STRINGS]) -> String {
    GuitarString::ALL
        .iter()
        .zip(frets)
        .map(|(&string, fret)| draw_string(string, &format!("{fret:>2}")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Label for a revealed note: `"  G  "` or both spellings, e.g. `"F#/Gb"`.
///
/// The spelling preference picks which name comes first.
fn reveal_label(note: PitchClass, spelling: Spelling) -> Result<String, QuizError> {
    let name = note.name(spelling);
    let label = if is_sharp(name) {
        format!("{name}/{}", sharp_to_flat(name)?)
    } else if is_flat(name) {
        format!("{name}/{}", flat_to_sharp(name)?)
    } else {
        format!("  {name}  ")
    };
    Ok(label)
}

/// The correct notes, with both spellings shown for accidentals.
pub fn render_answer(
    notes: &[PitchClass; NUM_STRINGS],
    spelling: Spelling,
) -> Result<String, QuizError> {
    let lines = GuitarString::ALL
        .iter()
        .zip(notes)
        .map(|(&string, &note)| Ok(draw_string(string, &reveal_label(note, spelling)?)))
        .collect::<Result<Vec<_>, QuizError>>()?;
    Ok(lines.join("\n"))
}

/// The user's answer annotated per string.
///
/// A right answer shows the canonical name; a wrong one shows what the user
/// typed.
pub fn render_result(
    result: &RoundResult,
    answer: &Answer,
    correct: &[PitchClass; NUM_STRINGS],
) -> String {
    let mut lines = vec!["Your answer is:".to_string()];
    for (&string, (&right, note)) in GuitarString::ALL
        .iter()
        .zip(result.marks().iter().zip(correct))
    {
        let shown = if right {
            note.sharp_name()
        } else {
            answer.get(string.index()).unwrap_or("?")
        };
        let mark = if right { RIGHT_MARK } else { WRONG_MARK };
        let line = segment(string);
        lines.push(format!("{string} {line}  {shown:<2} {mark} {line}*"));
    }
    lines.join("\n")
}

/// Every note on every string for frets `0..=neck_length`.
pub fn render_chart(neck_length: u8, spelling: Spelling) -> String {
    let mut table = Table::new();

    let mut header = vec![Cell::new("String")];
    header.extend((0..=neck_length).map(Cell::new));
    table.set_header(header);

    for string in GuitarString::ALL {
        let mut row = vec![Cell::new(string.label())];
        row.extend((0..=neck_length).map(|fret| Cell::new(note_at(string, fret).name(spelling))));
        table.add_row(row);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::check_answer;
    use crate::riddle::Riddle;

    fn example_riddle() -> Riddle {
        Riddle::new(&[3, 5, 7, 2, 0, 12], 12).unwrap()
    }

    #[test]
    fn riddle_diagram() {
        let out = render_riddle(example_riddle().frets());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "e -----------   3 -----------*");
        assert_eq!(lines[3], "D ===========   2 ===========*");
        assert_eq!(lines[5], "E ===========  12 ===========*");
    }

    #[test]
    fn answer_diagram_shows_both_spellings() {
        let riddle = Riddle::new(&[3, 5, 7, 2, 0, 2], 12).unwrap();
        let notes = riddle.correct_notes();

        let sharps = render_answer(&notes, Spelling::Sharps).unwrap();
        let lines: Vec<&str> = sharps.lines().collect();
        assert_eq!(lines[0], "e -----------    G   -----------*");
        assert_eq!(lines[5], "E ===========  F#/Gb ===========*");

        let flats = render_answer(&notes, Spelling::Flats).unwrap();
        assert!(flats.ends_with("E ===========  Gb/F# ===========*"));
    }

    #[test]
    fn result_diagram() {
        let riddle = Riddle::new(&[3, 5, 7, 2, 0, 1], 12).unwrap();
        let answer = Answer::parse("G E D E Bb F#");
        let result = check_answer(&answer, &riddle).unwrap();
        let out = render_result(&result, &answer, &riddle.correct_notes());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Your answer is:");
        assert_eq!(lines[1], "e -----------  G  ✓ -----------*");
        assert_eq!(lines[5], "A ===========  Bb X ===========*");
        assert_eq!(lines[6], "E ===========  F# X ===========*");
    }

    #[test]
    fn right_flat_answer_shows_canonical_name() {
        let riddle = Riddle::new(&[0, 0, 0, 0, 0, 2], 12).unwrap();
        let answer = Answer::parse("E B G D A Gb");
        let result = check_answer(&answer, &riddle).unwrap();
        let out = render_result(&result, &answer, &riddle.correct_notes());
        assert!(out.ends_with("E ===========  F# ✓ ===========*"));
    }

    #[test]
    fn chart_lists_every_fret() {
        let chart = render_chart(12, Spelling::Flats);
        assert!(chart.contains("String"));
        assert!(chart.contains("Gb"));
        assert!(!chart.contains("F#"));
        assert!(chart.contains("12"));
    }
}
