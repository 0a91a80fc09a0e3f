//! Integration tests for CSV roster import and schedule export.

use tournament_organizer::import_export::{read_participants, write_matches};
use tournament_organizer::{apply_result, build_bracket, MatchSet, Score};

const HEADER: &str = "id,group,round,position,team1,team2,score1,score2,status,winner,next_match_id";

#[test]
fn roster_csv_is_trimmed_and_skips_blank_names() {
    let csv = "name,city\n  Lions , Lisbon\n,Porto\nTigers,Braga\n\nBears\n";
    let names = read_participants(csv.as_bytes()).unwrap();
    assert_eq!(names, vec!["Lions", "Tigers", "Bears"]);
}

#[test]
fn roster_rows_shorter_than_the_header_are_read() {
    let csv = "city,name,coach\nLisbon,Lions\nPorto\nBraga,Tigers,Silva\n";
    let names = read_participants(csv.as_bytes()).unwrap();
    assert_eq!(names, vec!["Lions", "Tigers"]);
}

#[test]
fn roster_csv_without_name_column_fails() {
    let csv = "team\nLions\n";
    assert!(read_participants(csv.as_bytes()).is_err());
}

#[test]
fn schedule_export_has_one_row_per_match() {
    let names: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
    let mut set = MatchSet::new(build_bracket(&names).unwrap()).unwrap();
    apply_result(&mut set, "match_r1_1", Score::new(3, 1)).unwrap();

    let mut out = Vec::new();
    write_matches(&mut out, &set).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], HEADER);
    assert_eq!(lines[1], "match_r1_1,,1,1,A,B,3,1,completed,A,match_r2_0");
    assert_eq!(lines[2], "match_r2_0,,2,0,C,A,0,0,scheduled,,");
    assert_eq!(lines.len(), 3);
}

#[test]
fn empty_schedule_export_still_has_the_header() {
    let mut out = Vec::new();
    write_matches(&mut out, &MatchSet::default()).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().collect::<Vec<_>>(), vec![HEADER]);
}
