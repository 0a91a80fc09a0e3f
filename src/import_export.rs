//! CSV roster import and schedule export.

use crate::models::{MatchSet, MatchStatus, Participant};
use serde::Serialize;
use std::io::{self, Read, Write};

const MATCH_HEADER: [&str; 11] = [
    "id",
    "group",
    "round",
    "position",
    "team1",
    "team2",
    "score1",
    "score2",
    "status",
    "winner",
    "next_match_id",
];

#[derive(Serialize)]
struct MatchRow<'a> {
    id: &'a str,
    group: Option<&'a str>,
    round: Option<u32>,
    position: Option<u32>,
    team1: &'a str,
    team2: &'a str,
    score1: u32,
    score2: u32,
    status: MatchStatus,
    winner: Option<&'a str>,
    next_match_id: Option<&'a str>,
}

/// Read participant names from a CSV with a `name` header column.
/// Other columns are ignored and rows may be shorter than the header; blank names are skipped.
pub fn read_participants<R: Read>(reader: R) -> Result<Vec<Participant>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let idx = rdr
        .headers()?
        .iter()
        .position(|h| h.eq_ignore_ascii_case("name"))
        .ok_or_else(|| {
            csv::Error::from(io::Error::new(
                io::ErrorKind::InvalidData,
                "roster CSV has no 'name' column",
            ))
        })?;
    let mut names = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let name = record.get(idx).unwrap_or("");
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

/// Write the header and then every match as one CSV row, in schedule order.
pub fn write_matches<W: Write>(writer: W, matches: &MatchSet) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(MATCH_HEADER)?;
    for m in matches {
        wtr.serialize(MatchRow {
            id: &m.id,
            group: m.group.as_deref(),
            round: m.round,
            position: m.position,
            team1: &m.team_1,
            team2: &m.team_2,
            score1: m.score_1,
            score2: m.score_2,
            status: m.status,
            winner: m.winner.as_deref(),
            next_match_id: m.next_match_id.as_deref(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}
