//! Command-line organizer: create tournaments, register participants, generate the schedule
//! and record scores until a champion emerges.
//! Run with: cargo run --bin organizer -- --help
//! Data lives in one JSON file: `--data <path>` or env TOURNAMENT_DATA (default tournaments.json).
//! Log level via RUST_LOG (default warn).

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::fs::File;
use std::path::PathBuf;
use tournament_organizer::import_export::{read_participants, write_matches};
use tournament_organizer::{
    generate_matches, record_result, FileStore, Match, MatchStatus, Score, Tournament,
    TournamentFilter, TournamentFormat, TournamentId, TournamentRepository, DEFAULT_GROUP_SIZE,
};

#[derive(Parser)]
#[command(name = "organizer", version, about = "Round-robin groups and knockout brackets")]
struct Cli {
    /// JSON file holding all tournaments.
    #[arg(long, env = "TOURNAMENT_DATA", default_value = "tournaments.json", global = true)]
    data: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new tournament.
    Create {
        name: String,
        #[arg(long, default_value = "football")]
        sport: String,
        /// groups, knockout or mixed
        #[arg(long, default_value = "groups")]
        format: TournamentFormat,
        /// Planned number of participants.
        #[arg(long, default_value_t = 4)]
        teams_count: usize,
        #[arg(long, default_value_t = DEFAULT_GROUP_SIZE)]
        teams_per_group: usize,
    },
    /// List tournaments.
    List {
        /// all, active or completed
        #[arg(long, default_value = "all", value_parser = parse_filter)]
        filter: TournamentFilter,
    },
    /// Show roster and matches.
    Show { id: TournamentId },
    /// Register a participant.
    AddTeam { id: TournamentId, name: String },
    /// Remove a participant.
    RemoveTeam { id: TournamentId, name: String },
    /// Register participants from a CSV file with a `name` column.
    ImportTeams { id: TournamentId, file: PathBuf },
    /// Generate the match schedule and start the tournament.
    Generate {
        id: TournamentId,
        /// Seed for a reproducible draw.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Record a match score.
    Score {
        id: TournamentId,
        match_id: String,
        score1: u32,
        score2: u32,
    },
    /// Write the schedule as CSV (stdout unless --output).
    Export {
        id: TournamentId,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Delete a tournament.
    Delete { id: TournamentId },
}

fn parse_filter(s: &str) -> Result<TournamentFilter, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "all" => Ok(TournamentFilter::All),
        "active" => Ok(TournamentFilter::Active),
        "completed" => Ok(TournamentFilter::Completed),
        other => Err(format!("unknown filter '{}' (expected all, active or completed)", other)),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));
    let cli = Cli::parse();
    let store = FileStore::new(cli.data);
    log::debug!("using data file {}", store.path().display());
    let mut repo = TournamentRepository::new(store);

    match cli.command {
        Command::Create {
            name,
            sport,
            format,
            teams_count,
            teams_per_group,
        } => {
            let t = Tournament::new(&name, sport, format, teams_count, teams_per_group)?;
            let (id, name) = (t.id, t.name.clone());
            repo.insert(t)?;
            println!("Created tournament '{}' ({})", name, id);
        }
        Command::List { filter } => {
            let tournaments = repo.list(filter)?;
            if tournaments.is_empty() {
                println!("No tournaments found.");
            }
            for t in tournaments {
                print!("{}  {}  [{} | {} | {}]", t.id, t.name, t.sport, t.format, t.status);
                match t.champion() {
                    Some(w) => println!("  winner: {}", w),
                    None => println!("  {}/{} teams", t.teams.len(), t.teams_count),
                }
            }
        }
        Command::Show { id } => print_tournament(&repo.get(id)?),
        Command::AddTeam { id, name } => {
            let count = repo.update(id, |t| {
                t.add_team(&name)?;
                Ok(t.teams.len())
            })?;
            println!("Added '{}' ({} registered)", name.trim(), count);
        }
        Command::RemoveTeam { id, name } => {
            repo.update(id, |t| t.remove_team(&name))?;
            println!("Removed '{}'", name.trim());
        }
        Command::ImportTeams { id, file } => {
            let reader =
                File::open(&file).with_context(|| format!("opening {}", file.display()))?;
            let names = read_participants(reader)
                .with_context(|| format!("reading roster from {}", file.display()))?;
            let count = names.len();
            repo.update(id, |t| names.iter().try_for_each(|n| t.add_team(n)))?;
            println!("Imported {} participant(s)", count);
        }
        Command::Generate { id, seed } => {
            let mut rng: Box<dyn RngCore> = match seed {
                Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
                None => Box::new(rand::thread_rng()),
            };
            let count = repo.update(id, |t| {
                generate_matches(t, rng.as_mut())?;
                Ok(t.matches.len())
            })?;
            println!("Generated {} match(es)", count);
        }
        Command::Score {
            id,
            match_id,
            score1,
            score2,
        } => {
            let outcome =
                repo.update(id, |t| record_result(t, &match_id, Score::new(score1, score2)))?;
            match (&outcome.winner, &outcome.champion) {
                (_, Some(champion)) => println!("Tournament finished! Champion: {}", champion),
                (Some(winner), None) => println!("{} won the match", winner),
                (None, None) => println!("Score updated; the match is level"),
            }
        }
        Command::Export { id, output } => {
            let t = repo.get(id)?;
            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    write_matches(file, &t.matches)?;
                }
                None => write_matches(std::io::stdout().lock(), &t.matches)?,
            }
        }
        Command::Delete { id } => {
            repo.delete(id)?;
            println!("Deleted tournament {}", id);
        }
    }
    Ok(())
}

fn print_tournament(t: &Tournament) {
    println!("{} ({})", t.name, t.id);
    println!(
        "sport: {}  format: {}  status: {}  created: {}",
        t.sport,
        t.format,
        t.status,
        t.date.format("%Y-%m-%d")
    );
    if let Some(w) = t.champion() {
        println!("champion: {}", w);
    }
    println!();
    println!("Participants ({}/{}):", t.teams.len(), t.teams_count);
    for (i, name) in t.teams.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, name);
    }
    if t.matches.is_empty() {
        println!();
        println!("No matches generated yet.");
        return;
    }
    for (label, matches) in t.matches.by_group() {
        println!();
        println!("Group {}:", label);
        for m in matches {
            print_match(m);
        }
    }
    for (round, matches) in t.matches.by_round() {
        println!();
        println!("Round {}:", round);
        for m in matches {
            print_match(m);
        }
    }
}

fn print_match(m: &Match) {
    let slot = |name: &str| if name.is_empty() { "TBD".to_string() } else { name.to_string() };
    let status = match m.status {
        MatchStatus::Scheduled => "scheduled".to_string(),
        MatchStatus::InProgress => format!("{}-{} in progress", m.score_1, m.score_2),
        MatchStatus::Completed => format!("{}-{} final", m.score_1, m.score_2),
    };
    println!(
        "  {:<20} {} vs {}  ({})",
        m.id,
        slot(&m.team_1),
        slot(&m.team_2),
        status
    );
}
