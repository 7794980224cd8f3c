//! Durable storage: the whole planner state as one JSON file on disk.
//!
//! The document holds the two named aggregates (`team`, `games`) and is
//! always read and written whole. First load with no file seeds the
//! built-in default roster and an empty game list; a file that exists but
//! doesn't parse is a load error, not a silent reset.

use crate::models::{Planner, Player, Position};
use std::io;
use std::path::PathBuf;

pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> io::Result<Planner> {
        if !self.path.exists() {
            log::info!(
                "No saved data at {}; starting with the default roster",
                self.path.display()
            );
            return Ok(Planner::with_team(default_team()));
        }
        let raw = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save(&self, planner: &Planner) -> io::Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let json = serde_json::to_string_pretty(planner)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(&self.path, json)
    }
}

/// Starter roster for a fresh install: 2 goalies, 12 forwards, 8 defenders.
pub fn default_team() -> Vec<Player> {
    use Position::{Defender, Forward, Goalie};
    [
        ("Ivan Ivanov", 7, Forward),
        ("Petr Petrov", 10, Forward),
        ("Sidor Sidorov", 5, Defender),
        ("Kirill Kozlov", 1, Goalie),
        ("Stepan Smirnov", 15, Forward),
        ("Viktor Volkov", 8, Defender),
        ("Mikhail Medvedev", 12, Forward),
        ("Oleg Orlov", 3, Defender),
        ("Semyon Sokolov", 9, Forward),
        ("Leonid Lebedev", 2, Defender),
        ("Nikita Novikov", 20, Forward),
        ("Maxim Morozov", 4, Defender),
        ("Pavel Pavlov", 11, Forward),
        ("Savely Semenov", 6, Defender),
        ("Gleb Golubev", 13, Forward),
        ("Vadim Vorobyov", 14, Forward),
        ("Sergei Solovyov", 16, Forward),
        ("Yegor Zhukov", 17, Defender),
        ("Zakhar Zaitsev", 18, Forward),
        ("Lev Lisitsyn", 19, Forward),
        ("Boris Belov", 21, Defender),
        ("Timur Chernov", 22, Goalie),
    ]
    .into_iter()
    .map(|(name, number, position)| Player::new(name, number, position))
    .collect()
}
