#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use eaas::catalog::Catalog;
use eaas::core::RandomSource;
use eaas::models::{Category, ExcuseRecord};
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated config dir + database for one CLI test.
pub struct Sandbox {
    pub dir: TempDir,
    pub db: String,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let db = dir.path().join("eaas.sqlite").to_string_lossy().to_string();
        Self { dir, db }
    }

    pub fn config_file(&self) -> PathBuf {
        self.dir.path().join("eaas.conf")
    }

    /// `eaas --db <sandbox db>` with the config dir pointed at the sandbox.
    pub fn eaas(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("eaas");
        cmd.env("EAAS_CONFIG_DIR", self.dir.path())
            .env_remove("COLORFGBG")
            .args(["--db", &self.db]);
        cmd
    }
}

pub fn record(id: &str, category: Category) -> ExcuseRecord {
    ExcuseRecord::new(id, &format!("excuse {id}"), category, "🙃")
}

/// Catalog `[a, b, c]` of tech excuses.
pub fn abc_catalog() -> Catalog {
    Catalog::new(vec![
        record("a", Category::Tech),
        record("b", Category::Tech),
        record("c", Category::Tech),
    ])
    .expect("valid catalog")
}

/// Replays a fixed list of indices, cycling.
pub struct ScriptedRandom {
    picks: Vec<usize>,
    pos: usize,
}

impl ScriptedRandom {
    pub fn new(picks: &[usize]) -> Self {
        Self {
            picks: picks.to_vec(),
            pos: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in_range(&mut self, n: usize) -> usize {
        let v = self.picks[self.pos % self.picks.len()] % n;
        self.pos += 1;
        v
    }
}
