#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rpt() -> Command {
    cargo_bin_cmd!("rpairtime")
}

/// Unique config path inside the system temp dir; any existing file is removed
/// so the command runs on defaults.
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpairtime.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh input file and return its path
pub fn write_input(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_input.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write input file");
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Small dataset: 143 and 218 share two projects, 110 overlaps briefly.
pub const SAMPLE: &str = "\
143, 12, 2013-11-01, 2014-01-05
218, 10, 2012-05-16, 2012-05-20
143, 10, 2009-01-01, 2011-04-27
218, 12, 2013-12-01, 2014-01-01
110, 12, 2013-12-30, 2014-02-01
218, 10, 2010-01-01, 2010-01-11
";
