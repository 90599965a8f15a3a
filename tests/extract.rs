//! End-to-end tests against GRP archives written to a scratch directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use pretty_assertions::assert_eq;
use rgrp::grp::NAME_LEN;
use rgrp::{GrpError, GrpExtractor};

fn build_grp(members: &[(&str, Vec<u8>)]) -> Vec<u8> {
    let mut out = b"KenSilverman".to_vec();
    out.extend_from_slice(&(members.len() as u32).to_le_bytes());
    for (name, data) in members {
        let mut field = [0u8; NAME_LEN];
        field[..name.len()].copy_from_slice(name.as_bytes());
        out.extend_from_slice(&field);
        out.extend_from_slice(&(data.len() as u32).to_le_bytes());
    }
    for (_, data) in members {
        out.extend_from_slice(data);
    }
    out
}

fn sample_members() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("E1L1.MAP", (0..100u8).collect()),
        ("GOTHAM.MID", vec![0xAB; 50]),
        ("EMPTY.TXT", Vec::new()),
        ("GAME.CON", b"define GRAVITY 176\n".to_vec()),
    ]
}

fn write_grp(dir: &Path, members: &[(&str, Vec<u8>)]) -> PathBuf {
    let path = dir.join("DUKE3D.GRP");
    fs::write(&path, build_grp(members)).unwrap();
    path
}

#[test]
fn every_member_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let members = sample_members();
    let grp = GrpExtractor::open_path(&write_grp(dir.path(), &members)).unwrap();

    assert_eq!(grp.entries().len(), members.len());
    for (name, data) in &members {
        let entry = grp.find(&name.to_lowercase()).unwrap();
        assert_eq!(entry.file_name(), *name);
        assert_eq!(&grp.extract_to_memory(entry).unwrap(), data);
    }

    let mut expected = 16 + 16 * members.len() as u64;
    for (entry, (_, data)) in grp.entries().iter().zip(&members) {
        assert_eq!(entry.offset, expected);
        expected += data.len() as u64;
    }
}

#[test]
fn extracts_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let grp = GrpExtractor::open_path(&write_grp(dir.path(), &sample_members())).unwrap();

    let out = dir.path().join("gotham.mid");
    grp.extract_to_file(grp.find("gotham.mid").unwrap(), &out).unwrap();
    assert_eq!(fs::read(&out).unwrap(), vec![0xABu8; 50]);

    let out = dir.path().join("EMPTY.TXT");
    grp.extract_to_file(grp.find("empty.txt").unwrap(), &out).unwrap();
    assert_eq!(fs::metadata(&out).unwrap().len(), 0);
}

#[test]
fn not_a_grp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fake.grp");
    fs::write(&path, b"PK\x03\x04 this is a zip file").unwrap();
    assert!(matches!(
        GrpExtractor::open_path(&path),
        Err(GrpError::Format(_))
    ));
}

fn rgrp(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_rgrp"))
        .args(args)
        .current_dir(dir)
        .env_remove("RGRP_FILE")
        .output()
        .unwrap()
}

#[test]
fn cli_extracts_into_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_grp(dir.path(), &sample_members());

    let out = rgrp(dir.path(), &["e1l1.map"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let data = fs::read(dir.path().join("e1l1.map")).unwrap();
    assert_eq!(data, (0..100u8).collect::<Vec<_>>());
}

#[test]
fn cli_pipe_writes_stdout() {
    let dir = tempfile::tempdir().unwrap();
    write_grp(dir.path(), &sample_members());

    let out = rgrp(dir.path(), &["-p", "GAME.CON"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"define GRAVITY 176\n");
}

#[test]
fn cli_exit_codes() {
    let dir = tempfile::tempdir().unwrap();

    assert_eq!(rgrp(dir.path(), &[]).status.code(), Some(2));
    assert_eq!(rgrp(dir.path(), &["E1L1.MAP"]).status.code(), Some(3));

    fs::write(dir.path().join("BAD.GRP"), b"NotKenAtAll!\0\0\0\0").unwrap();
    assert_eq!(
        rgrp(dir.path(), &["-f", "BAD.GRP", "E1L1.MAP"]).status.code(),
        Some(4)
    );

    let mut absurd = b"KenSilverman".to_vec();
    absurd.extend_from_slice(&u32::MAX.to_le_bytes());
    fs::write(dir.path().join("HUGE.GRP"), absurd).unwrap();
    assert_eq!(
        rgrp(dir.path(), &["-f", "HUGE.GRP", "E1L1.MAP"]).status.code(),
        Some(4)
    );

    write_grp(dir.path(), &sample_members());
    let out = rgrp(dir.path(), &["missing.txt"]);
    assert_eq!(out.status.code(), Some(6));
    assert!(String::from_utf8_lossy(&out.stderr).contains("missing.txt"));
    assert!(!dir.path().join("missing.txt").exists());
}

#[test]
fn cli_truncated_archive_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let mut data = build_grp(&sample_members());
    data.truncate(data.len() - 5);
    fs::write(dir.path().join("DUKE3D.GRP"), data).unwrap();

    let out = rgrp(dir.path(), &["GAME.CON"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!dir.path().join("GAME.CON").exists());
}
