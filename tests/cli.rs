//! Command-line interface integration tests for the delaunay-voronoi binary.
//!
//! This module contains tests that verify the behavior of the command-line
//! interface, including argument validation, success scenarios, and error handling.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn exit_success() {
    let mut cmd = Command::cargo_bin("delaunay-voronoi").unwrap();
    cmd.arg("-v");
    cmd.arg("32");
    cmd.assert().success();
}

#[test]
fn cli_voronoi_summary() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("delaunay-voronoi")?;

    cmd.arg("-v").arg("32");
    cmd.arg("--seed").arg("7");
    cmd.env("RUST_LOG", "info");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Triangles:"))
        .stderr(predicate::str::contains("Voronoi Diagram Summary"));

    Ok(())
}

#[test]
fn cli_triangulate_mode() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("delaunay-voronoi")?;

    cmd.arg("--vertices").arg("20");
    cmd.arg("--mode").arg("triangulate");
    cmd.arg("--indexed");
    cmd.env("RUST_LOG", "info");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Delaunay Triangulation Summary"))
        .stderr(predicate::str::contains("Voronoi Diagram Summary").not());

    Ok(())
}

#[test]
fn cli_no_args() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("delaunay-voronoi")?;

    cmd.assert().failure().stderr(predicate::str::contains(
        "error: the following required arguments were not provided:",
    ));

    Ok(())
}

#[test]
fn cli_invalid_vertices_too_few() -> Result<(), Box<dyn std::error::Error>> {
    // This should be caught by clap's range validation
    let mut cmd = Command::cargo_bin("delaunay-voronoi")?;

    cmd.arg("--vertices").arg("2");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("2 is not in 3.."));

    Ok(())
}

#[test]
fn cli_invalid_mode() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("delaunay-voronoi")?;

    cmd.arg("-v").arg("10");
    cmd.arg("-m").arg("grahamscan");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'grahamscan'"));

    Ok(())
}

#[test]
fn cli_empty_coordinate_range() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("delaunay-voronoi")?;

    cmd.arg("-v").arg("10");
    cmd.arg("--min").arg("5");
    cmd.arg("--max").arg("-5");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Empty coordinate range"));

    Ok(())
}

#[test]
fn cli_deadline_exceeded() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("delaunay-voronoi")?;

    cmd.arg("-v").arg("3000");
    cmd.arg("--seed").arg("1");
    cmd.arg("--timeout-ms").arg("1");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Deadline exceeded"));

    Ok(())
}
