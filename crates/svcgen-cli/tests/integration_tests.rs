//! Integration tests for the svcgen binary.
//!
//! Each test runs the real binary against a temp fixture tree: one generated
//! gRPC server source file, scaffolded into temp output directories.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const WIDGET: &str = r#"package widgetv1

import (
	context "context"
)

type WidgetServiceServer interface {
	Create(context.Context, *CreateRequest) (*CreateResponse, error)
	Get(context.Context, *GetRequest) (*GetResponse, error)
	mustEmbedUnimplementedWidgetServiceServer()
}

type UnimplementedWidgetServiceServer struct {
}
"#;

/// A fixture tree: input dir with one generated source, empty output dirs.
struct Fixture {
    _temp: TempDir,
    input: PathBuf,
    out: PathBuf,
    subdomain_out: PathBuf,
    module_cache: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("gen/go/v1");
        fs::create_dir_all(&input).unwrap();
        fs::write(input.join("widget_grpc.pb.go"), WIDGET).unwrap();

        Self {
            input,
            out: temp.path().join("handlers/v1"),
            subdomain_out: temp.path().join("services"),
            module_cache: temp.path().join("modcache"),
            _temp: temp,
        }
    }

    /// A `svcgen gen` command pointed at this fixture.
    fn gen_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("svcgen").unwrap();
        cmd.args([
            "gen",
            "--in",
            self.input.to_str().unwrap(),
            "--out",
            self.out.to_str().unwrap(),
            "--subdomain-out",
            self.subdomain_out.to_str().unwrap(),
            "--module-cache",
            self.module_cache.to_str().unwrap(),
        ]);
        cmd
    }

    fn handler_path(&self) -> PathBuf {
        self.out.join("widget_handler.go")
    }

    fn service_path(&self) -> PathBuf {
        self.subdomain_out.join("widget_service.go")
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn gen_scaffolds_handler_and_service() {
    let fixture = Fixture::new();

    fixture.gen_cmd().assert().success();

    let handler = read(&fixture.handler_path());
    assert!(handler.starts_with("// Code generated by svcgen. DO NOT EDIT."));
    assert!(handler.contains("package v1"));
    assert!(handler.contains("type WidgetHandler struct {"));
    assert!(handler.contains("func NewWidgetHandler(widgetService svc.WidgetService) *WidgetHandler {"));
    assert!(handler.contains("return h.widgetService.Create(ctx, req)"));

    let service = read(&fixture.service_path());
    assert!(service.contains("package services"));
    assert!(service.contains("type WidgetService interface {"));
    assert!(service.contains("Create(ctx context.Context, req *widgetv1.CreateRequest) (*widgetv1.CreateResponse, error)"));
}

#[test]
fn rerun_without_overwrite_keeps_files_and_warns() {
    let fixture = Fixture::new();

    fixture.gen_cmd().assert().success();
    let handler_before = read(&fixture.handler_path());
    let service_before = read(&fixture.service_path());

    fixture
        .gen_cmd()
        .arg("--no-overwrite")
        .assert()
        .success()
        .stdout(predicate::str::contains("existing file kept"));

    assert_eq!(read(&fixture.handler_path()), handler_before);
    assert_eq!(read(&fixture.service_path()), service_before);
}

#[test]
fn rerun_with_overwrite_is_deterministic() {
    let fixture = Fixture::new();

    fixture.gen_cmd().assert().success();
    let handler_first = read(&fixture.handler_path());
    let service_first = read(&fixture.service_path());

    fixture.gen_cmd().assert().success();

    assert_eq!(read(&fixture.handler_path()), handler_first);
    assert_eq!(read(&fixture.service_path()), service_first);
}

#[test]
fn dry_run_reports_targets_without_writing() {
    let fixture = Fixture::new();

    fixture
        .gen_cmd()
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("would write"))
        .stdout(predicate::str::contains("widget_handler.go"));

    assert!(!fixture.handler_path().exists());
    assert!(!fixture.service_path().exists());
    assert!(!fixture.out.exists());
}

#[test]
fn custom_labels_flow_into_file_names_and_types() {
    let fixture = Fixture::new();

    fixture
        .gen_cmd()
        .args(["--domain", "Controller", "--subdomain", "Usecase"])
        .assert()
        .success();

    let controller = read(&fixture.out.join("widget_controller.go"));
    assert!(controller.contains("type WidgetController struct {"));
    assert!(controller.contains("widgetUsecase usecase.WidgetUsecase"));

    let usecase = read(&fixture.subdomain_out.join("widget_usecase.go"));
    assert!(usecase.contains("type WidgetUsecase interface {"));
}

#[test]
fn json_output_is_machine_readable() {
    let fixture = Fixture::new();

    let assert = fixture
        .gen_cmd()
        .args(["--output-format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["written"], 2);
    assert_eq!(summary["skipped"], 0);
    assert_eq!(summary["failed"], 0);
}

#[test]
fn quiet_gen_produces_no_stdout() {
    let fixture = Fixture::new();

    fixture
        .gen_cmd()
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(fixture.handler_path().exists());
}

#[test]
fn version_subcommand_prints_semver() {
    let mut cmd = Command::cargo_bin("svcgen").unwrap();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_emit_a_script() {
    let mut cmd = Command::cargo_bin("svcgen").unwrap();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("svcgen"));
}
