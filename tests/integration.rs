//! Integration tests for treemark


use std::fs;

use assert_cmd::Command;
use harness::{TestProject, tree_part};
use predicates::prelude::*;

#[test]
fn test_basic_tree_output() {
    let project = TestProject::new("proj");
    project.add_file("src/main.rs", "fn main() {}");
    project.add_file("src/lib.rs", "");
    project.add_file("README.md", "# proj");

    let (stdout, _stderr, success) = project.run(&[]);
    assert!(success, "treemark should succeed");
    assert_eq!(
        tree_part(&stdout),
        "proj/\n├── src/\n│   ├── lib.rs\n│   └── main.rs\n└── README.md"
    );
}

#[test]
fn test_include_mode_scenario() {
    let project = TestProject::new("proj");
    project.add_file("src/main.py", "print('hi')");
    project.add_file("README.txt", "readme");

    let (stdout, _stderr, success) = project.run(&["--mode", "include", "--include", ".py"]);
    assert!(success);
    assert_eq!(tree_part(&stdout), "proj/\n└── src/\n    └── main.py");
}

#[test]
fn test_include_extensions_without_dot() {
    let project = TestProject::new("proj");
    project.add_file("a.py", "");
    project.add_file("b.txt", "");
    project.add_file("c.PY", "");

    let (stdout, _stderr, success) = project.run(&["--mode", "include", "--include", "py"]);
    assert!(success);
    assert_eq!(tree_part(&stdout), "proj/\n├── a.py\n└── c.PY");
}

#[test]
fn test_exclude_mode() {
    let project = TestProject::new("proj");
    project.add_file("a.png", "");
    project.add_file("b.jpg", "");

    let (stdout, _stderr, success) = project.run(&["--mode", "exclude", "--exclude", ".png"]);
    assert!(success);
    assert_eq!(tree_part(&stdout), "proj/\n└── b.jpg");
}

#[test]
fn test_lists_ignored_outside_their_mode() {
    let project = TestProject::new("proj");
    project.add_file("a.png", "");
    project.add_file("b.jpg", "");

    // --exclude has no effect in include mode, and vice versa
    let (stdout, _stderr, success) = project.run(&[
        "--mode", "include", "--include", ".png", "--exclude", ".png",
    ]);
    assert!(success);
    assert_eq!(tree_part(&stdout), "proj/\n└── a.png");
}

#[test]
fn test_include_mode_without_list_shows_only_directories() {
    let project = TestProject::new("proj");
    project.add_file("docs/guide.md", "");
    project.add_file("notes.txt", "");

    let (stdout, _stderr, success) = project.run(&["--mode", "include"]);
    assert!(success);
    assert_eq!(tree_part(&stdout), "proj/\n└── docs/");
}

#[test]
fn test_git_folder_excluded_by_default() {
    let project = TestProject::new("proj");
    project.add_file(".git/HEAD", "ref: refs/heads/main");
    project.add_file("main.rs", "");

    let (stdout, _stderr, success) = project.run(&[]);
    assert!(success);
    assert_eq!(tree_part(&stdout), "proj/\n└── main.rs");
}

#[test]
fn test_exclude_folders_case_insensitive() {
    let project = TestProject::new("proj");
    project.add_file("Node_Modules/pkg/index.js", "");
    project.add_file("src/app.js", "");

    let (stdout, _stderr, success) = project.run(&["--exclude-folders", "node_modules"]);
    assert!(success);
    let tree = tree_part(&stdout);
    assert_eq!(tree, "proj/\n└── src/\n    └── app.js");
    assert!(!tree.contains("index.js"));
}

#[test]
fn test_exclude_folders_replaces_default() {
    let project = TestProject::new("proj");
    project.add_file(".git/HEAD", "");
    project.add_file("target/out", "");

    let (stdout, _stderr, success) = project.run(&["--exclude-folders", "target"]);
    assert!(success);
    assert_eq!(tree_part(&stdout), "proj/\n└── .git/\n    └── HEAD");
}

#[test]
fn test_artifacts_written() {
    let project = TestProject::new("proj");
    project.add_file("a.txt", "");

    let (stdout, _stderr, success) = project.run(&[]);
    assert!(success);

    let md_path = project.path().join("proj_tree.md");
    let txt_path = project.cwd().join("proj_tree.txt");
    assert_eq!(
        fs::read_to_string(&md_path).expect("markdown artifact"),
        "```\nproj/\n└── a.txt\n```"
    );
    assert_eq!(
        fs::read_to_string(&txt_path).expect("text artifact"),
        "proj/\n└── a.txt"
    );
    assert!(stdout.contains(&format!("Markdown file saved to: {}", md_path.display())));
    assert!(stdout.contains(&format!("Text file saved to: {}", txt_path.display())));
}

#[test]
fn test_markdown_artifact_shows_up_on_next_run() {
    let project = TestProject::new("proj");
    project.add_file("a.txt", "");

    let (_stdout, _stderr, success) = project.run(&[]);
    assert!(success);
    let (stdout, _stderr, success) = project.run(&["--no-save"]);
    assert!(success);
    assert_eq!(stdout.trim_end(), "proj/\n├── a.txt\n└── proj_tree.md");
}

#[test]
fn test_no_save_writes_nothing() {
    let project = TestProject::new("proj");
    project.add_file("a.txt", "");

    let (stdout, _stderr, success) = project.run(&["--no-save"]);
    assert!(success);
    assert!(!stdout.contains("saved to"));
    assert!(!project.path().join("proj_tree.md").exists());
    assert!(!project.cwd().join("proj_tree.txt").exists());
}

#[test]
fn test_repeated_runs_are_identical() {
    let project = TestProject::new("proj");
    project.add_file("Zeta/one.rs", "");
    project.add_file("alpha/two.rs", "");
    project.add_file("Beta.md", "");
    project.add_file("apple.md", "");

    let (first, _, ok1) = project.run(&["--no-save"]);
    let (second, _, ok2) = project.run(&["--no-save"]);
    assert!(ok1 && ok2);
    assert_eq!(first, second);
    assert_eq!(
        first.trim_end(),
        "proj/\n├── alpha/\n│   └── two.rs\n├── Zeta/\n│   └── one.rs\n├── apple.md\n└── Beta.md"
    );
}

#[test]
fn test_missing_path_reports_error() {
    let project = TestProject::new("proj");
    let missing = project.path().join("nope");

    Command::new(env!("CARGO_BIN_EXE_treemark"))
        .current_dir(project.cwd())
        .args(["--path", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: The path").and(predicate::str::contains("does not exist")));
}

#[test]
fn test_file_path_reports_not_a_directory() {
    let project = TestProject::new("proj");
    let file = project.add_file("a.txt", "");

    Command::new(env!("CARGO_BIN_EXE_treemark"))
        .current_dir(project.cwd())
        .args(["--path", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));

    assert!(!project.cwd().join("a.txt_tree.txt").exists());
}

#[test]
fn test_invalid_mode_rejected() {
    let project = TestProject::new("proj");

    Command::new(env!("CARGO_BIN_EXE_treemark"))
        .current_dir(project.cwd())
        .args(["--path", project.path().to_str().unwrap(), "--mode", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_config_file_supplies_defaults() {
    let project = TestProject::new("proj");
    project.add_file("a.rs", "");
    project.add_file("b.png", "");
    project.add_file("build/out.rs", "");

    let config = project.cwd().join("treemark.toml");
    fs::write(
        &config,
        format!(
            "path = {:?}\nexclude = [\".png\"]\nexclude_folders = [\"build\"]\n",
            project.path().to_string_lossy()
        ),
    )
    .unwrap();

    Command::new(env!("CARGO_BIN_EXE_treemark"))
        .current_dir(project.cwd())
        .args(["--config", config.to_str().unwrap(), "--no-save"])
        .assert()
        .success()
        .stdout("proj/\n└── a.rs\n");
}

#[test]
fn test_cli_flags_override_config_file() {
    let project = TestProject::new("proj");
    project.add_file("a.rs", "");
    project.add_file("b.png", "");

    let config = project.cwd().join("treemark.toml");
    fs::write(&config, "mode = \"exclude\"\nexclude = [\".png\"]\n").unwrap();

    let (stdout, _stderr, success) = project.run(&[
        "--config",
        config.to_str().unwrap(),
        "--mode",
        "include",
        "--include",
        ".png",
        "--no-save",
    ]);
    assert!(success);
    assert_eq!(stdout.trim_end(), "proj/\n└── b.png");
}

#[test]
fn test_bad_config_file_reports_error() {
    let project = TestProject::new("proj");
    let config = project.cwd().join("broken.toml");
    fs::write(&config, "exclude = \"not a list\"\n").unwrap();

    let (stdout, stderr, success) = project.run(&["--config", config.to_str().unwrap()]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error: failed to parse config file"), "{}", stderr);
}
