use assert_cmd::cargo;

/// Base command with the ambient env fallbacks stripped, so results do not
/// depend on the machine running the tests.
fn relnotes() -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!();
    cmd.env_remove("GITHUB_TOKEN").env_remove("RELNOTES_MODEL");
    cmd
}

fn with_required_args(cmd: &mut assert_cmd::Command, commits: &str) {
    cmd.args([
        "--github-token",
        "ghp_test",
        "--repo-owner",
        "octo",
        "--repo-name",
        "widgets",
        "--version",
        "1.2.0",
        "--commits",
        commits,
    ]);
}

#[test]
fn prints_help() {
    relnotes()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage"));
}

#[test]
fn missing_required_args_exit_one() {
    relnotes()
        .assert()
        .code(1)
        .stderr(predicates::str::contains("--repo-owner"));
}

#[test]
fn empty_commit_list_prints_notice_and_fails() {
    let mut cmd = relnotes();
    with_required_args(&mut cmd, "[]");

    cmd.assert()
        .code(1)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains(
            "## What's Changed\n\nNo commits found since last release.",
        ));
}

#[test]
fn malformed_commits_json_fails_with_error_prefix() {
    let mut cmd = relnotes();
    with_required_args(&mut cmd, "definitely not json");

    cmd.assert()
        .code(1)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::starts_with("Error: "));
}

#[test]
fn commit_record_missing_author_is_rejected() {
    let mut cmd = relnotes();
    with_required_args(&mut cmd, r#"[{"message":"no author here"}]"#);

    cmd.assert()
        .code(1)
        .stderr(predicates::str::starts_with("Error: "));
}

#[test]
fn blank_token_is_rejected_before_any_request() {
    let mut cmd = relnotes();
    cmd.args([
        "--github-token",
        "  ",
        "--repo-owner",
        "octo",
        "--repo-name",
        "widgets",
        "--version",
        "1.2.0",
        "--commits",
        r#"[{"message":"Fix crash on startup","author":"alice"}]"#,
    ]);

    cmd.assert()
        .code(1)
        .stderr(predicates::str::contains("--github-token must not be empty"));
}
