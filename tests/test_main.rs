use assert_cmd::Command;
use predicates::prelude::*;
use rstest::*;
use std::fs;
use tempfile::TempDir;

/// Isolated environment: own database file and a home without config
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn db_path(&self) -> std::path::PathBuf {
        self.dir.path().join("bm.db")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("bookmarker").unwrap();
        cmd.env("BOOKMARKER_DB_URL", self.db_path())
            .env("HOME", self.dir.path())
            .env("NO_COLOR", "1")
            .arg("--no-color");
        cmd
    }

    fn add(&self, url: &str, name: &str) {
        self.cmd()
            .args(["add", url, name, "--no-web"])
            .assert()
            .success();
    }
}

#[fixture]
fn sandbox() -> Sandbox {
    Sandbox {
        dir: tempfile::tempdir().unwrap(),
    }
}

#[rstest]
fn given_debug_flags_without_command_then_success(sandbox: Sandbox) {
    sandbox
        .cmd()
        .args(["-d", "-d"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Debug mode: debug"));
}

#[rstest]
fn given_two_adds_when_list_then_text_in_id_order(sandbox: Sandbox) {
    sandbox
        .cmd()
        .args(["add", "https://google.com", "Google"])
        .assert()
        .success()
        .stdout("1\n");
    sandbox
        .cmd()
        .args(["add", "https://reddit.com", "--name", "Reddit"])
        .assert()
        .success()
        .stdout("2\n");

    sandbox
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout("1. Google - https://google.com\n2. Reddit - https://reddit.com\n");
}

#[rstest]
fn given_bookmarks_when_list_json_then_name_and_url_only(sandbox: Sandbox) {
    sandbox.add("https://google.com", "Google");

    sandbox
        .cmd()
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout("[\n  {\n    \"name\": \"Google\",\n    \"url\": \"https://google.com\"\n  }\n]\n");
}

#[rstest]
fn given_bookmarks_when_list_md_then_markdown_links(sandbox: Sandbox) {
    sandbox.add("https://google.com", "Google");

    sandbox
        .cmd()
        .args(["list", "-m"])
        .assert()
        .success()
        .stdout("- [Google](https://google.com)\n");
}

#[rstest]
fn given_empty_store_when_list_then_usage_exit(sandbox: Sandbox) {
    sandbox
        .cmd()
        .arg("list")
        .assert()
        .code(64)
        .stderr(predicate::str::contains("No bookmarks found"));
}

#[rstest]
fn given_known_url_when_add_then_dup_exit_and_store_unchanged(sandbox: Sandbox) {
    sandbox.add("https://google.com", "Google");

    sandbox
        .cmd()
        .args(["add", "https://google.com", "Again", "--no-web"])
        .assert()
        .code(65);

    sandbox
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout("1. Google - https://google.com\n");
}

#[rstest]
fn given_invalid_url_when_add_then_usage_exit(sandbox: Sandbox) {
    sandbox
        .cmd()
        .args(["add", "not a url", "Broken", "--no-web"])
        .assert()
        .code(64);
}

#[rstest]
fn given_no_name_and_no_web_when_add_then_host_is_name(sandbox: Sandbox) {
    sandbox
        .cmd()
        .args(["add", "https://www.rust-lang.org/learn", "--no-web"])
        .assert()
        .success();

    sandbox
        .cmd()
        .args(["show", "1"])
        .assert()
        .success()
        .stdout("1. rust-lang.org - https://www.rust-lang.org/learn\n");
}

#[rstest]
fn given_bookmark_when_update_then_id_kept(sandbox: Sandbox) {
    sandbox.add("https://google.com", "Google");

    sandbox
        .cmd()
        .args(["update", "1", "--name", "Search"])
        .assert()
        .success()
        .stdout("1. Search - https://google.com\n");
}

#[rstest]
fn given_deleted_bookmark_when_add_then_id_not_reused(sandbox: Sandbox) {
    sandbox.add("https://google.com", "Google");
    sandbox.add("https://reddit.com", "Reddit");

    sandbox
        .cmd()
        .args(["delete", "2,9"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Deleted bookmark with ID 2"))
        .stderr(predicate::str::contains("Bookmark with ID 9 not found"));

    sandbox
        .cmd()
        .args(["add", "https://lobste.rs", "Lobsters", "--no-web"])
        .assert()
        .success()
        .stdout("3\n");
}

#[rstest]
fn given_malformed_ids_when_show_then_usage_exit(sandbox: Sandbox) {
    sandbox
        .cmd()
        .args(["show", "1,x"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Invalid ID format"));
}

#[rstest]
fn given_declined_prompt_when_delete_all_then_cancel_exit(sandbox: Sandbox) {
    sandbox.add("https://google.com", "Google");

    sandbox
        .cmd()
        .arg("delete-all")
        .write_stdin("n\n")
        .assert()
        .code(130);

    sandbox
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Google"));
}

#[rstest]
fn given_yes_flag_when_delete_all_then_count_printed(sandbox: Sandbox) {
    sandbox.add("https://google.com", "Google");
    sandbox.add("https://reddit.com", "Reddit");

    sandbox
        .cmd()
        .args(["delete-all", "-y"])
        .assert()
        .success()
        .stdout("2\n");
}

#[rstest]
fn given_bookmarks_when_export_and_import_then_second_store_matches(sandbox: Sandbox) {
    sandbox.add("https://google.com", "Google");
    sandbox.add("https://reddit.com", "Reddit");
    let export = sandbox.dir.path().join("out.json");

    sandbox
        .cmd()
        .args(["export", export.to_str().unwrap()])
        .assert()
        .success();

    let other = tempfile::tempdir().unwrap();
    let run_other = || {
        let mut cmd = Command::cargo_bin("bookmarker").unwrap();
        cmd.env("BOOKMARKER_DB_URL", other.path().join("bm.db"))
            .env("HOME", other.path())
            .arg("--no-color");
        cmd
    };

    run_other()
        .args(["import", export.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Imported 2 bookmarks, skipped 0"));
    run_other()
        .args(["import", export.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Imported 0 bookmarks, skipped 2"));
    run_other()
        .arg("list")
        .assert()
        .success()
        .stdout("1. Google - https://google.com\n2. Reddit - https://reddit.com\n");
}

#[rstest]
#[case("out.md", "- [Google](https://google.com)\n")]
#[case("out.txt", "1. Google - https://google.com\n")]
fn given_extension_when_export_then_format_follows(
    sandbox: Sandbox,
    #[case] file: &str,
    #[case] expected: &str,
) {
    sandbox.add("https://google.com", "Google");
    let path = sandbox.dir.path().join(file);

    sandbox
        .cmd()
        .args(["export", path.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(path).unwrap(), expected);
}

#[rstest]
fn given_empty_store_when_export_then_no_file(sandbox: Sandbox) {
    let path = sandbox.dir.path().join("out.json");

    sandbox
        .cmd()
        .args(["export", path.to_str().unwrap()])
        .assert()
        .code(64);

    assert!(!path.exists());
}

#[rstest]
fn given_new_path_when_create_db_then_created_once(sandbox: Sandbox) {
    let path = sandbox.dir.path().join("fresh").join("new.db");

    sandbox
        .cmd()
        .args(["create-db", path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Database created"));
    assert!(path.exists());

    sandbox
        .cmd()
        .args(["create-db", path.to_str().unwrap()])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("already exists"));
}

#[rstest]
fn given_generate_config_flag_then_toml_printed(sandbox: Sandbox) {
    sandbox
        .cmd()
        .arg("--generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("db_url"))
        .stdout(predicate::str::contains("fetch_timeout_secs = 10"));
}

#[rstest]
fn given_config_file_when_run_then_db_url_used(sandbox: Sandbox) {
    let db = sandbox.dir.path().join("from_config.db");
    let config = sandbox.dir.path().join("config.toml");
    fs::write(&config, format!("db_url = {:?}\n", db.to_str().unwrap())).unwrap();

    let mut cmd = Command::cargo_bin("bookmarker").unwrap();
    cmd.env_remove("BOOKMARKER_DB_URL")
        .env("HOME", sandbox.dir.path())
        .args(["-c", config.to_str().unwrap(), "add", "https://google.com", "Google"])
        .assert()
        .success();

    assert!(db.exists());
}

#[rstest]
fn given_completion_bash_then_script_on_stdout(sandbox: Sandbox) {
    sandbox
        .cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bookmarker"));
}

#[rstest]
fn given_successful_command_then_exit_code_zero(sandbox: Sandbox) {
    sandbox
        .cmd()
        .args(["add", "https://google.com", "Google", "--no-web"])
        .assert()
        .code(0);
}

#[rstest]
fn given_import_with_invalid_record_then_usage_exit_and_nothing_added(sandbox: Sandbox) {
    let path = sandbox.dir.path().join("mixed.json");
    fs::write(
        &path,
        r#"[{"name": "A", "url": "https://a.org"}, {"name": "B", "url": "not a url"}]"#,
    )
    .unwrap();

    sandbox
        .cmd()
        .args(["import", path.to_str().unwrap()])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("record 2"));

    sandbox
        .cmd()
        .arg("list")
        .assert()
        .code(64)
        .stderr(predicate::str::contains("No bookmarks found"));
}
