//! Integration tests for vendorsync

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn vendorsync() -> Command {
        cargo_bin_cmd!("vendorsync")
    }

    /// Global config pointing every path into the temp dir
    fn write_config(temp: &Path, dependencies: &str) -> std::path::PathBuf {
        let config_path = temp.join("global.toml");
        let cache_dir = temp.join("cache");
        fs::write(
            &config_path,
            format!(
                "[cache]\ndir = \"{}\"\n\n{}",
                cache_dir.display(),
                dependencies
            ),
        )
        .unwrap();
        config_path
    }

    const PHOENIX_DEP: &str = "[[dependency]]\nname = \"Phoenix\"\nurl = \"https://example.invalid/deps/Phoenix-latest.json\"\n";

    #[test]
    fn help_displays() {
        vendorsync()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "keep FRC vendor dependency JSON files in sync",
            ));
    }

    #[test]
    fn version_displays() {
        vendorsync()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("vendorsync"));
    }

    #[test]
    fn init_creates_local_config() {
        let temp = TempDir::new().unwrap();
        vendorsync()
            .args(["init"])
            .current_dir(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Created project config"));

        let content = fs::read_to_string(temp.path().join("vendorsync.toml")).unwrap();
        assert!(content.contains("[[dependency]]"));
    }

    #[test]
    fn init_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("vendorsync.toml"), "existing").unwrap();

        vendorsync()
            .args(["init"])
            .current_dir(temp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn list_empty_config() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), "");

        vendorsync()
            .args(["--no-local", "--config"])
            .arg(&config)
            .arg("list")
            .current_dir(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("No vendor dependencies configured"));
    }

    #[test]
    fn list_json_empty_config() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), "");

        vendorsync()
            .args(["--no-local", "--config"])
            .arg(&config)
            .args(["list", "--format", "json"])
            .current_dir(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("[]"));
    }

    #[test]
    fn list_shows_missing_files() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), PHOENIX_DEP);

        vendorsync()
            .args(["--no-local", "--config"])
            .arg(&config)
            .arg("list")
            .current_dir(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Phoenix").and(predicate::str::contains("missing")));
    }

    #[test]
    fn check_offline_skips_remotes() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), PHOENIX_DEP);

        vendorsync()
            .args(["--no-local", "--offline", "--config"])
            .arg(&config)
            .arg("check")
            .current_dir(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Offline mode: not checking remotes"));
    }

    #[test]
    fn update_offline_copies_cached_file() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), PHOENIX_DEP);

        let cache_dir = temp.path().join("cache");
        fs::create_dir_all(&cache_dir).unwrap();
        fs::write(cache_dir.join("Phoenix-latest.json"), "{\"version\":\"1.0\"}").unwrap();

        vendorsync()
            .args(["--no-local", "--offline", "--config"])
            .arg(&config)
            .arg("update")
            .current_dir(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Copied Phoenix-latest.json into project"));

        let copied =
            fs::read_to_string(temp.path().join("vendordeps").join("Phoenix-latest.json"))
                .unwrap();
        assert_eq!(copied, "{\"version\":\"1.0\"}");
    }

    #[test]
    fn update_offline_without_files_fails() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), PHOENIX_DEP);

        vendorsync()
            .args(["--no-local", "--offline", "--config"])
            .arg(&config)
            .arg("update")
            .current_dir(temp.path())
            .assert()
            .failure()
            .stderr(
                predicate::str::contains("Vendor dependency unavailable")
                    .and(predicate::str::contains("--offline")),
            );
    }

    #[test]
    fn update_unknown_name_fails() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), PHOENIX_DEP);

        vendorsync()
            .args(["--no-local", "--offline", "--config"])
            .arg(&config)
            .args(["update", "NavX"])
            .current_dir(temp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("No configured dependency named 'NavX'"));
    }

    #[test]
    fn status_reports_configuration() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), PHOENIX_DEP);

        vendorsync()
            .args(["--no-local", "--offline", "--config"])
            .arg(&config)
            .arg("status")
            .current_dir(temp.path())
            .assert()
            .success()
            .stdout(
                predicate::str::contains("Vendorsync Status")
                    .and(predicate::str::contains("1 configured"))
                    .and(predicate::str::contains("skipping reachability probes")),
            );
    }

    #[test]
    fn local_config_discovered_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        let cache_dir = temp.path().join("cache");
        fs::write(
            temp.path().join("vendorsync.toml"),
            format!("[cache]\ndir = \"{}\"\n\n{}", cache_dir.display(), PHOENIX_DEP),
        )
        .unwrap();

        fs::create_dir_all(&cache_dir).unwrap();
        fs::write(cache_dir.join("Phoenix-latest.json"), "{}").unwrap();

        let nested = temp.path().join("src").join("main");
        fs::create_dir_all(&nested).unwrap();

        // Global config kept out of the way; project root comes from the
        // discovered vendorsync.toml, so the copy lands next to it.
        let global = temp.path().join("unused-global.toml");
        vendorsync()
            .args(["--offline", "--config"])
            .arg(&global)
            .arg("update")
            .current_dir(&nested)
            .assert()
            .success();

        assert!(temp
            .path()
            .join("vendordeps")
            .join("Phoenix-latest.json")
            .exists());
    }
}
