#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;

    #[test]
    fn test_config_path_respects_config_dir_override() {
        let dir = tempfile::tempdir().unwrap();

        let mut cmd = Command::cargo_bin("nrmcli").unwrap();
        cmd.env("NRMCLI_CONFIG_DIR", dir.path())
            .arg("config")
            .arg("path");

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("config.yml"))
            .stdout(predicate::str::contains(dir.path().to_str().unwrap()));
    }

    #[test]
    fn test_config_set_and_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        let mut cmd = Command::cargo_bin("nrmcli").unwrap();
        cmd.env("NRMCLI_CONFIG_DIR", dir.path())
            .arg("config")
            .arg("set")
            .arg("--api-url")
            .arg("https://nrm.example.com/v2.0");
        cmd.assert().success();

        let mut cmd = Command::cargo_bin("nrmcli").unwrap();
        cmd.env("NRMCLI_CONFIG_DIR", dir.path()).arg("config").arg("get");
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("https://nrm.example.com/v2.0"));
    }

    #[test]
    fn test_config_get_reports_the_default_api_url() {
        let dir = tempfile::tempdir().unwrap();

        let mut cmd = Command::cargo_bin("nrmcli").unwrap();
        cmd.env("NRMCLI_CONFIG_DIR", dir.path()).arg("config").arg("get");

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("http://127.0.0.1:9696/v2.0"));
    }

    #[test]
    fn test_config_set_rejects_an_invalid_url() {
        let dir = tempfile::tempdir().unwrap();

        let mut cmd = Command::cargo_bin("nrmcli").unwrap();
        cmd.env("NRMCLI_CONFIG_DIR", dir.path())
            .arg("config")
            .arg("set")
            .arg("--api-url")
            .arg("not a url");

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("invalid value"));
    }
}
