#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;

    #[test]
    fn test_cluster_list_command_help() {
        let mut cmd = Command::cargo_bin("nrmcli").unwrap();
        cmd.env("NRMCLI_CONFIG_DIR", std::env::temp_dir());
        cmd.arg("cluster").arg("list").arg("--help");

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("List clusters"))
            .stdout(predicate::str::contains("--format"))
            .stdout(predicate::str::contains("--page-size"))
            .stdout(predicate::str::contains("--sort-key"))
            .stdout(predicate::str::contains("--sort-dir"))
            .stdout(predicate::str::contains("--no-expand-subnets"));
    }

    #[test]
    fn test_cluster_list_command_rejects_unknown_format() {
        let mut cmd = Command::cargo_bin("nrmcli").unwrap();
        cmd.env("NRMCLI_CONFIG_DIR", std::env::temp_dir());
        cmd.arg("cluster")
            .arg("list")
            .arg("--format")
            .arg("xml");

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("invalid value"));
    }

    #[test]
    fn test_cluster_list_command_rejects_invalid_sort_dir() {
        let mut cmd = Command::cargo_bin("nrmcli").unwrap();
        cmd.env("NRMCLI_CONFIG_DIR", std::env::temp_dir());
        cmd.arg("cluster")
            .arg("list")
            .arg("--sort-dir")
            .arg("sideways");

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("invalid value"));
    }

    #[test]
    fn test_cluster_list_command_rejects_zero_page_size() {
        let mut cmd = Command::cargo_bin("nrmcli").unwrap();
        cmd.env("NRMCLI_CONFIG_DIR", std::env::temp_dir());
        cmd.arg("cluster")
            .arg("list")
            .arg("--page-size")
            .arg("0");

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("greater than zero"));
    }

    #[test]
    fn test_cluster_create_requires_a_name() {
        let mut cmd = Command::cargo_bin("nrmcli").unwrap();
        cmd.env("NRMCLI_CONFIG_DIR", std::env::temp_dir());
        cmd.arg("cluster").arg("create");

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("NAME"));
    }

    #[test]
    fn test_cluster_add_subnet_requires_both_arguments() {
        let mut cmd = Command::cargo_bin("nrmcli").unwrap();
        cmd.env("NRMCLI_CONFIG_DIR", std::env::temp_dir());
        cmd.arg("cluster").arg("add-subnet").arg("blue");

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("SUBNET"));
    }
}
