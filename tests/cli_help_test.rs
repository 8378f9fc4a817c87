#[cfg(test)]
mod cli_help_tests {
    use assert_cmd::prelude::*;
    use std::process::Command;

    #[test]
    fn test_cli_help_output() {
        let mut cmd = Command::cargo_bin("nrmcli").unwrap();
        cmd.env("NRMCLI_CONFIG_DIR", std::env::temp_dir());

        let assert_result = cmd.arg("--help").assert().success();
        let output = assert_result.get_output();
        let help_output = String::from_utf8_lossy(&output.stdout);

        assert!(help_output.contains("Usage:"));
        assert!(help_output.contains("Options:"));
        assert!(help_output.contains("Commands:"));

        // Verify that major command groups are present
        assert!(help_output.contains("cluster"));
        assert!(help_output.contains("host"));
        assert!(help_output.contains("config"));

        // Verify that help flags are present
        assert!(help_output.contains("-h, --help"));
        assert!(help_output.contains("-V, --version"));

        assert!(help_output.contains("nrmcli"));
    }

    #[test]
    fn test_cli_subcommand_help_outputs() {
        let subcommands = vec!["cluster", "host", "config"];

        for subcommand in subcommands {
            let mut cmd = Command::cargo_bin("nrmcli").unwrap();
        cmd.env("NRMCLI_CONFIG_DIR", std::env::temp_dir());
            let assert_result = cmd.arg(subcommand).arg("--help").assert().success();
            let output = assert_result.get_output();
            let help_output = String::from_utf8_lossy(&output.stdout);

            assert!(help_output.contains("Usage:"));
            assert!(help_output.contains(subcommand));

            if subcommand == "cluster" {
                assert!(help_output.contains("list"));
                assert!(help_output.contains("get"));
                assert!(help_output.contains("create"));
                assert!(help_output.contains("update"));
                assert!(help_output.contains("delete"));
                assert!(help_output.contains("add-subnet"));
                assert!(help_output.contains("remove-subnet"));
            } else if subcommand == "host" {
                assert!(help_output.contains("get"));
            } else if subcommand == "config" {
                assert!(help_output.contains("get"));
                assert!(help_output.contains("path"));
                assert!(help_output.contains("set"));
            }
        }
    }

    #[test]
    fn test_cli_version_output() {
        let mut cmd = Command::cargo_bin("nrmcli").unwrap();
        cmd.env("NRMCLI_CONFIG_DIR", std::env::temp_dir());
        let assert_result = cmd.arg("--version").assert().success();
        let output = assert_result.get_output();
        let version_output = String::from_utf8_lossy(&output.stdout);

        assert!(version_output.contains("nrmcli"));
        assert!(version_output.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_cli_without_arguments_shows_help() {
        let mut cmd = Command::cargo_bin("nrmcli").unwrap();
        cmd.env("NRMCLI_CONFIG_DIR", std::env::temp_dir());
        // arg_required_else_help prints the help and exits non-zero
        let assert_result = cmd.assert().failure();
        let output = assert_result.get_output();
        let help_output = String::from_utf8_lossy(&output.stderr);

        assert!(help_output.contains("Usage:"));
    }
}
