use assert_cmd::Command; // Run programs, with stdin support
use predicates::prelude::*; // Used for writing assertions
use std::fs;

const BIN_NAME: &str = "bank-toy-console";

#[test]
fn sample_session_output() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN_NAME)?;

    cmd.arg("sample/session.csv");

    cmd.assert()
        .success()
        .stdout(fs::read_to_string("sample/accounts.csv")?)
        .stderr("");

    Ok(())
}

#[test]
fn withdrawal_count_is_capped() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN_NAME)?;

    cmd.arg("sample/withdrawal_limits.csv");

    cmd.assert().success().stdout(
        r#"branch,account,client,balance
0001,1,111,700.0
"#,
    );

    Ok(())
}

#[test]
fn max_withdrawals_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN_NAME)?;

    cmd.arg("sample/withdrawal_limits.csv")
        .env("BANK_MAX_WITHDRAWALS", "5");

    cmd.assert().success().stdout(
        r#"branch,account,client,balance
0001,1,111,500.0
"#,
    );

    Ok(())
}

#[test]
fn withdrawal_limit_from_args() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN_NAME)?;

    cmd.args(["sample/withdrawal_limits.csv", "--withdrawal-limit", "50"]);

    cmd.assert().success().stdout(
        r#"branch,account,client,balance
0001,1,111,1000.0
"#,
    );

    Ok(())
}

#[test]
fn malformed_rows_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN_NAME)?;

    cmd.arg("sample/malformed_rows.csv");

    cmd.assert()
        .success()
        .stdout(
            r#"branch,account,client,balance
0001,1,111,25.5
"#,
        )
        .stderr("");

    Ok(())
}

#[test]
fn cli_non_existing_script() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN_NAME)?;

    cmd.arg("sample/session_non_existing.csv");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Could not read script file"))
        .stdout("");

    Ok(())
}

#[test]
fn cli_invalid_limit() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN_NAME)?;

    cmd.args(["--max-withdrawals", "many"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));

    Ok(())
}

#[test]
fn interactive_session() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN_NAME)?;

    cmd.write_stdin(
        "nc\n111\nAna Souza\n01-01-1990\nRua A 1\n\
         na\n111\n\
         d\n111\n150.75\n\
         w\n111\n50\n\
         s\n111\n\
         la\n\
         q\n",
    );

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("=== Account 1 created. ==="))
        .stdout(predicate::str::contains("Deposit: $ 150.75 at "))
        .stdout(predicate::str::contains("Withdrawal: $ 50.00 at "))
        .stdout(predicate::str::contains("Balance: $ 100.75"))
        .stdout(predicate::str::contains("Holder:\tAna Souza"))
        .stdout(predicate::str::contains("Closing the system"))
        .stderr("");

    Ok(())
}

#[test]
fn interactive_client_without_account() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN_NAME)?;

    cmd.write_stdin("nc\n111\nAna Souza\n01-01-1990\nRua A 1\nw\n111\n10\nbogus\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Operation failed! Client has no account.",
        ))
        .stdout(predicate::str::contains("Invalid option"))
        .stdout(predicate::str::contains("Closing the system"));

    Ok(())
}

#[test]
fn single_account_session() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN_NAME)?;

    cmd.arg("--single-account")
        .env("BANK_MAX_WITHDRAWALS", "1")
        .write_stdin("1\n100\n2\n2000\n2\n40.555\n2\n10\n3\n0\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Operation failed! Insufficient funds."))
        .stdout(predicate::str::contains(
            "Operation failed! Maximum number of withdrawals reached.",
        ))
        .stdout(predicate::str::contains("Withdrawal: $ 40.56\n"))
        .stdout(predicate::str::contains("Balance: $ 59.44"))
        .stdout(predicate::str::contains("Closing the system"))
        .stderr("");

    Ok(())
}

#[test]
fn single_account_rejects_script() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN_NAME)?;

    cmd.args(["sample/session.csv", "--single-account"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    Ok(())
}
