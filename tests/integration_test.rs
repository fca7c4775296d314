use assert_cmd::Command;
use predicates as pred;

fn ledger() -> Command {
    let exe = env!("CARGO_BIN_EXE_bank_ledger");
    let mut cmd = Command::new(exe);
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn end_to_end_checking_account_session() {
    // Customer 111 with one checking account (limit 500, three withdrawals):
    // ends with balance 50 after the third withdrawal, the fourth is refused.
    let script = "nu\n111\nAna Souza\n01-01-1990\nRua A, 1 - Centro - Recife/PE\n\
                  nc\n111\n\
                  d\n111\n1000\n\
                  s\n111\n600\n\
                  s\n111\n500\n\
                  s\n111\n500\n\
                  s\n111\n100\n\
                  d\n111\n100\n\
                  s\n111\n50\n\
                  s\n111\n10\n\
                  e\n111\n\
                  lc\n\
                  q\n";

    ledger()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(pred::str::contains("========== Menu =========="))
        .stdout(pred::str::contains("Customer created successfully!"))
        .stdout(pred::str::contains("Account 1 created successfully!"))
        .stdout(pred::str::contains("Withdrawal of 600.00 exceeds the limit of 500.00"))
        .stdout(pred::str::contains(
            "Insufficient funds: requested 100.00, balance is 0.00",
        ))
        .stdout(pred::str::contains("Maximum number of withdrawals (3) exceeded"))
        .stdout(pred::str::contains("STATEMENT"))
        .stdout(pred::str::contains("Balance:\n\tR$ 50.00"))
        .stdout(pred::str::contains("Holder:\t\tAna Souza"));
}

#[test]
fn duplicate_customer_and_unknown_option_are_reported() {
    let script = "nu\n111\nAna\n01-01-1990\nRua A\n\
                  nu\n111\n\
                  zz\n\
                  q\n";

    ledger()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(pred::str::contains("A customer with tax id 111 already exists"))
        .stdout(pred::str::contains("Invalid option `zz`"));
}

#[test]
fn closed_input_ends_the_session() {
    ledger()
        .write_stdin("lc\n")
        .assert()
        .success()
        .stdout(pred::str::contains("No accounts registered."));
}
