#![cfg(feature = "storage-rocksdb")]

use assert_cmd::cargo_bin;
use std::io::Write;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_rocksdb_persistence_recovery() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test_db");

    let header =
        "id,borrower,type,principal,rate,term_months,frequency,purpose,collateral,co_signer";

    // 1. First run: process one application
    let mut csv1 = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv1, "{}", header).unwrap();
    writeln!(csv1, "1,alice,PERSONAL,5000,4,12,MONTHLY,,Vehicle,Bob").unwrap();

    let mut cmd1 = Command::new(cargo_bin!("loancore"));
    cmd1.arg(csv1.path()).arg("--db-path").arg(&db_path);

    let output1 = cmd1.output().expect("Failed to execute command");
    assert!(output1.status.success());
    let stdout1 = String::from_utf8_lossy(&output1.stdout);
    assert!(stdout1.contains("1,alice,425.75,108.99,5108.99"));

    // 2. Second run: process another application using the same DB path
    let mut csv2 = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv2, "{}", header).unwrap();
    writeln!(csv2, "2,dave,AUTO,15000,3.5,120,MONTHLY,,,").unwrap();

    let mut cmd2 = Command::new(cargo_bin!("loancore"));
    cmd2.arg(csv2.path()).arg("--db-path").arg(&db_path);

    let output2 = cmd2.output().expect("Failed to execute command");
    assert!(output2.status.success());
    let stdout2 = String::from_utf8_lossy(&output2.stdout);

    // The record from the first run is recovered alongside the new one.
    assert!(stdout2.contains("1,alice,425.75,108.99,5108.99"));
    assert!(stdout2.contains("2,dave,148.33,2799.46,17799.46"));
}
