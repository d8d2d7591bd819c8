use assert_cmd::cargo::CommandCargoExt as _;

pub fn sptest_raw_command() -> std::process::Command {
    let mut cmd = std::process::Command::cargo_bin("sptest").unwrap();
    cmd.current_dir("tests/");
    cmd
}

pub fn sptest() -> assert_cmd::Command {
    assert_cmd::Command::from_std(sptest_raw_command())
}
