use assert_cmd::Command;

pub fn labbook_cmd() -> Command {
    Command::cargo_bin("labbook").unwrap()
}
