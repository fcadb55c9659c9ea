use assert_cmd::Command;

pub fn untag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("untag").unwrap();
    cmd.env_remove("UNTAG_ROOT");
    cmd.env_remove("UNTAG_LOG");
    cmd
}
