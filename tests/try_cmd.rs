/// End-to-end runs of the binary.
///
/// These cases never reach the network: the missing-credential check fires
/// before any request is made.
#[test]
fn try_cmd() {
    trycmd::TestCases::new().case("tests/try_cmd/*.toml").run();
}
