/// Runs the `sparkjob` binary and expects it to fail with `$needle` on stderr.
///
/// `cli_test!(name: ["run", "..."]; should fail with "...")`, optionally prefixed
/// with environment variables: `cli_test!(SPARKJOB_REGION="x"; name: [...]; ...)`.
macro_rules! cli_test {
    ($name:ident : [$($arg:literal),*]; should fail with $needle:literal) => {
        cli_test!(; $name: [$($arg),*]; should fail with $needle);
    };
    ($($var:ident = $value:literal)*; $name:ident : [$($arg:literal),*]; should fail with $needle:literal) => {
        #[test]
        fn $name() -> Result<(), Box<dyn std::error::Error>> {
            let args: &[&str] = &[$($arg),*];
            std::process::Command::cargo_bin("sparkjob")?
                .args(args)
                $(.env(stringify!($var), $value))*
                .assert()
                .failure()
                .stderr(predicates::str::contains($needle));
            Ok(())
        }
    };
}
