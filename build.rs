use std::process::Command;

/// Run a command and return its trimmed stdout, if it succeeded.
fn capture(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
}

fn main() {
    let commit_sha = capture("git", &["rev-parse", "--short", "HEAD"])
        .unwrap_or_else(|| "unknown".to_string());

    let build_date =
        capture("date", &["+%Y-%m-%d"]).unwrap_or_else(|| "unknown".to_string());

    // "rustc 1.92.0 (..." -> "1.92.0"
    let rustc_version = capture("rustc", &["--version"])
        .and_then(|s| {
            s.strip_prefix("rustc ")
                .and_then(|v| v.split_whitespace().next())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=STARTBOOK_COMMIT_SHA={}", commit_sha);
    println!("cargo:rustc-env=STARTBOOK_BUILD_DATE={}", build_date);
    println!("cargo:rustc-env=STARTBOOK_RUSTC_VERSION={}", rustc_version);

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=STARTBOOK_COMMIT_SHA");
}
