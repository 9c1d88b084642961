//! promote end-to-end tests

use crate::helpers::*;
use anyhow::Result;

/// Logs argv; a recursive copy materialises a docs tree at the destination
#[cfg(unix)]
const FAKE_GSUTIL: &str = r#"echo "gsutil $*" >> "@LOG@"
recursive=no
for a; do [ "$a" = "-r" ] && recursive=yes; done
for last; do :; done
if [ "$recursive" = yes ]; then
  mkdir -p "$last/docs/api"
  echo "<html/>" > "$last/docs/index.html"
  echo "<html/>" > "$last/docs/api/core.html"
fi
exit 0"#;

/// Logs argv; `clone` creates the target directory, `commit` logs the identity it sees
#[cfg(unix)]
const FAKE_GIT: &str = r#"echo "git $*" >> "@LOG@"
dir=.
while [ $# -gt 0 ]; do
  case "$1" in
    -C) dir="$2"; shift 2 ;;
    -c) shift 2 ;;
    *) break ;;
  esac
done
if [ "$1" = "clone" ]; then
  for last; do :; done
  mkdir -p "$dir/$last"
fi
if [ "$1" = "commit" ]; then
  echo "identity $GIT_AUTHOR_NAME <$GIT_AUTHOR_EMAIL> / $GIT_COMMITTER_NAME" >> "@LOG@"
fi
if [ "$1" = "$FAIL_ON" ]; then exit 1; fi
exit 0"#;

#[cfg(unix)]
fn install_fakes(sandbox: &Sandbox, fail_on: &str) -> Result<()> {
  sandbox.fake_tool("gsutil", FAKE_GSUTIL)?;
  sandbox.fake_tool("git", &FAKE_GIT.replace("$FAIL_ON", fail_on))?;
  Ok(())
}

fn git_subcommands(lines: &[String]) -> Vec<String> {
  lines
    .iter()
    .filter(|l| l.starts_with("git "))
    .filter_map(|l| {
      let mut words = l.split_whitespace().skip(1);
      while let Some(word) = words.next() {
        match word {
          "-C" | "-c" => {
            words.next();
          }
          other => return Some(other.to_string()),
        }
      }
      None
    })
    .collect()
}

#[test]
fn test_missing_version_fails_before_any_command() -> Result<()> {
  let sandbox = Sandbox::new()?;
  let output = run_promote(&sandbox.path, &["--dryrun"], &[("GSUTIL", "/nonexistent/gsutil")])?;

  assert!(!output.status.success());
  assert!(stderr(&output).contains("--version"));
  assert!(stdout(&output).is_empty());
  assert!(sandbox.log_lines()?.is_empty());
  Ok(())
}

#[test]
fn test_dry_run_prints_every_step() -> Result<()> {
  let sandbox = Sandbox::new()?;
  let tmp = sandbox.tmp.display().to_string();
  let output = run_promote(
    &sandbox.path,
    &["--version", "1.2.3", "--dryrun"],
    &[("GSUTIL", "/nonexistent/gsutil"), ("TMPDIR", &tmp)],
  )?;

  assert!(output.status.success(), "stderr: {}", stderr(&output));
  let out = stdout(&output);
  let dry: Vec<&str> = out.lines().filter(|l| l.starts_with("DRY: ")).collect();
  assert_eq!(dry.len(), 14);
  assert_eq!(dry.iter().filter(|l| l.contains("public-read")).count(), 5);
  assert!(out.contains("Publish API docs for version 1.2.3"));
  assert!(sandbox.tmp_entries()?.is_empty());
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_promotion_end_to_end() -> Result<()> {
  let sandbox = Sandbox::new()?;
  install_fakes(&sandbox, "none")?;
  let tmp = sandbox.tmp.display().to_string();
  let path = sandbox.path_env();

  let output = run_promote(
    &sandbox.path,
    &["--version", "1.2.3"],
    &[("PATH", &path), ("TMPDIR", &tmp), ("SDK_RELEASE_BUCKET", "gs://test-archive")],
  )?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  let lines = sandbox.log_lines()?;
  let copies: Vec<&String> = lines.iter().filter(|l| l.starts_with("gsutil ")).collect();
  assert_eq!(copies.len(), 6);
  assert_eq!(
    copies[0],
    "gsutil -m cp -a public-read \
     gs://test-archive/channels/dev/raw/1.2.3/sdk/dartino-sdk-linux-x64-release.zip \
     gs://test-archive/channels/dev/release/1.2.3/sdk/dartino-sdk-linux-x64-release.zip"
  );
  assert!(copies[3].ends_with("/release/latest/sdk/dartino-sdk-macos-x64-release.zip"));
  assert!(copies[4].ends_with("gs://test-archive/channels/dev/release/latest/VERSION"));
  assert!(copies[5].contains(" -r gs://test-archive/channels/dev/raw/1.2.3/docs "));

  assert_eq!(
    git_subcommands(&lines),
    vec!["clone", "checkout", "rm", "add", "commit", "push"]
  );
  let commit = lines.iter().find(|l| l.contains(" commit ")).unwrap();
  assert!(commit.contains("1.2.3"));

  assert!(sandbox.tmp_entries()?.is_empty(), "scratch directories left behind");
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_commit_uses_operator_identity() -> Result<()> {
  let sandbox = Sandbox::new()?;
  install_fakes(&sandbox, "none")?;
  let tmp = sandbox.tmp.display().to_string();
  let path = sandbox.path_env();
  let home = sandbox.path.join("empty-home");
  std::fs::create_dir_all(&home)?;
  let home = home.display().to_string();

  let output = run_promote(
    &sandbox.path,
    &["--version", "1.2.3"],
    &[
      ("PATH", &path),
      ("TMPDIR", &tmp),
      ("HOME", &home),
      ("GIT_AUTHOR_NAME", "Release Bot"),
      ("GIT_AUTHOR_EMAIL", "release@example.com"),
      ("GIT_COMMITTER_NAME", "Release Bot"),
    ],
  )?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  let lines = sandbox.log_lines()?;
  assert!(
    lines.contains(&"identity Release Bot <release@example.com> / Release Bot".to_string()),
    "log: {:?}",
    lines
  );
  let commit = lines.iter().find(|l| l.contains(" commit ")).unwrap();
  assert!(!commit.contains("gpgSign"));
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_failed_push_cleans_up_and_exits_non_zero() -> Result<()> {
  let sandbox = Sandbox::new()?;
  install_fakes(&sandbox, "push")?;
  let tmp = sandbox.tmp.display().to_string();
  let path = sandbox.path_env();

  let output = run_promote(
    &sandbox.path,
    &["--version", "1.2.3"],
    &[("PATH", &path), ("TMPDIR", &tmp)],
  )?;

  assert_eq!(output.status.code(), Some(2));
  assert!(stderr(&output).contains("git"));
  assert_eq!(git_subcommands(&sandbox.log_lines()?).last().map(String::as_str), Some("push"));
  assert!(sandbox.tmp_entries()?.is_empty(), "scratch directories left behind");
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_failed_checkout_stops_before_commit() -> Result<()> {
  let sandbox = Sandbox::new()?;
  install_fakes(&sandbox, "checkout")?;
  let tmp = sandbox.tmp.display().to_string();
  let path = sandbox.path_env();

  let output = run_promote(
    &sandbox.path,
    &["--version", "2.0.0"],
    &[("PATH", &path), ("TMPDIR", &tmp)],
  )?;

  assert!(!output.status.success());
  assert_eq!(git_subcommands(&sandbox.log_lines()?), vec!["clone", "checkout"]);
  assert!(sandbox.tmp_entries()?.is_empty());
  Ok(())
}
