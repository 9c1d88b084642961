//! library-combiner end-to-end tests

use crate::helpers::*;
use anyhow::Result;

/// Records argv and the MRI script read from stdin
#[cfg(unix)]
const RECORDING_AR: &str = r#"echo "argv: $*" >> "@LOG@"
cat >> "@LOG@""#;

#[test]
fn test_no_arguments_is_usage_error() -> Result<()> {
  let sandbox = Sandbox::new()?;
  let output = run_combiner(&sandbox.path, &[], &[])?;

  assert!(!output.status.success());
  assert!(stderr(&output).contains("Usage"));
  Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn test_linux_ar_script() -> Result<()> {
  let sandbox = Sandbox::new()?;
  let ar = sandbox.fake_tool("ar", RECORDING_AR)?;
  let ar = ar.display().to_string();

  let output = run_combiner(
    &sandbox.path,
    &["libvm.a", "lib shared.a", "libdartino.a"],
    &[("CONFIGURATION", "ReleaseX64"), ("AR", &ar)],
  )?;

  assert!(output.status.success(), "stderr: {}", stderr(&output));
  assert_eq!(
    sandbox.log_lines()?,
    vec![
      "argv: -M",
      "create libdartino.a",
      "addlib libvm.a",
      "addlib lib shared.a",
      "save",
      "end",
    ]
  );
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_embedded_configuration_uses_cross_archiver() -> Result<()> {
  let sandbox = Sandbox::new()?;
  let ar = sandbox.fake_tool("arm-none-eabi-ar", RECORDING_AR)?;
  let ar = ar.display().to_string();

  let output = run_combiner(
    &sandbox.path,
    &["libvm.a", "libdartino.a"],
    &[("CONFIGURATION", "ReleaseCM4"), ("EMBEDDED_AR", &ar)],
  )?;

  assert!(output.status.success(), "stderr: {}", stderr(&output));
  assert_eq!(
    sandbox.log_lines()?,
    vec!["argv: -M", "CREATE libdartino.a", "ADDLIB libvm.a", "SAVE", "END"]
  );
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_archiver_failure_exits_non_zero() -> Result<()> {
  let sandbox = Sandbox::new()?;
  let ar = sandbox.fake_tool("arm-none-eabi-ar", "cat > /dev/null\nexit 3")?;
  let ar = ar.display().to_string();

  let output = run_combiner(
    &sandbox.path,
    &["missing.a", "out.a"],
    &[("CONFIGURATION", "DebugSTM"), ("EMBEDDED_AR", &ar)],
  )?;

  assert_eq!(output.status.code(), Some(2));
  assert!(stderr(&output).contains("exit code 3"));
  Ok(())
}
