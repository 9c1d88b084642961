//! Public API checks through the recording executor

use anyhow::Result;
use sdk_release_tools::archive::{self, ArchiverKind, Configuration, HostOs, LibraryBuildRequest};
use sdk_release_tools::core::config::{ArchiverConfig, PromoteConfig};
use sdk_release_tools::promote::{PromotionRequest, promote};
use sdk_release_tools::test_support::RecordingExecutor;

#[test]
fn test_addlib_lines_match_input_count() -> Result<()> {
  for n in 0..6 {
    let mut args: Vec<String> = (0..n).map(|i| format!("lib{}.a", i)).collect();
    args.push("combined.a".to_string());
    let request = LibraryBuildRequest::from_args(args)?;

    let executor = RecordingExecutor::new();
    archive::combine(&request, None, &HostOs::Linux, &ArchiverConfig::default(), &executor)?;

    let calls = executor.calls();
    assert_eq!(calls.len(), 1);
    let script = calls[0].stdin.clone().unwrap_or_default();
    let lines: Vec<&str> = script.lines().collect();

    assert_eq!(lines.first(), Some(&"create combined.a"));
    let addlibs: Vec<&str> = lines.iter().copied().filter(|l| l.starts_with("addlib ")).collect();
    let expected: Vec<String> = (0..n).map(|i| format!("addlib lib{}.a", i)).collect();
    assert_eq!(addlibs, expected);
    assert_eq!(&lines[lines.len() - 2..], ["save", "end"]);
  }
  Ok(())
}

#[test]
fn test_branch_selection_is_exclusive() -> Result<()> {
  let configurations = [None, Some("ReleaseX64"), Some("ReleaseSTM"), Some("DebugCM4"), Some("DebugCM4SF")];
  let hosts = ["linux", "macos", "windows", "netbsd"];

  for config in configurations {
    for host in hosts {
      let configuration = config.map(Configuration::new);
      let host = HostOs::from_identifier(host);
      let executor = RecordingExecutor::new();
      let request = LibraryBuildRequest::from_args(["a.a", "out.a"])?;

      let result = archive::combine(
        &request,
        configuration.as_ref(),
        &host,
        &ArchiverConfig::default(),
        &executor,
      );

      let embedded = configuration.as_ref().is_some_and(Configuration::is_embedded);
      match (embedded, &host, result) {
        (true, _, Ok(kind)) => assert_eq!(kind, ArchiverKind::EmbeddedAr),
        (false, HostOs::Linux, Ok(kind)) => assert_eq!(kind, ArchiverKind::Ar),
        (false, HostOs::MacOs, Ok(kind)) => assert_eq!(kind, ArchiverKind::Libtool),
        (false, HostOs::Windows, Ok(kind)) => assert_eq!(kind, ArchiverKind::LibExe),
        (false, HostOs::Other(_), Err(_)) => {
          assert!(executor.calls().is_empty());
          continue;
        }
        (embedded, host, result) => panic!("unexpected {:?} for embedded={} host={:?}", result, embedded, host),
      }
      assert_eq!(executor.calls().len(), 1);
    }
  }
  Ok(())
}

#[test]
fn test_promotion_copy_count() -> Result<()> {
  let request = PromotionRequest::new("1.2.3", false)?;
  let executor = RecordingExecutor::simulating_tools();
  promote(&request, &PromoteConfig::default(), &executor)?;

  let gsutil = executor.calls().iter().filter(|c| c.program == "gsutil").count();
  assert_eq!(gsutil, 2 * 2 + 1 + 1);
  Ok(())
}
