//! Archiver command templates
//!
//! `ar`-style tools read an MRI script on stdin; `libtool` and `lib.exe` take
//! everything on the command line. Either way the output path leads and the
//! inputs follow in request order.

use super::request::LibraryBuildRequest;
use super::target::ArchiverKind;
use crate::core::config::ArchiverConfig;
use crate::core::process::{ProcessCommand, path_arg};

/// Build the single command that merges `request` with `kind`
pub fn build_command(kind: ArchiverKind, request: &LibraryBuildRequest, tools: &ArchiverConfig) -> ProcessCommand {
  match kind {
    ArchiverKind::EmbeddedAr => ProcessCommand::new(&tools.embedded_ar)
      .arg("-M")
      .stdin(mri_script(request, Keywords::UPPER)),
    ArchiverKind::Ar => ProcessCommand::new(&tools.ar)
      .arg("-M")
      .stdin(mri_script(request, Keywords::LOWER)),
    ArchiverKind::Libtool => ProcessCommand::new(&tools.libtool)
      .args(["-static", "-o"])
      .arg(path_arg(&request.output))
      .args(request.inputs.iter().map(|p| path_arg(p))),
    ArchiverKind::LibExe => ProcessCommand::new(&tools.lib_exe)
      .arg(format!("/out:{}", path_arg(&request.output)))
      .args(request.inputs.iter().map(|p| path_arg(p))),
  }
}

struct Keywords {
  create: &'static str,
  addlib: &'static str,
  save: &'static str,
  end: &'static str,
}

impl Keywords {
  const LOWER: Keywords = Keywords {
    create: "create",
    addlib: "addlib",
    save: "save",
    end: "end",
  };
  const UPPER: Keywords = Keywords {
    create: "CREATE",
    addlib: "ADDLIB",
    save: "SAVE",
    end: "END",
  };
}

/// Render an `ar -M` script: create, one addlib per input, save, end
fn mri_script(request: &LibraryBuildRequest, kw: Keywords) -> String {
  let mut script = format!("{} {}\n", kw.create, path_arg(&request.output));
  for lib in &request.inputs {
    script.push_str(&format!("{} {}\n", kw.addlib, path_arg(lib)));
  }
  script.push_str(kw.save);
  script.push('\n');
  script.push_str(kw.end);
  script.push('\n');
  script
}
