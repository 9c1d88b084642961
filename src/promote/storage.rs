use crate::core::process::ProcessCommand;

/// Canned ACL applied to published objects
pub const PUBLIC_READ: &str = "public-read";

/// One `gsutil cp` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageCopy {
  pub src: String,
  pub dst: String,
  pub recursive: bool,
  pub public: bool,
}

impl StorageCopy {
  /// Non-recursive, publicly readable copy
  pub fn public(src: impl Into<String>, dst: impl Into<String>) -> Self {
    Self {
      src: src.into(),
      dst: dst.into(),
      recursive: false,
      public: true,
    }
  }

  /// Recursive copy keeping the bucket's default ACL
  pub fn download_tree(src: impl Into<String>, dst: impl Into<String>) -> Self {
    Self {
      src: src.into(),
      dst: dst.into(),
      recursive: true,
      public: false,
    }
  }

  /// `gsutil -m cp [-r] [-a public-read] <src> <dst>`
  pub fn command(&self, gsutil: &str) -> ProcessCommand {
    let mut cmd = ProcessCommand::new(gsutil).args(["-m", "cp"]);
    if self.recursive {
      cmd = cmd.arg("-r");
    }
    if self.public {
      cmd = cmd.args(["-a", PUBLIC_READ]);
    }
    cmd.arg(&self.src).arg(&self.dst)
  }
}
