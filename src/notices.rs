//! Legal and licensing information printed by `--legal`.

/// License line for this program followed by the notices of the third-party
/// crates linked into the binary.
pub const NOTICES: &str = "\
targzsize is licensed under the terms of the MIT License.

This program includes the following third-party crates:

  anyhow              MIT OR Apache-2.0
  clap                MIT OR Apache-2.0
  flate2              MIT OR Apache-2.0
  indicatif           MIT
  num-bigint          MIT OR Apache-2.0
  num-traits          MIT OR Apache-2.0
  tar                 MIT OR Apache-2.0
  thiserror           MIT OR Apache-2.0
  tokio               MIT
  tracing             MIT
  tracing-subscriber  MIT

The full license texts are available from each crate's repository.
";
