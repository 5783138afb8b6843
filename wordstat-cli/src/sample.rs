use std::fs;
use std::path::{Path, PathBuf};

use crate::CliError;

pub const DEFAULT_SAMPLE_FILE: &str = "sample.txt";

/// Four paragraphs of ordinary prose for trying the analyzer out.
pub const SAMPLE_TEXT: &str = "\
The quick brown fox jumps over the lazy dog. This sentence contains every letter of the alphabet at least once.

Rust is a systems programming language focused on safety, speed, and concurrency. Its ownership model catches whole classes of bugs at compile time, while zero-cost abstractions keep programs fast enough for operating systems, browsers, and embedded devices.

Data analysis is becoming increasingly important in today's world. With the rise of big data, companies need tools and professionals who can extract meaningful insights from large datasets. Good tooling makes data manipulation and visualization approachable.

Machine learning and artificial intelligence are changing how we interact with technology. From recommendation systems to autonomous vehicles, these techniques are transforming industries and creating new possibilities for innovation.";

/// Write [`SAMPLE_TEXT`] to `path`.
pub fn write_sample(path: impl AsRef<Path>) -> Result<PathBuf, CliError> {
    let path = path.as_ref();
    fs::write(path, SAMPLE_TEXT)?;
    Ok(path.to_path_buf())
}
