#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub const SAMPLE_SEED: &str = r#"
[[author]]
name = "Jane"

[[author]]
name = "John"

[[author]]
name = "Quiet"

[[magazine]]
name = "Vogue"
category = "Fashion"

[[magazine]]
name = "Wired"
category = "Tech"

[[article]]
author = "Jane"
magazine = "Vogue"
title = "My Fashion Story"

[[article]]
author = "Jane"
magazine = "Vogue"
title = "Runway Report"

[[article]]
author = "Jane"
magazine = "Vogue"
title = "Autumn Coats"

[[article]]
author = "John"
magazine = "Vogue"
title = "Street Style Notes"

[[article]]
author = "Jane"
magazine = "Wired"
title = "Smart Fabrics"
"#;

pub fn bylines_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bylines").unwrap();
    cmd.env_remove("BYLINES_SEED");
    cmd.env_remove("BYLINES_LOG");
    cmd
}

/// Write `contents` as bylines.toml inside `dir` and return its path
pub fn write_seed(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("bylines.toml");
    fs::write(&path, contents).unwrap();
    path
}
