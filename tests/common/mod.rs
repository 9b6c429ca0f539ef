//! Shared fixture: a Butler over a temp resource root seeded with the test
//! resources.

use butler_io::{Butler, PhysicalProvider};
use std::fs;
use tempfile::TempDir;

pub const FILE_CONTENTS: &str = "some test text";
pub const FILE_NAME: &str = "text_file.txt";
pub const PACKAGE: &str = "uk/co/opsb/butler";

/// Temp resource root holding `text_file.txt`, `some.properties`, and a
/// `butler_aliases.properties` alias set.
pub struct Fixture {
    pub butler: Butler,
    // Keeps the temp directory alive for the duration of the test.
    _root: TempDir,
}

pub fn fixture() -> Fixture {
    let root = tempfile::tempdir().expect("tempdir");
    let package_dir = root.path().join(PACKAGE);
    fs::create_dir_all(&package_dir).expect("package dir");
    fs::write(package_dir.join(FILE_NAME), FILE_CONTENTS).expect("text fixture");
    fs::write(
        package_dir.join("some.properties"),
        "name=jim\nage=23\nheight=153cm\n",
    )
    .expect("properties fixture");
    fs::write(
        root.path().join("butler_aliases.properties"),
        "butler\\:=res:uk/co/opsb/butler/\n",
    )
    .expect("aliases fixture");

    let provider = PhysicalProvider::with_roots([root.path().to_path_buf()]);
    Fixture {
        butler: Butler::with_provider(Box::new(provider)),
        _root: root,
    }
}
