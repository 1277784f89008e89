//! Common test utilities for xdt-apply integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A well-formed config document for fixtures
#[allow(dead_code)]
pub const WELL_FORMED_CONFIG: &str = r#"<?xml version="1.0"?>
<configuration>
  <appSettings>
    <add key="env" value="dev"/>
  </appSettings>
</configuration>
"#;

/// A project directory for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestProject {
    /// Create a new test project directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the project, returning its full path
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Create a project file with the given extension (e.g. "csproj")
    pub fn project_file(&self, extension: &str) -> PathBuf {
        self.write_file(&format!("MyApp.{extension}"), "<Project/>")
    }

    /// Read a file from the project
    #[allow(dead_code)]
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path.join(name)).expect("Failed to read file")
    }

    /// Create an executable stub engine that appends its argv to `log_name`,
    /// one `original|transform|output` line per invocation.
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn stub_engine(&self, log_name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let log_path = self.path.join(log_name);
        let script = format!(
            "#!/bin/sh\nprintf '%s|%s|%s\\n' \"$1\" \"$2\" \"$3\" >> \"{}\"\n",
            log_path.display()
        );
        let engine_path = self.write_file("stub-engine.sh", &script);
        let mut perms = std::fs::metadata(&engine_path)
            .expect("Failed to stat stub engine")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&engine_path, perms).expect("Failed to chmod stub engine");
        engine_path
    }
}
