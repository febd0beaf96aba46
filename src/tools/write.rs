// ABOUTME: WriteTool - writes content to files under the project root.
// ABOUTME: Creates parent directories; refuses paths escaping the root.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;

use crate::tool::{Tool, ToolResult};

/// Tool for writing files, scoped to a project root.
pub struct WriteTool {
    root: PathBuf,
}

impl WriteTool {
    /// Create a new WriteTool rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root: PathBuf = root.into();
        let root = std::fs::canonicalize(&root).unwrap_or(root);
        Self { root }
    }

    /// Resolve a requested path to a normalized absolute path inside the
    /// root. Relative paths are taken relative to the root. Returns None
    /// when the path escapes the root.
    fn resolve(&self, file_path: &str) -> Option<PathBuf> {
        let requested = Path::new(file_path);
        let absolute = if requested.is_absolute() {
            requested.to_path_buf()
        } else {
            self.root.join(requested)
        };

        let mut resolved = PathBuf::new();
        for component in absolute.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if !resolved.pop() {
                        return None;
                    }
                }
                other => resolved.push(other),
            }
        }

        if resolved.starts_with(&self.root) {
            Some(resolved)
        } else {
            None
        }
    }
}

#[async_trait]
impl Tool for WriteTool {
    fn name(&self) -> &str {
        "write"
    }

    fn description(&self) -> &str {
        "Write content to a file inside the project. Creates the file if it doesn't exist, overwrites if it does."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "The path to the file to write, relative to the project root"
                },
                "content": {
                    "type": "string",
                    "description": "The content to write to the file"
                }
            },
            "required": ["file_path", "content"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            file_path: String,
            content: String,
        }
        let params: Params = serde_json::from_value(params)?;

        let Some(target) = self.resolve(&params.file_path) else {
            return Ok(ToolResult::error(format!(
                "Refusing to write '{}': path resolves outside the project root",
                params.file_path
            )));
        };

        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        match std::fs::write(&target, &params.content) {
            Ok(()) => Ok(ToolResult::text(format!(
                "Wrote {} bytes to {}",
                params.content.len(),
                target.display()
            ))),
            Err(e) => Ok(ToolResult::error(format!("Failed to write file: {}", e))),
        }
    }
}
