// ABOUTME: SkillTool - placeholder handler for named skill invocations.
// ABOUTME: Always succeeds with a descriptive stub result.

use async_trait::async_trait;
use serde::Deserialize;

use crate::tool::{Tool, ToolResult};

/// Stub tool for skill invocations. Skill execution is not wired up yet;
/// the result names the requested skill so the model can report it.
pub struct SkillTool;

#[async_trait]
impl Tool for SkillTool {
    fn name(&self) -> &str {
        "skill"
    }

    fn description(&self) -> &str {
        "Invoke a named skill with optional arguments."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "skill": {
                    "type": "string",
                    "description": "The name of the skill to invoke"
                },
                "args": {
                    "type": "string",
                    "description": "Arguments to pass to the skill"
                }
            },
            "required": ["skill"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            skill: String,
            #[serde(default)]
            args: String,
        }
        let params: Params = serde_json::from_value(params)?;

        Ok(ToolResult::text(format!(
            "Skill '{}' invoked with args '{}'. Skill execution is stubbed in this build; no action was taken.",
            params.skill, params.args
        )))
    }
}
