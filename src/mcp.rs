//! Tool surface for agents and scripts
//!
//! Tool definitions follow the MCP `inputSchema` shape. `handle_tool_call`
//! executes a tool and returns its JSON result.

use crate::error::{AdvisorError, Result};
use crate::eval::sweep;
use crate::questions::questionnaire;
use crate::report::AdvisorReport;
use crate::types::*;
use serde_json::{json, Map, Value};

fn keys<C: Choice>() -> Vec<&'static str> {
    C::ALL.iter().map(|c| c.key()).collect()
}

fn answer_property<C: Choice>(description: &str) -> Value {
    json!({
        "type": "string",
        "enum": keys::<C>(),
        "description": format!("{description} (option key or its full label)")
    })
}

/// Tool definitions
pub fn get_tools() -> Vec<Value> {
    vec![
        json!({
            "name": "recommend_database",
            "description": "Recommend TimescaleDB or ClickHouse from five workload answers. Returns scores, a per-question breakdown, the gauge position (0 = TimescaleDB, 1 = ClickHouse), a confidence tier and fixed advice. Ties go to ClickHouse.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "data_volume": answer_property::<DataVolume>("Expected daily ingestion volume"),
                    "query_pattern": answer_property::<QueryPattern>("Primary query type"),
                    "realtime_needs": answer_property::<RealtimeNeed>("Real-time processing requirement"),
                    "data_retention": answer_property::<DataRetention>("How long data is kept"),
                    "team_expertise": answer_property::<TeamExpertise>("Team database expertise")
                },
                "required": ["data_volume", "query_pattern", "realtime_needs", "data_retention", "team_expertise"]
            }
        }),
        json!({
            "name": "list_questions",
            "description": "List the five questions with their option keys and labels, in the order they are asked.",
            "inputSchema": { "type": "object", "properties": {} }
        }),
        json!({
            "name": "sweep_summary",
            "description": "Score all 1024 answer combinations and report win counts, ties, confidence tiers and score ranges.",
            "inputSchema": { "type": "object", "properties": {} }
        }),
    ]
}

fn string_arg<'a>(args: &'a Map<String, Value>, name: &str) -> Result<&'a str> {
    args.get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| AdvisorError::ToolArguments(format!("missing string argument '{name}'")))
}

/// Execute a tool by name
pub fn handle_tool_call(name: &str, args: &Value) -> Result<Value> {
    tracing::info!(tool = name, "tool call");

    match name {
        "recommend_database" => {
            let args = args
                .as_object()
                .ok_or_else(|| AdvisorError::ToolArguments("arguments must be an object".into()))?;
            let answers = Answers::from_labels(
                string_arg(args, "data_volume")?,
                string_arg(args, "query_pattern")?,
                string_arg(args, "realtime_needs")?,
                string_arg(args, "data_retention")?,
                string_arg(args, "team_expertise")?,
            )?;
            Ok(serde_json::to_value(AdvisorReport::new(answers)?)?)
        }
        "list_questions" => Ok(serde_json::to_value(questionnaire())?),
        "sweep_summary" => Ok(serde_json::to_value(sweep())?),
        other => Err(AdvisorError::UnknownTool(other.to_string())),
    }
}
