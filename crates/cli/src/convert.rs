use anyhow::Context;
use colored::Colorize;
use octopus_relay_sdk::num::{self, Converter};
use serde_json::json;

use crate::args::ConvertCommands;

pub(crate) fn render(converter: Converter, command: &ConvertCommands, json: bool) -> anyhow::Result<()> {
    match command {
        ConvertCommands::ToDisplay { raw } => {
            let display = converter
                .to_display(raw)
                .with_context(|| format!("converting {raw:?} to display form"))?;
            let display = num::format_plain(&display);
            if json {
                crate::print_json(&json!({ "raw": raw, "display": display }))
            } else {
                println!("{}", display.green());
                Ok(())
            }
        },
        ConvertCommands::ToFixed { value } => {
            let raw = converter
                .parse_display(value)
                .with_context(|| format!("converting {value:?} to fixed point"))?;
            if json {
                crate::print_json(&json!({ "display": value, "raw": raw }))
            } else {
                println!("{}", raw);
                Ok(())
            }
        },
    }
}
