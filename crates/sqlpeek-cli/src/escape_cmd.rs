use crate::cli::EscapeArgs;
use sqlpeek::{Value, escape};

pub fn run(args: EscapeArgs) -> anyhow::Result<()> {
    println!("{}", render(&args.value)?);
    Ok(())
}

fn render(json: &str) -> anyhow::Result<String> {
    let doc: serde_json::Value =
        serde_json::from_str(json).map_err(|e| anyhow::anyhow!("invalid JSON value: {e}"))?;
    Ok(escape(&Value::from(doc)))
}
