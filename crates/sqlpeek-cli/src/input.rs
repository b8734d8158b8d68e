use std::io::Read;
use std::path::PathBuf;

/// One SQL input and where it came from.
#[derive(Debug, Clone)]
pub struct Input {
    pub label: String,
    pub sql: String,
}

/// Read each file, or stdin when `files` is empty.
pub fn read_inputs(files: &[PathBuf]) -> anyhow::Result<Vec<Input>> {
    if files.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| anyhow::anyhow!("failed to read stdin: {e}"))?;

        if buf.trim().is_empty() {
            anyhow::bail!("no SQL provided (pass files or pipe SQL to stdin)");
        }
        return Ok(vec![Input {
            label: "stdin".to_string(),
            sql: buf.trim_end().to_string(),
        }]);
    }

    files
        .iter()
        .map(|file| {
            let content = std::fs::read_to_string(file)
                .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", file.display()))?;
            Ok(Input {
                label: file.display().to_string(),
                sql: content.trim_end().to_string(),
            })
        })
        .collect()
}
