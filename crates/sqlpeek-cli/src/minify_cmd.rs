use crate::cli::MinifyArgs;
use crate::config::ConfigFile;
use crate::input::read_inputs;
use sqlpeek::QueryMinifier;

pub fn run(args: MinifyArgs) -> anyhow::Result<()> {
    let file = ConfigFile::load_or_default(&args.config)?;
    let mut config = file.minify;
    if let Some(width) = args.width {
        config.max_char_width = width;
    }
    let minifier = QueryMinifier::with_config(config)?;

    let inputs = read_inputs(&args.files)?;
    let labelled = inputs.len() > 1;
    for input in inputs {
        let summary = minifier.minify(&input.sql);
        if labelled {
            println!("{}: {summary}", input.label);
        } else {
            println!("{summary}");
        }
    }
    Ok(())
}
