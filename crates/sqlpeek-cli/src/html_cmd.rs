use crate::cli::HtmlArgs;
use crate::config::ConfigFile;
use crate::input::read_inputs;
use sqlpeek::QueryFormatter;

pub fn run(args: HtmlArgs) -> anyhow::Result<()> {
    let file = ConfigFile::load_or_default(&args.config)?;
    let formatter = QueryFormatter::new()
        .with_minify_config(file.minify)?
        .with_classes(file.markup);

    for input in read_inputs(&args.files)? {
        println!("{}", formatter.format_query(&input.sql, args.highlight_only));
    }
    Ok(())
}
