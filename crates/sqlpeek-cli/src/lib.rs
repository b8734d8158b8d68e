mod cli;
mod config;
mod escape_cmd;
mod html_cmd;
mod input;
mod minify_cmd;
mod subst_cmd;

pub fn run(args: Vec<String>) -> anyhow::Result<()> {
    let cmd = cli::parse_args(&args)?;
    match cmd {
        cli::Command::Help(topic) => {
            cli::print_help(topic);
            Ok(())
        }
        cli::Command::Minify(args) => minify_cmd::run(args),
        cli::Command::Subst(args) => subst_cmd::run(args),
        cli::Command::Escape(args) => escape_cmd::run(args),
        cli::Command::Html(args) => html_cmd::run(args),
    }
}
