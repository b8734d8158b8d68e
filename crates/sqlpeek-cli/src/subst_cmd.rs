use crate::cli::{ParamsSource, SubstArgs};
use crate::input::read_inputs;
use sqlpeek::{Params, substitute_parameters};

pub fn run(args: SubstArgs) -> anyhow::Result<()> {
    let params = load_params(&args.params)?;

    for input in read_inputs(&args.files)? {
        println!("{}", substitute_parameters(&input.sql, &params));
    }
    Ok(())
}

fn load_params(source: &ParamsSource) -> anyhow::Result<Params> {
    match source {
        ParamsSource::None => Ok(Params::new()),
        ParamsSource::Inline(json) => {
            Params::from_json_str(json).map_err(|e| anyhow::anyhow!("invalid --params: {e}"))
        }
        ParamsSource::File(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
            Params::from_json_str(&raw)
                .map_err(|e| anyhow::anyhow!("invalid parameters in {}: {e}", path.display()))
        }
    }
}
