use crate::error::GeneratorError;
use clap::Parser;

#[derive(Parser)]
#[command(no_binary_name = true)]
struct ArgsParser<T: clap::Args> {
    #[command(flatten)]
    inner: T,
}

/// Parse the raw argument list the host passed through to a generator.
pub fn parse_args<T: clap::Args>(args: &[String]) -> Result<T, GeneratorError> {
    let parser = ArgsParser::<T>::try_parse_from(args)
        .map_err(|error| GeneratorError::InvalidOptions(error.to_string()))?;

    Ok(parser.inner)
}
