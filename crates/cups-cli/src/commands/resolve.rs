use std::process::ExitCode;

use miette::Result;

use cups_core::artifact::Artifact;
use cups_resolver::Resolver;

pub fn exec(resolver: &Resolver, artifact: &str) -> Result<ExitCode> {
    let artifact: Artifact = artifact.parse()?;
    match resolver.get(&artifact) {
        Some(value) => {
            println!("{value}");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("no association for {artifact}");
            Ok(ExitCode::FAILURE)
        }
    }
}
