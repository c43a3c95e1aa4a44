use std::process::ExitCode;

use miette::Result;

use cups_core::artifact::ArtifactIdentity;
use cups_resolver::Resolver;

pub fn exec(resolver: &Resolver, identity: &str) -> Result<ExitCode> {
    let identity: ArtifactIdentity = identity.parse()?;
    let versions = resolver.index().lookup_identity(&identity);

    if versions.is_empty() {
        println!("No associations for {identity}");
        return Ok(ExitCode::SUCCESS);
    }

    println!("{identity} ({} entries):", versions.len());
    for (token, value) in versions {
        println!("  {token} = {value}");
    }
    Ok(ExitCode::SUCCESS)
}
