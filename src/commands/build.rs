use crate::{
    Args,
    build::{BuildOptions, Builder, pipeline::ArtifactKind},
    config::Config,
};

pub fn run(args: &Args) -> Result<(), anyhow::Error> {
    let (config, base_path) = Config::load_from_arg(args.config_file.as_deref())?;

    let options = BuildOptions {
        source: args.source.clone(),
        refresh: args.refresh,
        pdf: args.pdf,
    };

    let builder = Builder::new(config, base_path);
    let report = builder.build(&options)?;

    tracing::info!(
        files = report.artifacts.len(),
        source = %args.source.display(),
        page = ?report.path_of(ArtifactKind::Html),
        pdf = ?report.path_of(ArtifactKind::Pdf),
        "build finished"
    );

    Ok(())
}
