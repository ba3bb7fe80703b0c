//! Build execution: configuration to engine options, one engine run, commit.

use std::path::Path;
use std::time::Instant;

use rolldown::{
    BundlerBuilder, BundlerOptions, InputItem, IsExternal, RawMinifyOptions, ResolveOptions,
    SourceMapType,
};
use tracing::{debug, info, warn};

use crate::config::{BuildConfiguration, Platform};
use crate::output::{EmittedAsset, collect_assets, commit_output};
use crate::report::{BuildReport, EmittedFile};
use crate::{Error, Result};

/// Run the bundling engine once and commit its output.
///
/// The call suspends until the engine finishes. No timeout or retry is
/// applied. Engine failures come back as [`Error::Engine`] with the engine's
/// messages untouched, and in that case nothing is written.
///
/// # Errors
///
/// - [`Error::Engine`] for resolution, syntax and engine-side I/O failures
/// - [`Error::InvalidOutputPath`] / [`Error::WriteFailure`] if the commit fails
#[tracing::instrument(skip_all, fields(entry = %config.entry_point().display()))]
pub async fn build(config: &BuildConfiguration) -> Result<BuildReport> {
    let start = Instant::now();

    debug!(
        config = %serde_json::to_string(config).unwrap_or_default(),
        "Build configuration"
    );

    let options = configure_rolldown_options(config);
    debug!(?options, "Rolldown options");

    let (assets, warnings) = run_engine(options).await?;
    for warning in &warnings {
        warn!("{}", warning);
    }

    let output_dir = commit_output(&assets, config.output_directory())?;
    let files: Vec<EmittedFile> = assets.iter().map(EmittedFile::from).collect();

    info!(
        out_dir = %output_dir.display(),
        files = files.len(),
        "Build written"
    );

    Ok(BuildReport::new(output_dir, files, warnings, start.elapsed()))
}

/// The single suspend point: hand the options to Rolldown and await the result.
async fn run_engine(options: BundlerOptions) -> Result<(Vec<EmittedAsset>, Vec<String>)> {
    let mut bundler = BundlerBuilder::default()
        .with_options(options)
        .build()
        .map_err(|e| Error::from_rolldown_batch(&e))?;

    let output = bundler
        .generate()
        .await
        .map_err(|e| Error::from_rolldown_batch(&e))?;

    let warnings = output.warnings.iter().map(|w| format!("{w:?}")).collect();

    Ok((collect_assets(&output), warnings))
}

/// Configure Rolldown options from a [`BuildConfiguration`].
pub fn configure_rolldown_options(config: &BuildConfiguration) -> BundlerOptions {
    BundlerOptions {
        input: Some(vec![InputItem {
            name: None,
            import: config.entry_path().to_string_lossy().into_owned(),
        }]),
        cwd: Some(config.project_dir().to_path_buf()),
        // Source map `sources` are computed relative to this directory.
        dir: Some(config.output_directory().to_string_lossy().into_owned()),
        format: Some(config.format().into()),
        platform: Some(config.platform().into()),
        sourcemap: config.source_map().then_some(SourceMapType::File),
        minify: Some(RawMinifyOptions::from(config.minify())),
        // Everything is inlined.
        external: Some(IsExternal::from(Vec::<String>::new())),
        resolve: Some(configure_resolution(config.project_dir(), config.platform())),
        ..Default::default()
    }
}

/// Export conditions for package resolution on each platform.
fn condition_names(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Browser => &["browser", "import", "module", "default"],
        Platform::Node => &["node", "import", "module", "default"],
    }
}

/// Configure module resolution options.
fn configure_resolution(project_dir: &Path, platform: Platform) -> ResolveOptions {
    let modules = project_dir
        .ancestors()
        .map(|dir| dir.join("node_modules").to_string_lossy().into_owned())
        .collect();

    let main_fields = match platform {
        Platform::Browser => vec![
            "browser".to_string(),
            "module".to_string(),
            "main".to_string(),
        ],
        Platform::Node => vec!["module".to_string(), "main".to_string()],
    };

    ResolveOptions {
        main_fields: Some(main_fields),
        condition_names: Some(
            condition_names(platform)
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
        ),
        extensions: Some(vec![
            ".ts".to_string(),
            ".tsx".to_string(),
            ".mts".to_string(),
            ".js".to_string(),
            ".mjs".to_string(),
            ".json".to_string(),
        ]),
        modules: Some(modules),
        symlinks: Some(true),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BuildConfiguration {
        BuildConfiguration::new("/srv/app/client", "/srv/app/static/dist").unwrap()
    }

    #[test]
    fn test_input_is_absolute_entry() {
        let options = configure_rolldown_options(&config());
        let input = options.input.expect("input set");
        assert_eq!(input.len(), 1);
        assert_eq!(input[0].import, "/srv/app/client/src/index.ts");
        assert!(input[0].name.is_none());
    }

    #[test]
    fn test_fixed_engine_options() {
        let options = configure_rolldown_options(&config());
        assert_eq!(
            options.cwd.as_deref(),
            Some(Path::new("/srv/app/client"))
        );
        assert!(matches!(options.format, Some(rolldown::OutputFormat::Esm)));
        assert!(matches!(options.platform, Some(rolldown::Platform::Browser)));
        assert!(matches!(options.sourcemap, Some(SourceMapType::File)));
        assert!(options.minify.is_some());
        assert!(options.external.is_some());
    }

    #[test]
    fn test_output_dir_is_configured_output_directory() {
        let options = configure_rolldown_options(&config());
        assert_eq!(options.dir.as_deref(), Some("/srv/app/static/dist"));
    }

    #[test]
    fn test_esnext_is_not_lowered() {
        let options = configure_rolldown_options(&config());
        assert!(options.transform.is_none());
    }

    #[test]
    fn test_resolution_walks_up_to_root() {
        let options = configure_rolldown_options(&config());
        let resolve = options.resolve.expect("resolve set");
        let modules = resolve.modules.expect("modules set");
        assert_eq!(modules.first().map(String::as_str), Some("/srv/app/client/node_modules"));
        assert_eq!(modules.last().map(String::as_str), Some("/node_modules"));

        let conditions = resolve.condition_names.expect("conditions set");
        assert_eq!(conditions.first().map(String::as_str), Some("browser"));
        assert!(resolve.extensions.expect("extensions set").contains(&".ts".to_string()));
    }

    #[test]
    fn test_browser_main_fields_prefer_browser() {
        let resolve = configure_resolution(Path::new("/srv/app/client"), Platform::Browser);
        assert_eq!(
            resolve.main_fields.expect("main fields set"),
            vec!["browser", "module", "main"]
        );
    }
}
