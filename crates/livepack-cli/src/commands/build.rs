//! The build command: resolve the layout, bundle, report.

use std::path::Path;

use livepack_bundler::BuildReport;
use tracing::info;

use crate::cli::Cli;
use crate::error::Result;
use crate::location::{ProjectLayout, ScriptLocation};
use crate::ui;

/// Execute the build.
///
/// # Build Process
///
/// 1. Derive the project layout from the tool's own location
/// 2. Assemble the fixed browser configuration
/// 3. Await one engine run and commit its output
/// 4. Display the build summary
///
/// # Errors
///
/// - The layout cannot be derived
/// - The engine rejects the build (output left untouched)
/// - The output cannot be committed
pub async fn execute(args: &Cli) -> Result<()> {
    let layout = ProjectLayout::resolve(&ScriptLocation::current())?;
    run(&layout, args.quiet).await?;
    Ok(())
}

/// Build one resolved layout.
pub async fn run(layout: &ProjectLayout, quiet: bool) -> Result<BuildReport> {
    let config = layout.build_configuration()?;

    info!(
        root = %layout.root.display(),
        entry = %layout.entry_path().display(),
        out_dir = %layout.output_dir.display(),
        "Resolved project layout"
    );

    let spinner = if quiet {
        ui::Spinner::hidden()
    } else {
        ui::Spinner::new(&format!(
            "Bundling {}",
            display_relative(&layout.entry_path(), &layout.root)
        ))
    };

    let report = match livepack_bundler::build(&config).await {
        Ok(report) => report,
        Err(e) => {
            spinner.fail("Build failed");
            return Err(e.into());
        }
    };

    spinner.finish(&format!(
        "Build completed in {}",
        ui::format_duration(report.duration())
    ));

    if !quiet {
        for warning in report.warnings() {
            ui::warning(warning);
        }
        ui::print_build_summary(&report);
    }

    Ok(report)
}

fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_relative() {
        assert_eq!(
            display_relative(
                Path::new("/srv/app/client/src/index.ts"),
                Path::new("/srv/app")
            ),
            "client/src/index.ts"
        );
        assert_eq!(
            display_relative(Path::new("/elsewhere/x.ts"), Path::new("/srv/app")),
            "/elsewhere/x.ts"
        );
    }
}
