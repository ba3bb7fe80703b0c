use serde::Serialize;

/// Output module format for the bundle.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ECMAScript modules (import/export syntax)
    Esm,
    /// CommonJS modules (require/module.exports)
    Cjs,
    /// Immediately Invoked Function Expression
    Iife,
}

/// Target runtime environment.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Browser environment. Node.js built-ins are not available.
    Browser,
    /// Node.js environment.
    Node,
}

/// ECMAScript language-feature ceiling for the emitted code.
///
/// Only `Esnext` is built, which is also the engine's default, so no
/// transform target is passed.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EsTarget {
    Es2015,
    Es2016,
    Es2017,
    Es2018,
    Es2019,
    Es2020,
    Es2021,
    Es2022,
    /// Latest evergreen syntax
    Esnext,
}

impl From<OutputFormat> for rolldown::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Esm => rolldown::OutputFormat::Esm,
            OutputFormat::Cjs => rolldown::OutputFormat::Cjs,
            OutputFormat::Iife => rolldown::OutputFormat::Iife,
        }
    }
}

impl From<Platform> for rolldown::Platform {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Browser => rolldown::Platform::Browser,
            Platform::Node => rolldown::Platform::Node,
        }
    }
}
