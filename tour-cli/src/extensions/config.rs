//! Command line configuration.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use crate::extensions::import::ImportOptions;
use crate::extensions::render::RenderOptions;
use serde::Deserialize;
use std::io::{BufReader, Read};
use tour_core::prelude::{Environment, Float, GenericError, InfoLogger};

/// A tour planning configuration. All fields are optional, missing values fall back to defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Travel speed in length units per second. Default is 4.75.
    pub speed: Option<Float>,
    /// Converts names and regions to title case on import. Default is false.
    pub normalize_names: Option<bool>,
    /// Builds tours of different depots in parallel. Default is false.
    pub parallel: Option<bool>,
    /// Specifies rendering options.
    pub render: Option<RenderConfig>,
}

/// A rendering configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    /// Uses different marker colours for different regions. Default is true.
    pub distinguish_regions: Option<bool>,
    /// Marks depots with crosses and capitalized labels. Default is true.
    pub distinguish_depots: Option<bool>,
    /// Annotates locations with their names. Default is true.
    pub location_names: Option<bool>,
    /// Draws polar guides instead of Cartesian grid. Default is true.
    pub polar_projection: Option<bool>,
    /// Image width in pixels. Default is 1024.
    pub width: Option<u32>,
    /// Image height in pixels. Default is 1024.
    pub height: Option<u32>,
}

impl Config {
    /// Returns import options.
    pub fn import_options(&self) -> ImportOptions {
        let defaults = ImportOptions::default();

        ImportOptions {
            speed: self.speed.unwrap_or(defaults.speed),
            normalize_names: self.normalize_names.unwrap_or(defaults.normalize_names),
        }
    }

    /// Returns render options.
    pub fn render_options(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        let render = self.render.clone().unwrap_or_default();

        RenderOptions {
            distinguish_regions: render.distinguish_regions.unwrap_or(defaults.distinguish_regions),
            distinguish_depots: render.distinguish_depots.unwrap_or(defaults.distinguish_depots),
            location_names: render.location_names.unwrap_or(defaults.location_names),
            polar_projection: render.polar_projection.unwrap_or(defaults.polar_projection),
            width: render.width.unwrap_or(defaults.width),
            height: render.height.unwrap_or(defaults.height),
        }
    }

    /// Creates an environment with the given logger.
    pub fn create_environment(&self, logger: InfoLogger) -> Environment {
        Environment::new(logger, self.parallel.unwrap_or(false))
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}
