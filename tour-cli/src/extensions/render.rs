//! Renders a country and an optional tour as an SVG image.

#[cfg(test)]
#[path = "../../tests/unit/extensions/render_test.rs"]
mod render_test;

use plotters::prelude::*;
use std::error::Error;
use std::f64::consts::PI;
use std::path::Path;
use std::sync::Arc;
use tour_core::prelude::*;

type DrawResult<T> = Result<T, Box<dyn Error>>;

const MARGIN: u32 = 20;
const RING_COUNT: usize = 4;
const RING_POINTS: usize = 128;
const SPOKE_COUNT: usize = 12;
const MARKER_SIZE: u32 = 5;
const FONT_SIZE: u32 = 12;
const GUIDE_COLOR: RGBColor = RGBColor(220, 220, 220);

/// Specifies how a country is rendered.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Uses different marker colours for different regions.
    pub distinguish_regions: bool,
    /// Marks depots with crosses and capitalized labels placed below the marker.
    pub distinguish_depots: bool,
    /// Annotates locations with their names.
    pub location_names: bool,
    /// Draws concentric rings and spokes around the origin instead of a Cartesian grid.
    pub polar_projection: bool,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            distinguish_regions: true,
            distinguish_depots: true,
            location_names: true,
            polar_projection: true,
            width: 1024,
            height: 1024,
        }
    }
}

/// Renders country locations and, if given, a path through them into svg file.
pub fn render_country<P: AsRef<Path>>(
    country: &Country,
    path: Option<&[Arc<Location>]>,
    options: &RenderOptions,
    out: P,
) -> Result<(), GenericError> {
    if options.width == 0 || options.height == 0 {
        return Err("cannot render country: image size must be positive".into());
    }

    draw_country(country, path, options, out.as_ref()).map_err(|err| format!("cannot render country: '{err}'").into())
}

fn draw_country(
    country: &Country,
    path: Option<&[Arc<Location>]>,
    options: &RenderOptions,
    out: &Path,
) -> DrawResult<()> {
    let root = SVGBackend::new(out, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let extent = get_extent(country);
    let mut chart = ChartBuilder::on(&root)
        .margin(MARGIN)
        .set_label_area_size(LabelAreaPosition::Left, if options.polar_projection { 0 } else { 40 })
        .set_label_area_size(LabelAreaPosition::Bottom, if options.polar_projection { 0 } else { 40 })
        .build_cartesian_2d(-extent..extent, -extent..extent)?;

    if options.polar_projection {
        for ring in 1..=RING_COUNT {
            let radius = extent * ring as Float / RING_COUNT as Float;
            chart.draw_series(LineSeries::new(get_ring_points(radius), &GUIDE_COLOR))?;
        }

        for spoke in 0..SPOKE_COUNT {
            let theta = 2. * PI * spoke as Float / SPOKE_COUNT as Float;
            chart.draw_series(LineSeries::new(
                vec![(0., 0.), (extent * theta.cos(), extent * theta.sin())],
                &GUIDE_COLOR,
            ))?;
        }
    } else {
        chart.configure_mesh().light_line_style(&GUIDE_COLOR).draw()?;
    }

    if let Some(path) = path {
        chart.draw_series(LineSeries::new(
            path.iter().map(|location| location.position().to_cartesian()),
            BLACK.stroke_width(2),
        ))?;
    }

    let regions = country.regions();
    let get_color = |location: &Location| {
        if options.distinguish_regions {
            let idx = regions.iter().position(|region| *region == location.region()).unwrap_or(0);
            Palette99::pick(idx).to_rgba()
        } else {
            BLUE.to_rgba()
        }
    };
    let is_marked_depot = |location: &Location| options.distinguish_depots && location.is_depot();

    chart.draw_series(country.locations().iter().filter(|location| !is_marked_depot(location)).map(|location| {
        Circle::new(location.position().to_cartesian(), MARKER_SIZE, get_color(location).filled())
    }))?;

    chart.draw_series(country.locations().iter().filter(|location| is_marked_depot(location)).map(|location| {
        Cross::new(location.position().to_cartesian(), MARKER_SIZE + 2, get_color(location).stroke_width(3))
    }))?;

    if options.location_names {
        let font = ("sans-serif", FONT_SIZE).into_font().color(&BLACK);

        chart.draw_series(country.locations().iter().map(|location| {
            let (label, offset) = if is_marked_depot(location) {
                (location.name().to_uppercase(), (-(MARKER_SIZE as i32), MARKER_SIZE as i32 + 4))
            } else {
                (location.name().to_string(), (MARKER_SIZE as i32 + 2, -(FONT_SIZE as i32)))
            };

            EmptyElement::at(location.position().to_cartesian()) + Text::new(label, offset, font.clone())
        }))?;
    }

    root.present()?;

    Ok(())
}

/// Returns a radius of a circle around the origin which contains every location with some padding.
fn get_extent(country: &Country) -> Float {
    let max_distance = country
        .locations()
        .iter()
        .map(|location| {
            let (x, y) = location.position().to_cartesian();
            x.hypot(y)
        })
        .max_by(|a, b| compare_floats(*a, *b))
        .unwrap_or(0.);

    if max_distance > 0. { max_distance * 1.1 } else { 1. }
}

fn get_ring_points(radius: Float) -> Vec<(Float, Float)> {
    (0..=RING_POINTS)
        .map(|idx| {
            let theta = 2. * PI * idx as Float / RING_POINTS as Float;
            (radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}
