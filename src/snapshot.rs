//! Headless export of the plot's color field to PNG.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::ViewerError;
use crate::plot::HeightfieldPlot;

/// Lay the vertex colors out as a `(grid_size + 1)²` image, pixel `(w, h)` = vertex `(w, h)`
///
/// Vertices without a computed color yet (before the first tick) are transparent.
pub fn color_image(plot: &HeightfieldPlot) -> RgbaImage {
    let side = plot.grid_size() + 1;
    let colors = plot.vertices_color();

    RgbaImage::from_fn(side, side, |w, h| {
        colors
            .get(plot.index_of(w, h) as usize)
            .map(|c| Rgba([c.red, c.green, c.blue, c.alpha]))
            .unwrap_or(Rgba([0, 0, 0, 0]))
    })
}

/// Save the current color field as a PNG
pub fn save_png(plot: &HeightfieldPlot, path: impl AsRef<Path>) -> Result<(), ViewerError> {
    let path = path.as_ref();
    color_image(plot).save(path)?;
    log::info!(
        "Snapshot: {} ({}x{})",
        path.display(),
        plot.grid_size() + 1,
        plot.grid_size() + 1
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{NoiseParams, PlotParams};

    #[test]
    fn test_color_image_matches_vertices() {
        let noise = NoiseParams {
            seed: Some(4),
            ..Default::default()
        };
        let mut plot = HeightfieldPlot::new(PlotParams::default(), noise);
        plot.dynamic_update(false);

        let image = color_image(&plot);
        assert_eq!(image.dimensions(), (21, 21));

        let c = plot.vertices_color()[plot.index_of(3, 17) as usize];
        assert_eq!(image.get_pixel(3, 17), &Rgba([c.red, c.green, c.blue, c.alpha]));
    }

    #[test]
    fn test_color_image_before_first_tick_is_transparent() {
        let plot = HeightfieldPlot::new(
            PlotParams::default(),
            NoiseParams {
                seed: Some(4),
                ..Default::default()
            },
        );
        let image = color_image(&plot);
        assert!(image.pixels().all(|p| p.0[3] == 0));
    }
}
