use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub enabled: bool,
    pub output_dir: PathBuf,

    pub width: usize,
    pub height: usize,
    /// Space between the edge of the image and the plot frame, in pixels.
    pub margin: usize,
    /// Opacity of the standard deviation band.
    pub band_alpha: f32,
}
impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output_dir: PathBuf::from("."),

            width: 640,
            height: 480,
            margin: 40,
            band_alpha: 0.2,
        }
    }
}
