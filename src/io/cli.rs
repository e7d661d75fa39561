//! Command-line interface for single and batch pattern renders

use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_PALETTE_SEED, DEFAULT_WIDTH, OUTPUT_EXTENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_png;
use crate::io::progress::ProgressManager;
use crate::palette::{Color, PaletteRole};
use crate::pattern::layer::Layer;
use crate::pattern::mode::Mode;
use crate::pattern::params::{Density, SeedOffset};
use crate::render::synthesis::{SynthesisRequest, synthesize};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// Colour assigned to a palette role on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorAssignment {
    /// Role receiving the colour
    pub role: PaletteRole,
    /// Assigned colour
    pub color: Color,
}

/// Parse `ROLE=#RRGGBB`
///
/// # Errors
///
/// Returns an error if the `=` is missing, the role is unknown or the colour
/// is malformed
pub fn parse_color_assignment(value: &str) -> Result<ColorAssignment> {
    let (role, color) = value
        .split_once('=')
        .ok_or_else(|| invalid_parameter("color", &value, &"expected ROLE=#RRGGBB"))?;
    Ok(ColorAssignment {
        role: role.parse()?,
        color: color.trim().parse()?,
    })
}

fn parse_role(value: &str) -> Result<PaletteRole> {
    value.parse()
}

#[derive(Parser)]
#[command(name = "camogen")]
#[command(
    author,
    version,
    about = "Synthesize camouflage textures from seeded noise fields"
)]
/// Command-line arguments for the camouflage generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Pattern style; its preset supplies every default below
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = Mode::default())]
    pub mode: Mode,

    /// Feature scale (5-1000)
    #[arg(long)]
    pub scale: Option<f64>,

    /// Warp amplitude (0-200)
    #[arg(long)]
    pub distortion: Option<f64>,

    /// First feature control: stretch, fade, blob size or dot amount (0-30)
    #[arg(long)]
    pub feat_a: Option<f64>,

    /// Second feature control: roughness, line width or dot size (0-50)
    #[arg(long)]
    pub feat_b: Option<f64>,

    /// Layer 1 density (1-9)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=9))]
    pub density1: Option<u8>,

    /// Layer 2 density (1-9)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=9))]
    pub density2: Option<u8>,

    /// Layer 3 density (1-9)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=9))]
    pub density3: Option<u8>,

    /// Number of regenerate actions applied before rendering
    #[arg(short, long, default_value_t = 0)]
    pub seed_offset: u64,

    /// Raster width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Raster height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Apply the blocky digital pixelation filter
    #[arg(short, long)]
    pub pixelate: bool,

    /// Hide a layer (repeatable)
    #[arg(long = "hide", value_enum, ignore_case = true, value_name = "LAYER")]
    pub hidden: Vec<Layer>,

    /// Override a palette colour, e.g. `layer2=#6f4e37` (repeatable)
    #[arg(short, long = "color", value_name = "ROLE=#RRGGBB", value_parser = parse_color_assignment)]
    pub colors: Vec<ColorAssignment>,

    /// Shuffle the preset colours across roles
    #[arg(long)]
    pub shuffle: bool,

    /// Replace a role's colour with a random one (repeatable)
    #[arg(long = "randomize", value_name = "ROLE", value_parser = parse_role)]
    pub randomized: Vec<PaletteRole>,

    /// Seed for shuffled and randomized colours
    #[arg(long, default_value_t = DEFAULT_PALETTE_SEED)]
    pub palette_seed: u64,

    /// Output file, or output directory for batch renders
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Render every mode with its own preset
    #[arg(short, long)]
    pub all_modes: bool,

    /// Render this many successive seed offsets per mode
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub variants: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Render even if the output file already exists
    #[arg(short, long)]
    pub no_skip: bool,
}

/// One raster to render and where to write it
#[derive(Debug, Clone)]
pub struct RenderJob {
    /// Synthesis input
    pub request: SynthesisRequest,
    /// Destination file
    pub output: PathBuf,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if `output` names a directory of several renders
    pub const fn is_batch(&self) -> bool {
        self.all_modes || self.variants > 1
    }

    /// Build the request for `mode` from its preset and the overrides given
    pub fn request_for(&self, mode: Mode, seed_offset: SeedOffset) -> SynthesisRequest {
        let mut request = SynthesisRequest::for_mode(mode)
            .with_size(self.width, self.height)
            .with_seed_offset(seed_offset)
            .with_pixelate(self.pixelate);

        let params = &mut request.params;
        if let Some(scale) = self.scale {
            params.scale = scale;
        }
        if let Some(distortion) = self.distortion {
            params.distortion = distortion;
        }
        if let Some(feat_a) = self.feat_a {
            params.feat_a = feat_a;
        }
        if let Some(feat_b) = self.feat_b {
            params.feat_b = feat_b;
        }
        for (layer, density) in Layer::ALL
            .into_iter()
            .zip([self.density1, self.density2, self.density3])
        {
            if let Some(density) = density {
                params.set_density(layer, Density::new(density));
            }
        }

        let clamped = params.clamped();
        if clamped != *params {
            warn!(mode = %mode, "pattern parameters clamped into range");
            *params = clamped;
        }

        let mut rng = StdRng::seed_from_u64(self.palette_seed);
        if self.shuffle {
            request.palette.shuffle(&mut rng);
        }
        for &role in &self.randomized {
            request.palette.randomize(role, &mut rng);
        }
        for assignment in &self.colors {
            request.palette.set(assignment.role, assignment.color);
        }

        for &layer in &self.hidden {
            request.visibility.set(layer, false);
        }

        request
    }

    /// Every render requested, with its destination
    pub fn jobs(&self) -> Vec<RenderJob> {
        let modes: Vec<Mode> = if self.all_modes {
            Mode::ALL.to_vec()
        } else {
            vec![self.mode]
        };

        let mut jobs = Vec::with_capacity(modes.len() * self.variants as usize);
        for mode in modes {
            for variant in 0..self.variants {
                let seed_offset = SeedOffset(self.seed_offset.wrapping_add(variant));
                let output = if self.is_batch() {
                    batch_output_path(&self.output, mode, seed_offset)
                } else {
                    self.output.clone()
                };
                jobs.push(RenderJob {
                    request: self.request_for(mode, seed_offset),
                    output,
                });
            }
        }
        jobs
    }
}

/// File name for one render of a batch: `<mode>_<offset>.png` inside `dir`
pub fn batch_output_path(dir: &Path, mode: Mode, seed_offset: SeedOffset) -> PathBuf {
    dir.join(format!(
        "{}_{:03}.{OUTPUT_EXTENSION}",
        mode.name(),
        seed_offset.0
    ))
}

/// Renders every job requested on the command line
pub struct RenderProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl RenderProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = (cli.should_show_progress() && cli.is_batch()).then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Render and export every job
    ///
    /// # Errors
    ///
    /// Returns an error if any raster cannot be written
    pub fn process(&mut self) -> Result<()> {
        let jobs: Vec<RenderJob> = self
            .cli
            .jobs()
            .into_iter()
            .filter(|job| self.should_render(&job.output))
            .collect();

        if jobs.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(jobs.len());
        }

        for job in &jobs {
            self.render(job)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn should_render(&self, output: &Path) -> bool {
        if !self.cli.skip_existing() || !output.exists() {
            return true;
        }
        info!("Skipping: {} (output exists)", output.display());
        false
    }

    fn render(&mut self, job: &RenderJob) -> Result<()> {
        let start_time = Instant::now();
        let label = format!("{} #{}", job.request.mode.title(), job.request.seed_offset.0);

        if let Some(ref pm) = self.progress_manager {
            pm.start_job(&label);
        }

        let image = synthesize(&job.request);
        export_png(&image, &job.output)?;

        info!(
            "Rendered {label} to {} in {:?}",
            job.output.display(),
            start_time.elapsed()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_job();
        }

        Ok(())
    }
}
