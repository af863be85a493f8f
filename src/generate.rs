use std::{
    fmt,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    cache::{placeholder_exists, placeholder_path},
    dimensions::{DEFAULT_BASE, dimensions_from_ratio},
    encode::{DEFAULT_JPEG_QUALITY, save_jpeg},
    foundation::core::{Dimensions, Limits, Ratio, Rgb8},
    foundation::error::{PlaceholderError, PlaceholderResult},
    render::{RenderOptions, render_placeholder},
    validate::parse_hex_color,
};

pub const DEFAULT_COLOR: &str = "#96b08a";

/// Name of the directory under the output root that holds generated files.
pub const PLACEHOLDER_DIR: &str = "placeholders";

/// How the caller asked for the size, before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DimensionSpec {
    /// Explicit pixel size; both sides are required.
    Size {
        width: Option<i64>,
        height: Option<i64>,
    },
    /// Aspect ratio scaled by `base` pixels per unit.
    Ratio { values: Option<Vec<i64>>, base: i64 },
}

impl DimensionSpec {
    pub fn ratio(values: Vec<i64>) -> Self {
        Self::Ratio {
            values: Some(values),
            base: i64::from(DEFAULT_BASE),
        }
    }
}

pub fn resolve_dimensions(spec: &DimensionSpec, limits: &Limits) -> PlaceholderResult<Dimensions> {
    match spec {
        DimensionSpec::Size { width, height } => {
            let (Some(width), Some(height)) = (width, height) else {
                return Err(PlaceholderError::missing_dimension(format!(
                    "size mode needs --width and --height (got width={}, height={})",
                    show_opt(*width),
                    show_opt(*height)
                )));
            };
            Dimensions::new(*width, *height, limits)
        }
        DimensionSpec::Ratio { values, base } => {
            let values = values.as_deref().unwrap_or_default();
            let ratio = Ratio::from_values(values, limits.ratio)?;
            // Oversized bases still shrink to fit; negative ones resolve to 0.
            let base = (*base).clamp(0, i64::from(u32::MAX)) as u32;
            let (width, height) = dimensions_from_ratio(ratio, base, limits);
            Dimensions::new(i64::from(width), i64::from(height), limits).map_err(|_| {
                PlaceholderError::invalid_size(format!(
                    "ratio {ratio} resolves to {width}x{height}, outside width {} / height {}",
                    limits.width, limits.height
                ))
            })
        }
    }
}

fn show_opt(v: Option<i64>) -> String {
    v.map_or_else(|| "none".to_owned(), |v| v.to_string())
}

/// A fully validated placeholder to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceholderRequest {
    pub dimensions: Dimensions,
    pub color: Rgb8,
}

impl PlaceholderRequest {
    /// Validates dimensions first, then the color.
    pub fn resolve(
        spec: &DimensionSpec,
        color: &str,
        limits: &Limits,
    ) -> PlaceholderResult<Self> {
        let dimensions = resolve_dimensions(spec, limits)?;
        let color = parse_hex_color(color)?;
        Ok(Self { dimensions, color })
    }
}

impl fmt::Display for PlaceholderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "placeholder(width={}, height={}, color={})",
            self.dimensions.width, self.dimensions.height, self.color
        )
    }
}

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Files land in `out_root/placeholders`.
    pub out_root: PathBuf,
    pub limits: Limits,
    pub render: RenderOptions,
    pub jpeg_quality: u8,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_root: PathBuf::from("."),
            limits: Limits::default(),
            render: RenderOptions::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl GeneratorConfig {
    pub fn save_root(&self) -> PathBuf {
        self.out_root.join(PLACEHOLDER_DIR)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A new file was rendered and written.
    Created(PathBuf),
    /// A file with these dimensions already existed; nothing was written.
    Cached(PathBuf),
}

impl Outcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Created(p) | Self::Cached(p) => p,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Generator {
    cfg: GeneratorConfig,
}

impl Generator {
    pub fn new(cfg: GeneratorConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.cfg
    }

    /// Writes `save_root/{w}_x_{h}.jpg` unless it is already there.
    pub fn generate(&self, req: &PlaceholderRequest) -> PlaceholderResult<Outcome> {
        let save_root = self.cfg.save_root();
        std::fs::create_dir_all(&save_root)
            .with_context(|| format!("create placeholder dir '{}'", save_root.display()))?;

        let dims = req.dimensions;
        let path = placeholder_path(&save_root, dims);
        if placeholder_exists(dims.width, dims.height, &save_root) {
            tracing::info!(
                path = %path.display(),
                "placeholder {dims} already exists in placeholders directory"
            );
            return Ok(Outcome::Cached(path));
        }

        tracing::debug!(%req, "rendering");
        let img = render_placeholder(dims, req.color, &self.cfg.render)?;
        save_jpeg(&img, &path, self.cfg.jpeg_quality)?;
        Ok(Outcome::Created(path))
    }
}
