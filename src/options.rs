use crate::render::GlyphPair;

/// Output produced by a render call
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// closed, mirrored SVG shape
    Blob,
    /// single zig-zag SVG curve
    Line,
    /// SVG spokes around a circle
    Radial,
    /// character raster
    Ascii,
    /// file summary followed by a bordered ASCII preview
    #[default]
    Info,
}

/// Fully resolved parameters for one render call
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct RenderParams {
    /// output width, pixels or characters
    pub width: u32,
    /// output height, pixels or characters
    pub height: u32,
    /// room kept free between the loudest peak and the edge
    pub padding: u32,
    /// peaks per second of audio; the ASCII renderers bucket by width and
    /// ignore it
    pub resolution: u32,
    /// inner circle radius of the radial renderer
    pub radius: u32,
    /// characters of the ASCII renderer
    pub glyphs: GlyphPair,
    /// draw a box around the ASCII raster
    pub border: bool,
}

impl RenderParams {
    /// Defaults used for `format` when the user overrides nothing
    pub fn defaults(format: OutputFormat) -> Self {
        let base = RenderParams {
            width: 800,
            height: 300,
            padding: 0,
            resolution: 5,
            radius: 50,
            glyphs: GlyphPair::default(),
            border: false,
        };

        match format {
            OutputFormat::Blob => base,
            OutputFormat::Line => RenderParams {
                resolution: 10,
                ..base
            },
            OutputFormat::Radial => RenderParams {
                width: 500,
                height: 500,
                resolution: 20,
                ..base
            },
            OutputFormat::Ascii => RenderParams {
                width: 80,
                height: 15,
                resolution: 2,
                ..base
            },
            OutputFormat::Info => RenderParams {
                width: 80,
                height: 18,
                resolution: 2,
                border: true,
                ..base
            },
        }
    }
}

/// User supplied overrides; `None` or zero keeps the format's default
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct RenderOptions {
    /// output width
    pub width: Option<u32>,
    /// output height
    pub height: Option<u32>,
    /// padding
    pub padding: Option<u32>,
    /// inner circle radius
    pub radius: Option<u32>,
    /// ASCII characters, see [`GlyphPair::parse`]
    pub chars: Option<String>,
    /// ASCII border
    pub border: bool,
    /// peaks per second
    pub resolution: Option<u32>,
}

fn pick(value: Option<u32>, default: u32) -> u32 {
    value.filter(|&v| v > 0).unwrap_or(default)
}

impl RenderOptions {
    /// Merge the overrides into the defaults for `format`.
    ///
    /// The info preview always uses its own geometry and border; only the
    /// glyphs and resolution can be changed.
    pub fn resolve(&self, format: OutputFormat) -> RenderParams {
        let defaults = RenderParams::defaults(format);
        let glyphs = self
            .chars
            .as_deref()
            .map_or(defaults.glyphs, GlyphPair::parse);

        if format == OutputFormat::Info {
            return RenderParams {
                glyphs,
                resolution: pick(self.resolution, defaults.resolution),
                ..defaults
            };
        }

        RenderParams {
            width: pick(self.width, defaults.width),
            height: pick(self.height, defaults.height),
            padding: self.padding.unwrap_or(defaults.padding),
            resolution: pick(self.resolution, defaults.resolution),
            radius: pick(self.radius, defaults.radius),
            glyphs,
            border: self.border || defaults.border,
        }
    }
}
