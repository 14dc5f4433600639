use crate::error::IconError;
use crate::icon_set::{IconEntry, ICON_SET};
use crate::manifest_json::{write_manifest_json, MANIFEST_FILE_NAME};
use anyhow::{Context, Result};
use clap::ValueEnum;
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    imageops::FilterType,
    ColorType, DynamicImage, GenericImageView, ImageBuffer, ImageEncoder, Rgba,
};
use log::{debug, info, warn};
use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// How the cropped logo fills the icon canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FillPolicy {
    /// 10% transparent margin on every side of the maskable icons
    Padded,
    /// Scale to 110% of each icon size, then center-crop
    OverflowCrop,
    /// Scale the logo to 120% of itself, then center-crop before resizing
    OverflowScale,
}

impl fmt::Display for FillPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FillPolicy::Padded => "padded",
            FillPolicy::OverflowCrop => "overflow-crop",
            FillPolicy::OverflowScale => "overflow-scale",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub struct GenerateOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub policy: FillPolicy,
    pub background: Option<String>,
    pub manifest: bool,
}

/// Minimal rectangle around the non-transparent pixels. `right` and `bottom`
/// are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl ContentBounds {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// The policy-transformed logo, ready to be resized into each icon.
enum Artwork {
    Padded {
        full_bleed: DynamicImage,
        safe_zone: DynamicImage,
    },
    OverflowCrop(DynamicImage),
    OverflowScale(DynamicImage),
}

impl Artwork {
    fn prepare(policy: FillPolicy, logo: DynamicImage, background: Rgba<u8>) -> Self {
        match policy {
            FillPolicy::Padded => {
                let safe_zone = pad_to_safe_zone(&logo, background);
                debug!(
                    "Padded canvas is {}x{}",
                    safe_zone.width(),
                    safe_zone.height()
                );
                Artwork::Padded {
                    full_bleed: logo,
                    safe_zone,
                }
            }
            FillPolicy::OverflowCrop => Artwork::OverflowCrop(logo),
            FillPolicy::OverflowScale => Artwork::OverflowScale(overflow_scale(&logo)),
        }
    }

    fn render(&self, entry: &IconEntry) -> DynamicImage {
        let size = entry.size;
        match self {
            Artwork::Padded {
                full_bleed,
                safe_zone,
            } => {
                let source = if entry.safe_zone { safe_zone } else { full_bleed };
                source.resize_exact(size, size, FilterType::Lanczos3)
            }
            Artwork::OverflowCrop(logo) => overflow_crop(logo, size),
            Artwork::OverflowScale(scaled) => scaled.resize_exact(size, size, FilterType::Lanczos3),
        }
    }
}

pub fn generate_icons(options: GenerateOptions) -> Result<()> {
    let source = load_image(&options.input)?;
    info!(
        "Loaded {} ({}x{})",
        options.input.display(),
        source.width(),
        source.height()
    );

    let bounds = content_bounds(&source)
        .with_context(|| format!("Can't find the logo in {}", options.input.display()))?;
    info!("Content bounds: {:?}", bounds);

    let cropped = crop_to_content(&source, bounds);
    let background = parse_background(options.background.as_deref());
    let artwork = Artwork::prepare(options.policy, cropped, background);

    // Everything above is checked before the first file is touched.
    if !options.output.is_dir() {
        return Err(IconError::MissingOutputDir(options.output.clone()).into());
    }

    println!("Generating icons ({} policy)...", options.policy);
    for entry in &ICON_SET {
        let icon = artwork.render(entry);
        let output_path = options.output.join(entry.file_name);
        save_png(&icon, &output_path)
            .with_context(|| format!("Can't save {}", entry.file_name))?;
        println!("  ✓ Generated {}", entry.file_name);
    }

    if options.manifest {
        write_manifest_json(&options.output, &ICON_SET)
            .context("Failed to write manifest icons")?;
        println!("  ✓ Generated {MANIFEST_FILE_NAME}");
    }

    print_summary(options.policy);
    Ok(())
}

fn load_image(path: &Path) -> Result<DynamicImage, IconError> {
    let source = image::open(path).map_err(|source| IconError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    if !source.color().has_alpha() {
        return Err(IconError::NoAlpha(path.to_path_buf()));
    }

    Ok(source)
}

/// Find the bounding box of every pixel with a non-zero alpha value.
pub fn content_bounds(img: &DynamicImage) -> Result<ContentBounds, IconError> {
    // 16-bit keeps faint alpha that would round to zero in 8-bit.
    let rgba = img.to_rgba16();
    let mut bounds: Option<ContentBounds> = None;

    for (x, y, pixel) in rgba.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        let b = bounds.get_or_insert(ContentBounds {
            left: x,
            top: y,
            right: x + 1,
            bottom: y + 1,
        });
        b.left = b.left.min(x);
        b.top = b.top.min(y);
        b.right = b.right.max(x + 1);
        b.bottom = b.bottom.max(y + 1);
    }

    bounds.ok_or(IconError::EmptyContent)
}

pub fn crop_to_content(img: &DynamicImage, bounds: ContentBounds) -> DynamicImage {
    img.crop_imm(bounds.left, bounds.top, bounds.width(), bounds.height())
}

/// Center the logo on a canvas with a 10% margin of its width (horizontally)
/// and height (vertically) on each side.
pub fn pad_to_safe_zone(logo: &DynamicImage, background: Rgba<u8>) -> DynamicImage {
    let (width, height) = logo.dimensions();
    let pad_x = width / 10;
    let pad_y = height / 10;

    let mut canvas = ImageBuffer::from_pixel(width + pad_x * 2, height + pad_y * 2, background);
    if background[3] == 0 {
        image::imageops::replace(&mut canvas, logo, pad_x.into(), pad_y.into());
    } else {
        image::imageops::overlay(&mut canvas, logo, pad_x.into(), pad_y.into());
    }

    DynamicImage::ImageRgba8(canvas)
}

/// Side length of the intermediate image for the overflow-crop policy (110%).
pub fn overflow_size(size: u32) -> u32 {
    size * 11 / 10
}

/// Stretch the logo to 110% of `size` and cut the centered `size` square out of it.
pub fn overflow_crop(logo: &DynamicImage, size: u32) -> DynamicImage {
    let scaled_size = overflow_size(size);
    let scaled = logo.resize_exact(scaled_size, scaled_size, FilterType::Lanczos3);
    center_crop(&scaled, size, size)
}

/// Intermediate dimensions for the overflow-scale policy (120%).
pub fn overflow_scale_dimensions(width: u32, height: u32) -> (u32, u32) {
    (width * 6 / 5, height * 6 / 5)
}

/// Grow the logo by 20% and crop back to its own dimensions.
pub fn overflow_scale(logo: &DynamicImage) -> DynamicImage {
    let (width, height) = logo.dimensions();
    let (scaled_width, scaled_height) = overflow_scale_dimensions(width, height);
    let scaled = logo.resize_exact(scaled_width, scaled_height, FilterType::Lanczos3);
    debug!(
        "Overflow scaled {}x{} to {}x{}",
        width,
        height,
        scaled.width(),
        scaled.height()
    );
    center_crop(&scaled, width, height)
}

fn center_crop(img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let x = img.width().saturating_sub(width) / 2;
    let y = img.height().saturating_sub(height) / 2;
    img.crop_imm(x, y, width, height)
}

fn parse_background(color: Option<&str>) -> Rgba<u8> {
    let Some(color) = color else {
        return TRANSPARENT;
    };

    match css_color::Srgb::from_str(color) {
        Ok(color) => Rgba([
            (color.red * 255.) as u8,
            (color.green * 255.) as u8,
            (color.blue * 255.) as u8,
            (color.alpha * 255.) as u8,
        ]),
        Err(_) => {
            warn!("Unrecognized background color {color:?}, using transparent");
            TRANSPARENT
        }
    }
}

/// Encode the whole PNG in memory first so a failed encode never leaves a
/// truncated file behind.
fn save_png(image: &DynamicImage, path: &Path) -> Result<(), IconError> {
    let rgba_image = image.to_rgba8();
    let mut buf = Vec::new();
    write_png(
        rgba_image.as_raw(),
        &mut buf,
        rgba_image.width(),
        rgba_image.height(),
    )
    .map_err(|source| IconError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    std::fs::write(path, buf).map_err(|source| IconError::Write {
        path: path.to_path_buf(),
        source,
    })
}

// Encode image data as PNG with compression
fn write_png(
    image_data: &[u8],
    w: &mut Vec<u8>,
    width: u32,
    height: u32,
) -> Result<(), image::ImageError> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, width, height, ColorType::Rgba8)
}

fn print_summary(policy: FillPolicy) {
    match policy {
        FillPolicy::Padded => {
            println!("✓ Icons created with cropped logo (fills entire space)");
            println!("   - Maskable icons: 10% safe zone padding");
            println!("   - Regular icons: Full bleed");
        }
        FillPolicy::OverflowCrop => {
            println!("✓ Icons created with overflowing logo");
            println!("   - Logo scaled to 110% of each icon, then center-cropped");
        }
        FillPolicy::OverflowScale => {
            println!("✓ Icons created with overflowing logo");
            println!("   - Logo scaled to 120% and center-cropped before resizing");
        }
    }
}
