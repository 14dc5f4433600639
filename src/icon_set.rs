//! The fixed list of icons written on every run.

/// How a PWA manifest should advertise an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    Any,
    Maskable,
}

impl Purpose {
    pub fn as_str(self) -> &'static str {
        match self {
            Purpose::Any => "any",
            Purpose::Maskable => "maskable",
        }
    }
}

/// One output file of the icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconEntry {
    pub file_name: &'static str,
    /// Width and height in pixels.
    pub size: u32,
    /// Keep the logo inside the safe zone (padded canvas) instead of full bleed.
    pub safe_zone: bool,
    /// `None` for icons that are linked from HTML rather than the manifest.
    pub purpose: Option<Purpose>,
}

pub const ICON_SET: [IconEntry; 5] = [
    IconEntry {
        file_name: "icon-512x512-maskable.png",
        size: 512,
        safe_zone: true,
        purpose: Some(Purpose::Maskable),
    },
    IconEntry {
        file_name: "icon-192x192-maskable.png",
        size: 192,
        safe_zone: true,
        purpose: Some(Purpose::Maskable),
    },
    // Referenced through <link rel="apple-touch-icon">. iOS rounds the corners itself.
    IconEntry {
        file_name: "apple-touch-icon.png",
        size: 180,
        safe_zone: true,
        purpose: None,
    },
    IconEntry {
        file_name: "icon-512x512.png",
        size: 512,
        safe_zone: false,
        purpose: Some(Purpose::Any),
    },
    IconEntry {
        file_name: "icon-192x192.png",
        size: 192,
        safe_zone: false,
        purpose: Some(Purpose::Any),
    },
];
