//! QR rendering for share links

use qrcode::render::{svg, unicode};
use qrcode::QrCode;

use crate::error::{CardError, CardResult};

/// Default rendered QR size in pixels
pub const DEFAULT_QR_SIZE: u32 = 256;

/// A rendered QR code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    text: String,
    size: u32,
    svg: String,
}

impl QrImage {
    /// Encode `text` and render it as a `size`×`size` SVG
    pub fn render(text: &str, size: u32) -> CardResult<Self> {
        let code = encode(text)?;
        let svg = code
            .render()
            .min_dimensions(size, size)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build();
        // The renderer rounds up to whole pixels per module; the viewBox keeps
        // that grid and the root element is scaled down to the requested size.
        let svg = set_root_dimensions(&svg, size);
        Ok(Self {
            text: text.to_string(),
            size,
            svg,
        })
    }

    /// Encoded text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Requested size in pixels
    pub fn size(&self) -> u32 {
        self.size
    }

    /// SVG markup
    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// Same code drawn with unicode half blocks, for terminals
    pub fn to_terminal(&self) -> CardResult<String> {
        let code = encode(&self.text)?;
        Ok(code
            .render::<unicode::Dense1x2>()
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark)
            .build())
    }
}

fn encode(text: &str) -> CardResult<QrCode> {
    QrCode::new(text.as_bytes()).map_err(|e| CardError::QrEncoding(e.to_string()))
}

/// Replace the `width` and `height` attributes of the root `<svg>` element
fn set_root_dimensions(svg: &str, size: u32) -> String {
    let Some(start) = svg.find("<svg") else {
        return svg.to_string();
    };
    let Some(len) = svg[start..].find('>') else {
        return svg.to_string();
    };
    let end = start + len;

    let mut tag = svg[start..end].to_string();
    for attr in ["width", "height"] {
        let key = format!(" {}=\"", attr);
        if let Some(at) = tag.find(&key) {
            let value_start = at + key.len();
            if let Some(value_len) = tag[value_start..].find('"') {
                tag.replace_range(value_start..value_start + value_len, &size.to_string());
            }
        }
    }

    format!("{}{}{}", &svg[..start], tag, &svg[end..])
}

/// The QR box: holds at most one rendered image, hidden until first shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QrPanel {
    image: Option<QrImage>,
    visible: bool,
}

impl QrPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the current image
    pub fn clear(&mut self) {
        self.image = None;
    }

    /// Replace the current image
    pub fn render(&mut self, image: QrImage) {
        self.image = Some(image);
    }

    /// Make the box visible
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn image(&self) -> Option<&QrImage> {
        self.image.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
