//! Reference images and their precomputed signatures.

use crate::image::{ImageView, OwnedImage};
use crate::sign::{SignMap, SignValue};
use crate::signature::Signature;
use crate::trace::{trace_event, trace_span};
use crate::transform::Transform;
use crate::util::SignScanResult;

/// Owned reference image in packed RGB format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    img: OwnedImage,
}

impl Template {
    /// Creates a template from a contiguous packed RGB buffer.
    pub fn new(data: Vec<u32>, width: usize, height: usize) -> SignScanResult<Self> {
        let img = OwnedImage::new(data, width, height)?;
        Ok(Self { img })
    }

    /// Copies a template out of a borrowed view.
    pub fn from_view(view: ImageView<'_, u32>) -> Self {
        Self {
            img: OwnedImage::from_view(view),
        }
    }

    /// Returns a borrowed view of the template data.
    pub fn view(&self) -> ImageView<'_, u32> {
        self.img.view()
    }

    /// Returns the template width in pixels.
    pub fn width(&self) -> usize {
        self.img.width()
    }

    /// Returns the template height in pixels.
    pub fn height(&self) -> usize {
        self.img.height()
    }
}

impl From<OwnedImage> for Template {
    fn from(img: OwnedImage) -> Self {
        Self { img }
    }
}

/// Reference vector and window size for one template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateDescriptor {
    width: usize,
    height: usize,
    signature: Signature,
}

impl TemplateDescriptor {
    /// Computes the reference vector of `template` with `len` entries.
    pub fn compile<T>(template: &Template, transform: &T, len: usize) -> Self
    where
        T: Transform + ?Sized,
    {
        let _span = trace_span!(
            "compile_template",
            width = template.width(),
            height = template.height()
        )
        .entered();
        let signature = Signature::from_view(template.view(), len, transform);
        trace_event!("template_compiled", map_len = signature.map().len());
        Self {
            width: template.width(),
            height: template.height(),
            signature,
        }
    }

    /// Returns the template width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the template height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the reference vector.
    pub fn reference(&self) -> &[SignValue] {
        self.signature.vector()
    }

    /// Returns the reduced map the reference vector was driven from.
    pub fn map(&self) -> &SignMap {
        self.signature.map()
    }
}
