//! Window scan and vote-based recognition.
//!
//! Every template gets its own `WindowCursor` sized like the template. Each
//! step pulls one window from every cursor that is not yet exhausted, turns
//! the windows into candidate vectors and lets the templates vote position by
//! position. The window is credited to the template with the most votes, and
//! each template keeps the window with its highest confidence, counting only
//! votes within the configured tolerance.

mod sink;
mod vote;
mod window;

pub use sink::{MapLabel, MapSink, NoopSink};
pub use vote::{cast_vote, pick_owner};
pub use window::{WindowCursor, WindowOrigin};

use crate::image::{ImageView, OwnedImage};
use crate::sign::{SignMap, SignValue};
use crate::signature::{build_vectors, reduced_map};
use crate::template::{Template, TemplateDescriptor};
use crate::trace::{trace_event, trace_span};
use crate::transform::{NearestSign, Transform};
use crate::util::{ImageRole, SignScanError, SignScanResult};

/// Default signature vector length.
pub const DEFAULT_SIGNATURE_LEN: usize = 100;

/// Which reference position is compared against candidate position `p`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReferenceIndexing {
    /// Every template compares `reference[p]` with `candidate[p]`.
    #[default]
    PerPosition,
    /// The last template always reads `reference[k]`; the others read
    /// `reference[p]`. Reproduces results recorded with the legacy matcher.
    PinnedLast(usize),
}

/// Configuration for recognition runs.
///
/// Voting itself never looks at the tolerance: every position votes for the
/// strictly nearest template (ties go to the last one). The tolerance and the
/// minimum confidence only decide whether the owner of a window may keep it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    /// Length of every reference and candidate vector.
    pub signature_len: usize,
    /// Largest distance at which an owner's vote counts towards its
    /// confidence; `None` counts every vote.
    pub vote_tolerance: Option<SignValue>,
    /// Confidence a window needs before it can be recorded; `None` requires
    /// all `signature_len` positions.
    pub min_confidence: Option<usize>,
    /// Reference indexing used while voting.
    pub reference_indexing: ReferenceIndexing,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            signature_len: DEFAULT_SIGNATURE_LEN,
            vote_tolerance: Some(SignValue::MIN),
            min_confidence: None,
            reference_indexing: ReferenceIndexing::PerPosition,
        }
    }
}

impl MatchConfig {
    fn validate(&self) -> SignScanResult<()> {
        if self.signature_len == 0 {
            return Err(SignScanError::InvalidInput("signature_len must be at least 1"));
        }
        if self.signature_len > SignValue::MAX.value() as usize {
            return Err(SignScanError::InvalidInput(
                "signature_len must not exceed the signature value range",
            ));
        }
        if matches!(self.min_confidence, Some(k) if k > self.signature_len) {
            return Err(SignScanError::InvalidInput(
                "min_confidence must not exceed signature_len",
            ));
        }
        if let ReferenceIndexing::PinnedLast(k) = self.reference_indexing {
            if k >= self.signature_len {
                return Err(SignScanError::InvalidInput(
                    "pinned reference index must be below signature_len",
                ));
            }
        }
        Ok(())
    }

    fn required_confidence(&self) -> usize {
        self.min_confidence.unwrap_or(self.signature_len).max(1)
    }
}

/// Votes of one window sample, per template.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Tally {
    /// Positions won by each template.
    votes: Vec<usize>,
    /// Won positions whose distance stayed within the vote tolerance.
    close: Vec<usize>,
}

/// One template's window within a `WindowSample`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowSlot {
    /// Scan position the window was cut from.
    pub origin: WindowOrigin,
    /// Candidate vector of the window.
    pub vector: Vec<SignValue>,
}

/// Windows cut at one scan step, indexed by template.
///
/// A slot is `None` once that template's cursor is exhausted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowSample {
    slots: Vec<Option<WindowSlot>>,
}

impl WindowSample {
    /// Returns the slots in template order.
    pub fn slots(&self) -> &[Option<WindowSlot>] {
        &self.slots
    }

    /// Returns the slot of template `index`, if present.
    pub fn slot(&self, index: usize) -> Option<&WindowSlot> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Returns true when every slot is absent.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// Window located for a template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Located {
    /// Top-left corner in scan coordinates.
    pub origin: WindowOrigin,
    /// Window width in pixels (the template width).
    pub width: usize,
    /// Window height in pixels (the template height).
    pub height: usize,
    /// Votes the window collected for this template.
    pub confidence: usize,
    /// Pixels of the scan image under the window.
    pub image: OwnedImage,
}

/// Outcome of the search for a single template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateOutcome {
    /// The template was attributed to a window.
    Located(Located),
    /// No window was ever attributed to the template.
    NotRecognized,
}

impl TemplateOutcome {
    /// Returns the located window, if any.
    pub fn located(&self) -> Option<&Located> {
        match self {
            TemplateOutcome::Located(located) => Some(located),
            TemplateOutcome::NotRecognized => None,
        }
    }

    /// Returns true when the template was located.
    pub fn is_recognized(&self) -> bool {
        matches!(self, TemplateOutcome::Located(_))
    }
}

/// Result of a recognition run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recognition {
    outcomes: Vec<TemplateOutcome>,
    windows_scanned: usize,
}

impl Recognition {
    /// Returns one outcome per template, in template order.
    pub fn outcomes(&self) -> &[TemplateOutcome] {
        &self.outcomes
    }

    /// Returns the outcome for template `index`.
    pub fn outcome(&self, index: usize) -> Option<&TemplateOutcome> {
        self.outcomes.get(index)
    }

    /// Number of scan steps that produced at least one window.
    pub fn windows_scanned(&self) -> usize {
        self.windows_scanned
    }

    /// Consumes the recognition and returns the outcomes.
    pub fn into_outcomes(self) -> Vec<TemplateOutcome> {
        self.outcomes
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Best {
    confidence: usize,
    origin: Option<WindowOrigin>,
}

/// Locates a fixed set of templates in scan images.
pub struct Recognizer<T = NearestSign> {
    templates: Vec<Template>,
    transform: T,
    cfg: MatchConfig,
}

impl Recognizer<NearestSign> {
    /// Creates a recognizer using the built-in `NearestSign` transform.
    pub fn with_nearest_sign(templates: Vec<Template>) -> Self {
        Self::new(templates, NearestSign)
    }
}

impl<T: Transform> Recognizer<T> {
    /// Creates a recognizer with the default configuration.
    pub fn new(templates: Vec<Template>, transform: T) -> Self {
        Self {
            templates,
            transform,
            cfg: MatchConfig::default(),
        }
    }

    /// Replaces the match configuration.
    pub fn with_config(mut self, cfg: MatchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Returns the templates in search order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Searches `scan` for every template.
    pub fn recognize(&self, scan: ImageView<'_, u32>) -> SignScanResult<Recognition> {
        self.recognize_with_sink(scan, &mut NoopSink)
    }

    /// Searches `scan` for every template, reporting reduced maps to `sink`.
    pub fn recognize_with_sink(
        &self,
        scan: ImageView<'_, u32>,
        sink: &mut dyn MapSink,
    ) -> SignScanResult<Recognition> {
        let _span = trace_span!(
            "recognize",
            templates = self.templates.len(),
            scan_width = scan.width(),
            scan_height = scan.height()
        )
        .entered();

        self.cfg.validate()?;
        self.check_inputs(scan)?;

        let len = self.cfg.signature_len;
        let descriptors: Vec<TemplateDescriptor> = self
            .templates
            .iter()
            .map(|tpl| TemplateDescriptor::compile(tpl, &self.transform, len))
            .collect();
        for (index, descriptor) in descriptors.iter().enumerate() {
            sink.emit(MapLabel::Template(index), descriptor.map());
        }

        let mut cursors: Vec<WindowCursor> = descriptors
            .iter()
            .map(|d| WindowCursor::new(d.width(), d.height(), scan.width(), scan.height()))
            .collect();
        let mut best = vec![Best::default(); descriptors.len()];
        let mut windows_scanned = 0usize;
        let required = self.cfg.required_confidence();

        while let Some(sample) = self.next_sample(scan, &mut cursors, sink)? {
            windows_scanned += 1;
            let tally = self.tally(&descriptors, &sample);
            let (owner, _) = pick_owner(&tally.votes).ok_or(SignScanError::UnknownOwner {
                owner: 0,
                templates: descriptors.len(),
            })?;
            let confidence = tally.close.get(owner).copied().unwrap_or(0);
            let record = best.get_mut(owner).ok_or(SignScanError::UnknownOwner {
                owner,
                templates: descriptors.len(),
            })?;
            // An exhausted template can win a tie but has no window to keep.
            let Some(slot) = sample.slot(owner) else {
                continue;
            };
            if confidence >= required && confidence > record.confidence {
                record.confidence = confidence;
                record.origin = Some(slot.origin);
                trace_event!(
                    "result_updated",
                    template = owner,
                    x = slot.origin.x,
                    y = slot.origin.y,
                    confidence = confidence
                );
            }
        }
        trace_event!("window_scan_complete", windows = windows_scanned);

        let mut outcomes = Vec::with_capacity(descriptors.len());
        for (index, (descriptor, record)) in descriptors.iter().zip(&best).enumerate() {
            let outcome = match record.origin {
                Some(origin) => {
                    let view =
                        scan.roi(origin.x, origin.y, descriptor.width(), descriptor.height())?;
                    TemplateOutcome::Located(Located {
                        origin,
                        width: descriptor.width(),
                        height: descriptor.height(),
                        confidence: record.confidence,
                        image: OwnedImage::from_view(view),
                    })
                }
                None => TemplateOutcome::NotRecognized,
            };
            trace_event!(
                "template_outcome",
                template = index,
                recognized = outcome.is_recognized(),
                confidence = record.confidence
            );
            outcomes.push(outcome);
        }

        Ok(Recognition {
            outcomes,
            windows_scanned,
        })
    }

    fn check_inputs(&self, scan: ImageView<'_, u32>) -> SignScanResult<()> {
        if self.templates.is_empty() {
            return Err(SignScanError::InvalidInput("at least one template is required"));
        }
        if scan.is_empty() {
            return Err(SignScanError::InvalidDimensions {
                image: ImageRole::Scan,
                width: scan.width(),
                height: scan.height(),
            });
        }
        for (index, tpl) in self.templates.iter().enumerate() {
            if tpl.width() == 0 || tpl.height() == 0 {
                return Err(SignScanError::InvalidDimensions {
                    image: ImageRole::Template(index),
                    width: tpl.width(),
                    height: tpl.height(),
                });
            }
        }
        for (index, tpl) in self.templates.iter().enumerate() {
            if tpl.width() > scan.width() || tpl.height() > scan.height() {
                return Err(SignScanError::TemplateTooLarge {
                    index,
                    width: tpl.width(),
                    height: tpl.height(),
                    scan_width: scan.width(),
                    scan_height: scan.height(),
                });
            }
        }
        Ok(())
    }

    fn next_sample(
        &self,
        scan: ImageView<'_, u32>,
        cursors: &mut [WindowCursor],
        sink: &mut dyn MapSink,
    ) -> SignScanResult<Option<WindowSample>> {
        let len = self.cfg.signature_len;
        let mut windows = Vec::with_capacity(cursors.len());
        for (template, cursor) in cursors.iter_mut().enumerate() {
            let Some(origin) = cursor.next() else {
                windows.push(None);
                continue;
            };
            let view = scan.roi(origin.x, origin.y, cursor.width(), cursor.height())?;
            let map = reduced_map(view, len, &self.transform);
            sink.emit(MapLabel::Window { template, origin }, &map);
            windows.push(Some((origin, map)));
        }
        if windows.iter().all(Option::is_none) {
            return Ok(None);
        }

        let maps: Vec<Option<&SignMap>> = windows
            .iter()
            .map(|window| window.as_ref().map(|(_, map)| map))
            .collect();
        let vectors = build_vectors(&maps, len, &self.transform);
        let slots = windows
            .iter()
            .zip(vectors)
            .map(|(window, vector)| {
                window
                    .as_ref()
                    .map(|(origin, _)| WindowSlot { origin: *origin, vector })
            })
            .collect();
        Ok(Some(WindowSample { slots }))
    }

    fn tally(&self, descriptors: &[TemplateDescriptor], sample: &WindowSample) -> Tally {
        let count = descriptors.len();
        let mut tally = Tally {
            votes: vec![0; count],
            close: vec![0; count],
        };
        let mut distances = vec![SignValue::MAX; count];
        for p in 0..self.cfg.signature_len {
            for (idx, (descriptor, slot)) in descriptors.iter().zip(sample.slots()).enumerate() {
                distances[idx] = match slot {
                    Some(slot) => {
                        let ref_pos = match self.cfg.reference_indexing {
                            ReferenceIndexing::PinnedLast(k) if idx + 1 == count => k,
                            _ => p,
                        };
                        descriptor.reference()[ref_pos] - slot.vector[p]
                    }
                    None => SignValue::MAX,
                };
            }
            if let Some(winner) = cast_vote(&distances) {
                tally.votes[winner] += 1;
                if self.cfg.vote_tolerance.map_or(true, |limit| distances[winner] <= limit) {
                    tally.close[winner] += 1;
                }
            }
        }
        tally
    }
}
