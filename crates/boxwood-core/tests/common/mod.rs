//! Stub collaborators shared by the integration tests.
//!
//! Each stub counts the calls it receives so tests can assert on exact
//! interaction patterns instead of end results alone.

// Not every test binary uses every stub.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::ops::Range;
use std::rc::Rc;

use boxwood_common::geometry::{Dimension, Rect};
use boxwood_core::content::ReplacedContent;
use boxwood_core::document::{Analyzer, BoxDocument, ViewSpec};
use boxwood_core::element::{MarkupElement, SimpleElement};
use boxwood_core::error::ViewError;
use boxwood_core::host::{Highlighter, HostContainer, ListenerToken, ScrollViewport};
use boxwood_core::layout::{LayoutBox, VisualContext};
use boxwood_core::surface::{Color, FontSpec, Surface};
use boxwood_core::view::ViewCore;

/// Fill color the stub highlighter paints with, so tests can spot the
/// highlight layer in a command list.
pub(crate) const HIGHLIGHT_COLOR: Color = Color::new(255, 255, 0, 128);

/// Scriptable layout box.
pub(crate) struct StubBox {
    pub(crate) bounds: Cell<Rect>,
    pub(crate) visible: Cell<bool>,
    pub(crate) declared_visible: Cell<bool>,
    pub(crate) displayed: Cell<bool>,
    pub(crate) overflow: String,
    pub(crate) min_width: Cell<f32>,
    pub(crate) max_width: Cell<f32>,
    pub(crate) background: Option<Color>,
    pub(crate) content: Option<Rc<dyn ReplacedContent>>,
    pub(crate) element: SimpleElement,
}

impl StubBox {
    pub(crate) fn new(bounds: Rect) -> Self {
        Self {
            bounds: Cell::new(bounds),
            visible: Cell::new(true),
            declared_visible: Cell::new(true),
            displayed: Cell::new(true),
            overflow: "visible".to_string(),
            min_width: Cell::new(0.0),
            max_width: Cell::new(f32::MAX),
            background: None,
            content: None,
            element: SimpleElement::default(),
        }
    }

    pub(crate) fn with_overflow(mut self, overflow: &str) -> Self {
        self.overflow = overflow.to_string();
        self
    }

    pub(crate) fn with_widths(self, min: f32, max: f32) -> Self {
        self.min_width.set(min);
        self.max_width.set(max);
        self
    }

    pub(crate) fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub(crate) fn with_content(mut self, content: Rc<dyn ReplacedContent>) -> Self {
        self.content = Some(content);
        self
    }

    pub(crate) fn with_element(mut self, element: SimpleElement) -> Self {
        self.element = element;
        self
    }
}

impl LayoutBox for StubBox {
    fn absolute_bounds(&self) -> Rect {
        self.bounds.get()
    }

    fn is_visible(&self) -> bool {
        self.visible.get()
    }

    fn is_declared_visible(&self) -> bool {
        self.declared_visible.get()
    }

    fn is_displayed(&self) -> bool {
        self.displayed.get()
    }

    fn overflow_x(&self) -> &str {
        &self.overflow
    }

    fn minimal_width(&self) -> f32 {
        self.min_width.get()
    }

    fn maximal_width(&self) -> f32 {
        self.max_width.get()
    }

    fn visual_context(&self) -> VisualContext {
        VisualContext::default()
    }

    fn draw_background(&self, surface: &mut dyn Surface) {
        if let Some(color) = self.background {
            surface.fill_rect(self.bounds.get(), color);
        }
    }

    fn content_width(&self) -> f32 {
        self.bounds.get().width
    }

    fn content_height(&self) -> f32 {
        self.bounds.get().height
    }

    fn content_obj(&self) -> Option<Rc<dyn ReplacedContent>> {
        self.content.clone()
    }

    fn element(&self) -> Rc<dyn MarkupElement> {
        Rc::new(self.element.clone())
    }
}

/// Childless view core over a stub box.
pub(crate) fn core_of(layout: &Rc<StubBox>, start: usize, end: usize) -> ViewCore {
    ViewCore::new(Rc::clone(layout) as Rc<dyn LayoutBox>, start, end, Vec::new())
}

/// Viewport that counts listener registrations.
pub(crate) struct StubViewport {
    pub(crate) extent: Cell<Dimension>,
    pub(crate) added: Cell<u32>,
    pub(crate) removed: Cell<u32>,
    next_token: Cell<u64>,
}

impl StubViewport {
    pub(crate) fn new(extent: Dimension) -> Rc<Self> {
        Rc::new(Self {
            extent: Cell::new(extent),
            added: Cell::new(0),
            removed: Cell::new(0),
            next_token: Cell::new(1),
        })
    }

    pub(crate) fn active_listeners(&self) -> u32 {
        self.added.get() - self.removed.get()
    }
}

impl ScrollViewport for StubViewport {
    fn extent(&self) -> Dimension {
        self.extent.get()
    }

    fn add_resize_listener(&self) -> ListenerToken {
        self.added.set(self.added.get() + 1);
        let token = self.next_token.get();
        self.next_token.set(token + 1);
        ListenerToken(token)
    }

    fn remove_resize_listener(&self, _token: ListenerToken) {
        self.removed.set(self.removed.get() + 1);
    }
}

/// Container that counts repaint and preference notifications.
pub(crate) struct StubContainer {
    pub(crate) viewport: RefCell<Option<Rc<dyn ScrollViewport>>>,
    pub(crate) highlighter: RefCell<Option<Rc<dyn Highlighter>>>,
    pub(crate) repaints: Cell<u32>,
    pub(crate) preference_notices: Cell<u32>,
}

impl StubContainer {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            viewport: RefCell::new(None),
            highlighter: RefCell::new(None),
            repaints: Cell::new(0),
            preference_notices: Cell::new(0),
        })
    }

    pub(crate) fn with_viewport(viewport: Rc<dyn ScrollViewport>) -> Rc<Self> {
        let container = Self::new();
        *container.viewport.borrow_mut() = Some(viewport);
        container
    }
}

impl HostContainer for StubContainer {
    fn viewport(&self) -> Option<Rc<dyn ScrollViewport>> {
        self.viewport.borrow().clone()
    }

    fn highlighter(&self) -> Option<Rc<dyn Highlighter>> {
        self.highlighter.borrow().clone()
    }

    fn request_repaint(&self) {
        self.repaints.set(self.repaints.get() + 1);
    }

    fn preferences_changed(&self) {
        self.preference_notices.set(self.preference_notices.get() + 1);
    }
}

/// Highlighter that records every request and fills the allocation with a
/// sentinel color so paint ordering is observable.
#[derive(Default)]
pub(crate) struct StubHighlighter {
    pub(crate) calls: RefCell<Vec<(Range<usize>, Rect)>>,
}

impl Highlighter for StubHighlighter {
    fn paint_highlights(&self, surface: &mut dyn Surface, range: Range<usize>, allocation: Rect) {
        self.calls.borrow_mut().push((range, allocation));
        surface.fill_rect(allocation, HIGHLIGHT_COLOR);
    }
}

/// Analyzer that replays a canned spec batch, or fails on demand.
#[derive(Default)]
pub(crate) struct StubAnalyzer {
    pub(crate) calls: u32,
    pub(crate) last_dimension: Option<Dimension>,
    pub(crate) fail: bool,
    pub(crate) specs: Vec<ViewSpec>,
}

impl Analyzer for StubAnalyzer {
    fn relayout(&mut self, dimension: Dimension) -> std::io::Result<Vec<ViewSpec>> {
        self.calls += 1;
        self.last_dimension = Some(dimension);
        if self.fail {
            return Err(std::io::Error::other("layout engine unavailable"));
        }
        Ok(self.specs.clone())
    }
}

/// Document that counts batch replacements.
#[derive(Default)]
pub(crate) struct StubDocument {
    pub(crate) length: usize,
    pub(crate) replaced: u32,
}

impl BoxDocument for StubDocument {
    fn len(&self) -> usize {
        self.length
    }

    fn replace_views(&mut self, specs: Vec<ViewSpec>) {
        self.replaced += 1;
        self.length = specs.iter().map(|spec| spec.end).max().unwrap_or(0);
    }
}

/// Surface without clip support, for the unsupported-surface error path.
#[derive(Default)]
pub(crate) struct PlainSurface;

impl Surface for PlainSurface {
    fn set_color(&mut self, _color: Color) {}

    fn set_font(&mut self, _font: FontSpec) {}

    fn fill_rect(&mut self, _rect: Rect, _color: Color) {}

    fn draw_image(&mut self, _image: &Rc<boxwood_common::image::LoadedImage>, _dest: Rect) {}

    fn draw_text(&mut self, _text: &str, _x: f32, _y: f32) {}
}

/// Shorthand for asserting an out-of-range error's payload.
pub(crate) fn assert_out_of_range(err: &ViewError, offset: usize, start: usize, end: usize) {
    match err {
        ViewError::OutOfRange {
            offset: o,
            start: s,
            end: e,
        } => {
            assert_eq!(*o, offset);
            assert_eq!(*s, start);
            assert_eq!(*e, end);
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
}
